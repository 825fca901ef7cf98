//! Shared data model for the Axiom canvas application.
//!
//! Both the canvas editor (HTTP client side) and the design store (server
//! side) speak the same JSON shapes; keeping them in one crate means the
//! wire format is defined exactly once.

pub mod models;

pub use models::{ComponentPlacement, Design};
