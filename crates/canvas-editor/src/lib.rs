//! Axiom Canvas Editor
//!
//! The editor side of the Axiom canvas application: a fixed palette of
//! infrastructure component types, the local drag-and-drop editing state,
//! and an HTTP client for saving finished designs to the design store.
//!
//! The editor holds only view state. Nothing here can fail; placements are
//! created on drop, cleared on demand, and persisted only when explicitly
//! saved through [`StoreClient`].

pub mod client;
pub mod editor;
pub mod palette;

pub use client::{ClientError, StoreClient};
pub use editor::CanvasEditor;
pub use palette::{ComponentKind, PaletteEntry, PALETTE};
