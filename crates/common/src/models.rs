//! Design records and component placements

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One positioned icon instance on the canvas.
///
/// Placements arrive from clients with whatever fields they carry; anything
/// missing is defaulted rather than rejected, so a bare `{type, x, y}` body
/// is accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentPlacement {
    /// Generated placement id (`<type>-<uuid>`); empty when the client
    /// never assigned one, and omitted from JSON in that case.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Palette type that produced this placement. Unknown types are
    /// tolerated; icon/label lookups fall back to a default.
    #[serde(rename = "type", default)]
    pub component_type: String,

    /// Pointer-relative x coordinate within the canvas.
    #[serde(default)]
    pub x: f64,

    /// Pointer-relative y coordinate within the canvas.
    #[serde(default)]
    pub y: f64,
}

/// A named, timestamped collection of component placements.
///
/// Records are immutable once created and live only in the store process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    /// Server-generated uuid v4 string
    pub id: String,

    /// Display name; defaulted to `Design N` when the client omits it
    pub name: String,

    /// Placements in the order the client arranged them
    pub components: Vec<ComponentPlacement>,

    /// When this design was submitted
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Design {
    /// Create a new design record with a generated id and current timestamp
    pub fn new(name: String, components: Vec<ComponentPlacement>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            components,
            created_at: Utc::now(),
        }
    }
}
