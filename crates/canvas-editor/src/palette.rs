//! The fixed palette of draggable component types

use serde::{Deserialize, Serialize};

/// Component types the palette offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Server,
    Database,
    LoadBalancer,
    Cache,
    Cdn,
    K8s,
}

impl ComponentKind {
    /// Wire name of this kind, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Server => "server",
            ComponentKind::Database => "database",
            ComponentKind::LoadBalancer => "loadbalancer",
            ComponentKind::Cache => "cache",
            ComponentKind::Cdn => "cdn",
            ComponentKind::K8s => "k8s",
        }
    }

    /// Parse a wire name back to a kind; `None` for unknown types
    pub fn parse(s: &str) -> Option<Self> {
        PALETTE
            .iter()
            .find(|entry| entry.kind.as_str() == s)
            .map(|entry| entry.kind)
    }
}

/// One draggable template in the palette
#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub kind: ComponentKind,
    /// Material symbol name shown on the palette tile
    pub icon: &'static str,
    pub label: &'static str,
}

/// The palette offered to the user, in display order.
pub const PALETTE: [PaletteEntry; 6] = [
    PaletteEntry {
        kind: ComponentKind::Server,
        icon: "dns",
        label: "Server",
    },
    PaletteEntry {
        kind: ComponentKind::Database,
        icon: "storage",
        label: "Database",
    },
    PaletteEntry {
        kind: ComponentKind::LoadBalancer,
        icon: "account_tree",
        label: "Load Balancer",
    },
    PaletteEntry {
        kind: ComponentKind::Cache,
        icon: "bolt",
        label: "Cache",
    },
    PaletteEntry {
        kind: ComponentKind::Cdn,
        icon: "language",
        label: "CDN",
    },
    PaletteEntry {
        kind: ComponentKind::K8s,
        icon: "splitscreen_add",
        label: "K8s Cluster",
    },
];

/// Icon for a raw component type string; unknown types get a placeholder.
pub fn icon_for(component_type: &str) -> &'static str {
    PALETTE
        .iter()
        .find(|entry| entry.kind.as_str() == component_type)
        .map(|entry| entry.icon)
        .unwrap_or("help")
}

/// Label for a raw component type string; unknown types get a placeholder.
pub fn label_for(component_type: &str) -> &'static str {
    PALETTE
        .iter()
        .find(|entry| entry.kind.as_str() == component_type)
        .map(|entry| entry.label)
        .unwrap_or("Unknown")
}
