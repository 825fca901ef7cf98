//! Local canvas editing state

use axiom_common::ComponentPlacement;
use uuid::Uuid;

use crate::palette::ComponentKind;

/// Controlled state of the canvas editor.
///
/// Tracks the placed components, the palette type currently being dragged,
/// and the dark-mode display flag. All transitions are infallible; invalid
/// input (a drop with no active drag, out-of-bounds coordinates) is
/// tolerated rather than rejected.
#[derive(Debug, Default)]
pub struct CanvasEditor {
    components: Vec<ComponentPlacement>,
    dragged: Option<ComponentKind>,
    dark_mode: bool,
}

impl CanvasEditor {
    /// Create an empty editor
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements currently on the canvas, in drop order
    pub fn components(&self) -> &[ComponentPlacement] {
        &self.components
    }

    /// Palette type currently being dragged, if any
    pub fn dragged(&self) -> Option<ComponentKind> {
        self.dragged
    }

    /// Whether the dark-mode display flag is set
    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Record the palette type being dragged
    pub fn start_drag(&mut self, kind: ComponentKind) {
        self.dragged = Some(kind);
    }

    /// Drop the dragged component at a pointer position.
    ///
    /// Coordinates are stored relative to the canvas origin
    /// (`canvas_left`, `canvas_top`). Returns the new placement, or `None`
    /// when no drag is active. Drag state is cleared either way a drop
    /// lands.
    pub fn drop_at(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
        canvas_left: f64,
        canvas_top: f64,
    ) -> Option<&ComponentPlacement> {
        let kind = self.dragged.take()?;

        let placement = ComponentPlacement {
            id: format!("{}-{}", kind.as_str(), Uuid::new_v4().simple()),
            component_type: kind.as_str().to_string(),
            x: pointer_x - canvas_left,
            y: pointer_y - canvas_top,
        };

        self.components.push(placement);
        self.components.last()
    }

    /// Empty the canvas
    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// Flip the dark-mode display flag; no data effect
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut editor = CanvasEditor::new();

        assert!(editor.drop_at(100.0, 100.0, 0.0, 0.0).is_none());
        assert!(editor.components().is_empty());
    }

    #[test]
    fn test_drop_places_relative_to_canvas() {
        let mut editor = CanvasEditor::new();

        editor.start_drag(ComponentKind::Server);
        let placement = editor.drop_at(350.0, 220.0, 300.0, 200.0).unwrap();

        assert_eq!(placement.component_type, "server");
        assert_eq!(placement.x, 50.0);
        assert_eq!(placement.y, 20.0);
        assert!(placement.id.starts_with("server-"));

        // Drag state is consumed by the drop
        assert!(editor.dragged().is_none());
        assert!(editor.drop_at(10.0, 10.0, 0.0, 0.0).is_none());
        assert_eq!(editor.components().len(), 1);
    }

    #[test]
    fn test_rapid_drops_get_distinct_ids() {
        let mut editor = CanvasEditor::new();

        for _ in 0..10 {
            editor.start_drag(ComponentKind::Cache);
            editor.drop_at(0.0, 0.0, 0.0, 0.0);
        }

        let mut ids: Vec<&str> = editor.components().iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_out_of_bounds_drop_is_tolerated() {
        let mut editor = CanvasEditor::new();

        editor.start_drag(ComponentKind::Cdn);
        let placement = editor.drop_at(5.0, 5.0, 300.0, 200.0).unwrap();

        assert_eq!(placement.x, -295.0);
        assert_eq!(placement.y, -195.0);
    }

    #[test]
    fn test_clear_empties_canvas() {
        let mut editor = CanvasEditor::new();

        editor.start_drag(ComponentKind::Database);
        editor.drop_at(10.0, 10.0, 0.0, 0.0);
        editor.start_drag(ComponentKind::K8s);
        editor.drop_at(20.0, 20.0, 0.0, 0.0);
        assert_eq!(editor.components().len(), 2);

        editor.clear();
        assert!(editor.components().is_empty());
    }

    #[test]
    fn test_toggle_dark_mode_flips_flag_only() {
        let mut editor = CanvasEditor::new();
        editor.start_drag(ComponentKind::Server);
        editor.drop_at(10.0, 10.0, 0.0, 0.0);

        assert!(!editor.is_dark_mode());
        editor.toggle_dark_mode();
        assert!(editor.is_dark_mode());
        editor.toggle_dark_mode();
        assert!(!editor.is_dark_mode());

        // No data effect
        assert_eq!(editor.components().len(), 1);
    }
}
