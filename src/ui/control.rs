//! Map control models
//!
//! These are renderer-agnostic descriptions of the controls the host
//! engine draws: a corner position, and the base/overlay toggle model.

/// Corner or edge position for a map control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One named entry in the layer toggle control
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleEntry {
    pub name: String,
    pub active: bool,
}

/// The layer toggle control: radio-style base layers (exactly one active)
/// and checkbox-style overlays (any subset active).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerToggleControl {
    pub base_layers: Vec<ToggleEntry>,
    pub overlays: Vec<ToggleEntry>,
}

impl LayerToggleControl {
    /// Number of base layers currently marked active. The registry keeps
    /// this at exactly one; the model just reports what it was given.
    pub fn active_base_count(&self) -> usize {
        self.base_layers.iter().filter(|e| e.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_base_count() {
        let control = LayerToggleControl {
            base_layers: vec![
                ToggleEntry {
                    name: "Street Map".to_string(),
                    active: true,
                },
                ToggleEntry {
                    name: "Topographic Map".to_string(),
                    active: false,
                },
            ],
            overlays: Vec::new(),
        };

        assert_eq!(control.active_base_count(), 1);
    }
}
