//! The tectonic-plate boundary overlay layer

use crate::core::geo::{LatLng, LatLngBounds};
use crate::data::geojson::FeatureCollection;
use crate::layers::base::{LayerKind, LayerProperties, LayerTrait};
use crate::style::marker::LineStyle;
use log::debug;

/// Overlay of uniformly styled plate-boundary polylines. No popups and no
/// depth classification; every line shares one style.
pub struct PlateLayer {
    properties: LayerProperties,
    style: LineStyle,
    polylines: Vec<Vec<LatLng>>,
}

impl PlateLayer {
    /// Builds the layer from a feed payload. An empty collection yields a
    /// valid empty layer.
    pub fn from_feed(collection: &FeatureCollection) -> Self {
        let polylines: Vec<Vec<LatLng>> = collection
            .features
            .iter()
            .flat_map(|feature| feature.polylines())
            .filter(|line| !line.is_empty())
            .collect();

        debug!(
            "built plate layer with {} polylines from {} features",
            polylines.len(),
            collection.features.len()
        );

        Self {
            properties: LayerProperties::new(
                "tectonic-plates".to_string(),
                "Tectonic Plates".to_string(),
                LayerKind::Vector,
            ),
            style: LineStyle::plate_boundary(),
            polylines,
        }
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn polylines(&self) -> &[Vec<LatLng>] {
        &self.polylines
    }
}

impl LayerTrait for PlateLayer {
    fn id(&self) -> &str {
        &self.properties.id
    }

    fn name(&self) -> &str {
        &self.properties.name
    }

    fn kind(&self) -> LayerKind {
        self.properties.kind
    }

    fn is_visible(&self) -> bool {
        self.properties.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.properties.visible = visible;
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for line in &self.polylines {
            if let Some(line_bounds) = LatLngBounds::from_points(line) {
                bounds = Some(match bounds {
                    Some(b) => b.union(&line_bounds),
                    None => line_bounds,
                });
            }
        }
        bounds
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
