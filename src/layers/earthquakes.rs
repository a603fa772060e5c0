//! The earthquake overlay layer

use crate::core::geo::{LatLng, LatLngBounds};
use crate::data::geojson::FeatureCollection;
use crate::layers::base::{LayerKind, LayerProperties, LayerTrait};
use crate::style::marker::MarkerStyle;
use crate::ui::popup::quake_popup;
use log::debug;

/// A styled circle marker with bound popup content
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    pub center: LatLng,
    pub style: MarkerStyle,
    pub popup: String,
}

/// Overlay of depth-colored, magnitude-scaled earthquake markers
pub struct EarthquakeLayer {
    properties: LayerProperties,
    markers: Vec<CircleMarker>,
}

impl EarthquakeLayer {
    /// Builds the layer from a feed payload.
    ///
    /// Features that cannot be placed on the map are skipped with a
    /// warning; missing properties degrade the individual marker. An
    /// empty collection yields a valid empty layer.
    pub fn from_feed(collection: &FeatureCollection) -> Self {
        let markers: Vec<CircleMarker> = collection
            .features
            .iter()
            .filter_map(|feature| feature.as_quake())
            .map(|quake| CircleMarker {
                center: quake.position,
                style: MarkerStyle::for_quake(quake.magnitude.unwrap_or(0.0), quake.depth),
                popup: quake_popup(&quake),
            })
            .collect();

        debug!(
            "built earthquake layer with {} of {} features",
            markers.len(),
            collection.features.len()
        );

        Self {
            properties: LayerProperties::new(
                "earthquakes".to_string(),
                "Earthquakes".to_string(),
                LayerKind::Marker,
            ),
            markers,
        }
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

impl LayerTrait for EarthquakeLayer {
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
        let centers: Vec<LatLng> = self.markers.iter().map(|m| m.center).collect();
        LatLngBounds::from_points(&centers)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
