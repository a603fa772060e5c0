//! Base tile layers
//!
//! Thin descriptions of slippy-map tile sources. The host engine requests
//! URLs per tile coordinate; this layer only owns the template, the
//! subdomain rotation, and the attribution text.

use crate::core::geo::{LatLngBounds, TileCoord};
use crate::layers::base::{LayerKind, LayerProperties, LayerTrait};

pub struct TileLayer {
    properties: LayerProperties,
    url_template: String,
    subdomains: Vec<&'static str>,
    attribution: String,
    max_zoom: u8,
}

impl TileLayer {
    pub fn new(id: String, name: String, url_template: String, max_zoom: u8) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerKind::Tile),
            url_template,
            subdomains: vec!["a", "b", "c"],
            attribution: String::new(),
            max_zoom,
        }
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    /// The default OpenStreetMap street base layer
    pub fn street() -> Self {
        Self::new(
            "street".to_string(),
            "Street Map".to_string(),
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            19,
        )
        .with_attribution(
            "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        )
    }

    /// The OpenTopoMap topographic base layer
    pub fn topographic() -> Self {
        Self::new(
            "topo".to_string(),
            "Topographic Map".to_string(),
            "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".to_string(),
            17,
        )
        .with_attribution(
            "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, SRTM | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (CC-BY-SA)",
        )
    }

    /// Builds the tile URL for the requested coordinate.
    pub fn tile_url(&self, coord: TileCoord) -> String {
        let url = self
            .url_template
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string());

        if self.subdomains.is_empty() {
            return url.replace("{s}", "");
        }

        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        url.replace("{s}", self.subdomains[idx])
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }
}

impl LayerTrait for TileLayer {
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
        // Tile layers cover the whole world
        None
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_layer() {
        let layer = TileLayer::street();
        assert_eq!(layer.name(), "Street Map");
        assert_eq!(layer.max_zoom(), 19);
        assert!(layer.attribution().contains("OpenStreetMap"));
    }

    #[test]
    fn test_topographic_layer() {
        let layer = TileLayer::topographic();
        assert_eq!(layer.name(), "Topographic Map");
        assert_eq!(layer.max_zoom(), 17);
        assert!(layer.attribution().contains("OpenTopoMap"));
    }

    #[test]
    fn test_tile_url_substitution() {
        let layer = TileLayer::street();
        let url = layer.tile_url(TileCoord::new(0, 0, 0));
        assert_eq!(url, "https://a.tile.openstreetmap.org/0/0/0.png");
    }

    #[test]
    fn test_tile_url_subdomain_rotation() {
        let layer = TileLayer::street();
        let a = layer.tile_url(TileCoord::new(0, 0, 5));
        let b = layer.tile_url(TileCoord::new(1, 0, 5));
        let c = layer.tile_url(TileCoord::new(2, 0, 5));
        let a_again = layer.tile_url(TileCoord::new(3, 0, 5));

        assert!(a.starts_with("https://a."));
        assert!(b.starts_with("https://b."));
        assert!(c.starts_with("https://c."));
        assert!(a_again.starts_with("https://a."));
    }
}
