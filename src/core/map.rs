//! Map context: the layer registry and composition root
//!
//! Owns the base layers (exactly one active), the overlay registry, the
//! legend one-shot, and the toggle-control model. Feed payloads are
//! applied in whichever order they arrive; either, both, or neither feed
//! completing leaves the registry in a consistent state.

use crate::core::geo::LatLng;
use crate::data::feeds::{FeedKind, FeedSource};
use crate::data::geojson::FeatureCollection;
use crate::layers::{
    base::LayerTrait, earthquakes::EarthquakeLayer, plates::PlateLayer, tile::TileLayer,
};
use crate::ui::control::{LayerToggleControl, ToggleEntry};
use crate::ui::legend::LegendControl;
use crate::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, warn};
use once_cell::sync::OnceCell;

/// Initial view configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        // Whole-world view centered on the equator and prime meridian
        Self {
            center: LatLng::new(0.0, 0.0),
            zoom: 2.5,
        }
    }
}

struct Overlay {
    layer: Box<dyn LayerTrait>,
}

/// The owning context for one map: base layers, overlays, and controls
pub struct MapContext {
    options: MapOptions,
    base_layers: Vec<TileLayer>,
    active_base: Option<usize>,
    overlays: Vec<Overlay>,
    legend: OnceCell<LegendControl>,
}

impl MapContext {
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            base_layers: Vec::new(),
            active_base: None,
            overlays: Vec::new(),
            legend: OnceCell::new(),
        }
    }

    /// A context with the standard street and topographic base layers,
    /// street active.
    pub fn with_default_base_layers(options: MapOptions) -> Self {
        let mut context = Self::new(options);
        context.add_base_layer(TileLayer::street());
        context.add_base_layer(TileLayer::topographic());
        context
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Registers a base layer. The first one added becomes active.
    pub fn add_base_layer(&mut self, layer: TileLayer) {
        self.base_layers.push(layer);
        if self.active_base.is_none() {
            self.active_base = Some(self.base_layers.len() - 1);
        }
    }

    /// Switches the active base layer by name.
    pub fn set_active_base_layer(&mut self, name: &str) -> Result<()> {
        let index = self
            .base_layers
            .iter()
            .position(|l| l.name() == name)
            .ok_or_else(|| crate::Error::Layer(format!("unknown base layer: {}", name)))?;
        self.active_base = Some(index);
        Ok(())
    }

    pub fn active_base_layer(&self) -> Option<&TileLayer> {
        self.active_base.map(|i| &self.base_layers[i])
    }

    pub fn base_layers(&self) -> &[TileLayer] {
        &self.base_layers
    }

    /// Registers an overlay under its own name. Registered overlays are
    /// shown immediately; re-registering a name replaces the old layer.
    pub fn add_overlay(&mut self, layer: Box<dyn LayerTrait>) {
        let name = layer.name().to_string();
        self.overlays.retain(|o| o.layer.name() != name);
        self.overlays.push(Overlay { layer });
        debug!("registered overlay {:?}", name);
    }

    pub fn overlay(&self, name: &str) -> Option<&dyn LayerTrait> {
        self.overlays
            .iter()
            .find(|o| o.layer.name() == name)
            .map(|o| o.layer.as_ref())
    }

    /// Shows or hides an overlay by name.
    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) -> Result<()> {
        let overlay = self
            .overlays
            .iter_mut()
            .find(|o| o.layer.name() == name)
            .ok_or_else(|| crate::Error::Layer(format!("unknown overlay: {}", name)))?;
        overlay.layer.set_visible(visible);
        Ok(())
    }

    /// Builds the earthquake overlay from a feed payload and registers it.
    ///
    /// The depth legend is built on the first successful call and reused
    /// afterwards, no matter how often quake data is re-applied.
    pub fn add_earthquakes(&mut self, collection: &FeatureCollection) -> Result<()> {
        let layer = EarthquakeLayer::from_feed(collection);
        self.add_overlay(Box::new(layer));
        self.legend.get_or_init(LegendControl::depth);
        Ok(())
    }

    /// Builds the plate-boundary overlay from a feed payload and registers it.
    pub fn add_tectonic_plates(&mut self, collection: &FeatureCollection) -> Result<()> {
        let layer = PlateLayer::from_feed(collection);
        self.add_overlay(Box::new(layer));
        Ok(())
    }

    /// Applies one feed payload, whichever feed it came from.
    pub fn apply_feed(&mut self, kind: FeedKind, collection: &FeatureCollection) -> Result<()> {
        match kind {
            FeedKind::Earthquakes => self.add_earthquakes(collection),
            FeedKind::TectonicPlates => self.add_tectonic_plates(collection),
        }
    }

    /// Fetches both feeds concurrently and applies each payload as it
    /// arrives. A failed fetch leaves its overlay absent and is only
    /// logged; the other feed is unaffected.
    pub async fn load_feeds(&mut self, source: &dyn FeedSource) {
        let mut fetches: FuturesUnordered<_> = [FeedKind::Earthquakes, FeedKind::TectonicPlates]
            .into_iter()
            .map(|kind| async move { (kind, source.fetch(kind).await) })
            .collect();

        while let Some((kind, result)) = fetches.next().await {
            match result {
                Ok(collection) => {
                    if let Err(e) = self.apply_feed(kind, &collection) {
                        warn!("failed to apply {} feed: {}", kind, e);
                    }
                }
                Err(e) => {
                    // The overlay for this feed is simply never created.
                    warn!("{} feed failed: {}", kind, e);
                }
            }
        }
    }

    /// The legend, once earthquake data has arrived.
    pub fn legend(&self) -> Option<&LegendControl> {
        self.legend.get()
    }

    /// Derives the current layer-toggle control model.
    pub fn layer_control(&self) -> LayerToggleControl {
        LayerToggleControl {
            base_layers: self
                .base_layers
                .iter()
                .enumerate()
                .map(|(i, layer)| ToggleEntry {
                    name: layer.name().to_string(),
                    active: Some(i) == self.active_base,
                })
                .collect(),
            overlays: self
                .overlays
                .iter()
                .map(|o| ToggleEntry {
                    name: o.layer.name().to_string(),
                    active: o.layer.is_visible(),
                })
                .collect(),
        }
    }
}

impl Default for MapContext {
    fn default() -> Self {
        Self::with_default_base_layers(MapOptions::default())
    }
}
