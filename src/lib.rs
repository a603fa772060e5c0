//! # Quakemap
//!
//! Earthquake and tectonic-plate visualization layers for a Leaflet-style
//! rendering engine.
//!
//! This library fetches the USGS weekly earthquake feed and the PB2002
//! tectonic-plate boundary feed, classifies quakes by depth, styles them as
//! circle markers scaled by magnitude, and assembles toggleable overlay
//! layers, a base-layer registry, and a depth legend. Actual tile and vector
//! rendering is left to the host map engine.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod style;
pub mod ui;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{MapContext, MapOptions},
};

pub use crate::layers::{
    base::LayerTrait, earthquakes::EarthquakeLayer, plates::PlateLayer, tile::TileLayer,
};

pub use crate::data::{
    feeds::{FeedKind, FeedSource, UsgsFeedClient},
    geojson::{Feature, FeatureCollection, Geometry},
};

pub use crate::style::{
    depth::{classify, DepthColor},
    marker::{LineStyle, MarkerStyle},
};

pub use crate::ui::legend::{build_legend, LegendControl, LegendEntry};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
