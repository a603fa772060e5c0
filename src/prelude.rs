//! Prelude module for common quakemap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use quakemap::prelude::*;`

pub use crate::core::{
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{MapContext, MapOptions},
};

pub use crate::layers::{
    base::{LayerKind, LayerProperties, LayerTrait},
    earthquakes::{CircleMarker, EarthquakeLayer},
    plates::PlateLayer,
    tile::TileLayer,
};

pub use crate::data::{
    feeds::{FeedKind, FeedSource, UsgsFeedClient},
    geojson::{Feature, FeatureCollection, Geometry, Quake},
};

pub use crate::style::{
    depth::{classify, DepthColor, DEPTH_THRESHOLDS},
    marker::{LineStyle, MarkerStyle},
};

pub use crate::ui::{
    control::{ControlPosition, LayerToggleControl},
    legend::{build_legend, LegendControl, LegendEntry, LEGEND_BREAKPOINTS},
    popup::quake_popup,
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
