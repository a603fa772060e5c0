//! Typed GeoJSON subset for the two inbound feeds
//!
//! Positions are kept as `Vec<f64>` rather than fixed-size pairs because
//! the earthquake feed carries depth as a third coordinate component.
//! Malformed features are converted into a recoverable "skip this feature"
//! decision at this boundary instead of propagating missing values into
//! the layers.

use crate::core::geo::LatLng;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single GeoJSON coordinate: `[longitude, latitude, depth?]`
pub type Position = Vec<f64>;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<Geometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON feature collection. The `type` discriminator is ignored;
/// both feeds are documents with a top-level `features` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parses a feature collection from raw GeoJSON text
    pub fn from_str(geojson_str: &str) -> crate::Result<Self> {
        let collection: FeatureCollection = serde_json::from_str(geojson_str)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))?;
        Ok(collection)
    }
}

/// The earthquake properties this crate consumes from a feed feature.
///
/// Every field is optional; a feature with gaps still renders, with
/// placeholder popup text and an unclamped radius.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuakeProperties {
    pub place: Option<String>,
    pub time: Option<i64>,
    pub mag: Option<f64>,
}

/// A validated earthquake record extracted from one feed feature
#[derive(Debug, Clone, PartialEq)]
pub struct Quake {
    pub position: LatLng,
    pub depth: f64,
    pub magnitude: Option<f64>,
    pub place: Option<String>,
    pub time: Option<i64>,
}

impl Feature {
    /// Extracts an earthquake record, or `None` if the feature cannot be
    /// placed on the map.
    ///
    /// A feature is skipped when its geometry is absent, not a point, or
    /// lacks the `[lng, lat, depth]` coordinate triple. Missing `place`,
    /// `time`, or `mag` properties are carried through as `None`.
    pub fn as_quake(&self) -> Option<Quake> {
        let coordinates = match &self.geometry {
            Some(Geometry::Point { coordinates }) => coordinates,
            Some(_) => {
                warn!("skipping earthquake feature with non-point geometry");
                return None;
            }
            None => {
                warn!("skipping earthquake feature without geometry");
                return None;
            }
        };

        if coordinates.len() < 3 {
            warn!(
                "skipping earthquake feature with {} coordinate components",
                coordinates.len()
            );
            return None;
        }

        let position = LatLng::new(coordinates[1], coordinates[0]);
        let props = self.quake_properties();

        Some(Quake {
            position,
            depth: coordinates[2],
            magnitude: props.mag,
            place: props.place,
            time: props.time,
        })
    }

    /// Deserializes the typed earthquake properties from the properties bag
    fn quake_properties(&self) -> QuakeProperties {
        let Some(properties) = &self.properties else {
            return QuakeProperties::default();
        };

        QuakeProperties {
            place: properties
                .get("place")
                .and_then(|v| v.as_str())
                .map(str::to_owned),
            time: properties.get("time").and_then(|v| v.as_i64()),
            mag: properties.get("mag").and_then(|v| v.as_f64()),
        }
    }

    /// Extracts the polylines of a boundary feature.
    ///
    /// Line strings map one-to-one, multi line strings flatten, and
    /// polygon rings are kept as closed polylines. Point geometries have
    /// no line representation and are skipped with a warning.
    pub fn polylines(&self) -> Vec<Vec<LatLng>> {
        match &self.geometry {
            Some(geometry) => geometry.polylines(),
            None => {
                warn!("skipping boundary feature without geometry");
                Vec::new()
            }
        }
    }
}

impl Geometry {
    fn polylines(&self) -> Vec<Vec<LatLng>> {
        match self {
            Geometry::LineString { coordinates } => vec![to_lat_lngs(coordinates)],
            Geometry::MultiLineString { coordinates } => {
                coordinates.iter().map(|line| to_lat_lngs(line)).collect()
            }
            Geometry::Polygon { coordinates } => {
                coordinates.iter().map(|ring| to_lat_lngs(ring)).collect()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(|ring| to_lat_lngs(ring)))
                .collect(),
            Geometry::GeometryCollection { geometries } => {
                geometries.iter().flat_map(|g| g.polylines()).collect()
            }
            Geometry::Point { .. } | Geometry::MultiPoint { .. } => {
                warn!("skipping point geometry in boundary feed");
                Vec::new()
            }
        }
    }
}

fn to_lat_lngs(positions: &[Position]) -> Vec<LatLng> {
    positions
        .iter()
        .filter_map(|p| {
            if p.len() >= 2 {
                Some(LatLng::new(p[1], p[0]))
            } else {
                warn!("skipping position with {} components", p.len());
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAKE_FEATURE: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"place": "10km SSW of Idyllwild, CA", "time": 1388620296020, "mag": 2.46},
                "geometry": {
                    "type": "Point",
                    "coordinates": [-116.7776667, 33.6633333, 11.008]
                }
            }
        ]
    }
    "#;

    #[test]
    fn test_parse_earthquake_feed() {
        let collection = FeatureCollection::from_str(QUAKE_FEATURE).unwrap();
        assert_eq!(collection.features.len(), 1);

        let quake = collection.features[0].as_quake().unwrap();
        assert_eq!(quake.position, LatLng::new(33.6633333, -116.7776667));
        assert_eq!(quake.depth, 11.008);
        assert_eq!(quake.magnitude, Some(2.46));
        assert_eq!(quake.place.as_deref(), Some("10km SSW of Idyllwild, CA"));
        assert_eq!(quake.time, Some(1388620296020));
    }

    #[test]
    fn test_invalid_geojson_is_a_parse_error() {
        assert!(FeatureCollection::from_str("{not geojson").is_err());
    }

    #[test]
    fn test_quake_without_geometry_is_skipped() {
        let feature = Feature {
            id: None,
            geometry: None,
            properties: None,
        };
        assert!(feature.as_quake().is_none());
    }

    #[test]
    fn test_quake_without_depth_is_skipped() {
        let feature = Feature {
            id: None,
            geometry: Some(Geometry::Point {
                coordinates: vec![-116.7, 33.6],
            }),
            properties: None,
        };
        assert!(feature.as_quake().is_none());
    }

    #[test]
    fn test_quake_with_missing_properties_degrades() {
        let feature = Feature {
            id: None,
            geometry: Some(Geometry::Point {
                coordinates: vec![-116.7, 33.6, 5.0],
            }),
            properties: Some(HashMap::new()),
        };

        let quake = feature.as_quake().unwrap();
        assert_eq!(quake.magnitude, None);
        assert_eq!(quake.place, None);
        assert_eq!(quake.time, None);
    }

    #[test]
    fn test_polylines_from_line_string() {
        let feature = Feature {
            id: None,
            geometry: Some(Geometry::LineString {
                coordinates: vec![vec![0.0, 1.0], vec![2.0, 3.0]],
            }),
            properties: None,
        };

        let lines = feature.polylines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], vec![LatLng::new(1.0, 0.0), LatLng::new(3.0, 2.0)]);
    }

    #[test]
    fn test_polylines_from_multi_line_string() {
        let feature = Feature {
            id: None,
            geometry: Some(Geometry::MultiLineString {
                coordinates: vec![
                    vec![vec![0.0, 0.0], vec![1.0, 1.0]],
                    vec![vec![2.0, 2.0], vec![3.0, 3.0]],
                ],
            }),
            properties: None,
        };

        assert_eq!(feature.polylines().len(), 2);
    }

    #[test]
    fn test_polylines_from_point_is_empty() {
        let feature = Feature {
            id: None,
            geometry: Some(Geometry::Point {
                coordinates: vec![0.0, 0.0, 0.0],
            }),
            properties: None,
        };

        assert!(feature.polylines().is_empty());
    }

    #[test]
    fn test_empty_collection_parses() {
        let collection =
            FeatureCollection::from_str(r#"{"type": "FeatureCollection", "features": []}"#)
                .unwrap();
        assert!(collection.features.is_empty());
    }
}
