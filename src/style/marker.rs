//! Marker and line styling for the feed layers

use crate::style::depth::{classify, DepthColor};
use serde::{Deserialize, Serialize};

/// Pixels of marker radius per unit of magnitude.
pub const MAGNITUDE_RADIUS_SCALE: f64 = 2.0;

/// Style for an earthquake circle marker.
///
/// Stroke and opacity are shared constants; radius and fill vary per quake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Marker radius in pixels
    pub radius: f64,
    /// Fill color band derived from depth
    pub fill_color: DepthColor,
    /// Stroke color
    pub stroke_color: &'static str,
    /// Stroke width
    pub weight: f64,
    /// Stroke opacity (0.0 to 1.0)
    pub opacity: f64,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f64,
}

impl MarkerStyle {
    /// Builds the style for a quake of the given magnitude and depth.
    ///
    /// Radius scales linearly with magnitude (slope 2, zero intercept) and
    /// is deliberately not clamped: a zero or negative magnitude yields a
    /// zero or negative radius, which the rendering engine draws as an
    /// invisible marker.
    pub fn for_quake(magnitude: f64, depth: f64) -> Self {
        Self {
            radius: magnitude * MAGNITUDE_RADIUS_SCALE,
            fill_color: classify(depth),
            ..Self::default()
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 0.0,
            fill_color: DepthColor::Green,
            stroke_color: "black",
            weight: 1.0,
            opacity: 1.0,
            fill_opacity: 0.6,
        }
    }
}

/// Uniform style for line features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color
    pub color: &'static str,
    /// Line width
    pub weight: f64,
    /// Opacity (0.0 to 1.0)
    pub opacity: f64,
}

impl LineStyle {
    /// The fixed style for tectonic-plate boundaries.
    pub fn plate_boundary() -> Self {
        Self {
            color: "orange",
            weight: 2.0,
            opacity: 1.0,
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#3388ff",
            weight: 3.0,
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_scales_with_magnitude() {
        assert_eq!(MarkerStyle::for_quake(5.0, 0.0).radius, 10.0);
        assert_eq!(MarkerStyle::for_quake(6.0, 45.0).radius, 12.0);
        assert_eq!(MarkerStyle::for_quake(0.0, 0.0).radius, 0.0);
    }

    #[test]
    fn test_negative_magnitude_is_not_clamped() {
        assert_eq!(MarkerStyle::for_quake(-1.0, 0.0).radius, -2.0);
    }

    #[test]
    fn test_fill_color_tracks_depth() {
        assert_eq!(MarkerStyle::for_quake(5.0, 0.0).fill_color, DepthColor::Green);
        assert_eq!(MarkerStyle::for_quake(5.0, 45.0).fill_color, DepthColor::Yellow);
        assert_eq!(MarkerStyle::for_quake(5.0, 95.0).fill_color, DepthColor::Red);
    }

    #[test]
    fn test_shared_constants() {
        let style = MarkerStyle::for_quake(3.0, 20.0);
        assert_eq!(style.stroke_color, "black");
        assert_eq!(style.weight, 1.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.fill_opacity, 0.6);
    }

    #[test]
    fn test_plate_boundary_style() {
        let style = LineStyle::plate_boundary();
        assert_eq!(style.color, "orange");
        assert_eq!(style.weight, 2.0);
    }
}
