//! Depth classification for earthquake markers
//!
//! Maps a hypocenter depth (kilometers) onto one of six discrete color
//! bands. The thresholds here and the legend breakpoints in
//! [`crate::ui::legend`] must describe the same intervals, otherwise the
//! legend no longer matches the markers.

use serde::{Deserialize, Serialize};

/// Depth bucket boundaries in kilometers, ascending.
pub const DEPTH_THRESHOLDS: [f64; 5] = [10.0, 30.0, 50.0, 70.0, 90.0];

/// One of the six depth color bands, shallowest to deepest.
///
/// Each variant carries a fixed CSS color token understood by the
/// rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthColor {
    Green,
    GreenYellow,
    Yellow,
    Orange,
    OrangeRed,
    Red,
}

impl DepthColor {
    /// The CSS color token for this band.
    pub fn css(&self) -> &'static str {
        match self {
            DepthColor::Green => "#00FF00",
            DepthColor::GreenYellow => "greenyellow",
            DepthColor::Yellow => "yellow",
            DepthColor::Orange => "orange",
            DepthColor::OrangeRed => "orangered",
            DepthColor::Red => "#FF0000",
        }
    }
}

impl std::fmt::Display for DepthColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.css())
    }
}

/// Classifies a depth into its color band.
///
/// Total over all of `f64`: anything below 10 km (including negative
/// depths, which USGS reports for events above the geoid reference) is
/// `Green`, anything at or above 90 km is `Red`. Boundary values belong to
/// the upper bucket.
pub fn classify(depth: f64) -> DepthColor {
    if depth < DEPTH_THRESHOLDS[0] {
        DepthColor::Green
    } else if depth < DEPTH_THRESHOLDS[1] {
        DepthColor::GreenYellow
    } else if depth < DEPTH_THRESHOLDS[2] {
        DepthColor::Yellow
    } else if depth < DEPTH_THRESHOLDS[3] {
        DepthColor::Orange
    } else if depth < DEPTH_THRESHOLDS[4] {
        DepthColor::OrangeRed
    } else {
        DepthColor::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_buckets() {
        assert_eq!(classify(0.0), DepthColor::Green);
        assert_eq!(classify(9.99), DepthColor::Green);
        assert_eq!(classify(15.0), DepthColor::GreenYellow);
        assert_eq!(classify(45.0), DepthColor::Yellow);
        assert_eq!(classify(60.0), DepthColor::Orange);
        assert_eq!(classify(89.0), DepthColor::OrangeRed);
        assert_eq!(classify(95.0), DepthColor::Red);
        assert_eq!(classify(700.0), DepthColor::Red);
    }

    #[test]
    fn test_classify_boundaries_belong_to_upper_bucket() {
        assert_eq!(classify(10.0), DepthColor::GreenYellow);
        assert_eq!(classify(30.0), DepthColor::Yellow);
        assert_eq!(classify(50.0), DepthColor::Orange);
        assert_eq!(classify(70.0), DepthColor::OrangeRed);
        assert_eq!(classify(90.0), DepthColor::Red);
    }

    #[test]
    fn test_classify_negative_depth() {
        assert_eq!(classify(-3.2), DepthColor::Green);
        assert_eq!(classify(f64::MIN), DepthColor::Green);
    }

    #[test]
    fn test_classify_deterministic() {
        for depth in [-10.0, 0.0, 10.0, 42.0, 90.0, 1000.0] {
            assert_eq!(classify(depth), classify(depth));
        }
    }

    #[test]
    fn test_css_tokens() {
        assert_eq!(DepthColor::Green.css(), "#00FF00");
        assert_eq!(DepthColor::Red.css(), "#FF0000");
        assert_eq!(DepthColor::OrangeRed.to_string(), "orangered");
    }
}
