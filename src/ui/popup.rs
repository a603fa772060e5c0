//! Popup content for earthquake markers

use crate::data::geojson::Quake;
use chrono::{TimeZone, Utc};

const UNKNOWN: &str = "unknown";

/// Formats the popup text for one earthquake.
///
/// Missing properties degrade to placeholder text; a bad feature never
/// fails the layer build.
pub fn quake_popup(quake: &Quake) -> String {
    let place = quake.place.as_deref().unwrap_or(UNKNOWN);
    let date = quake
        .time
        .and_then(format_epoch_millis)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let magnitude = quake
        .magnitude
        .map(|m| m.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    format!(
        "Location: {}\nDate: {}\nMagnitude: {}\nDepth: {}",
        place, date, magnitude, quake.depth
    )
}

fn format_epoch_millis(millis: i64) -> Option<String> {
    let timestamp = Utc.timestamp_millis_opt(millis).single()?;
    Some(timestamp.format("%a %b %d %Y %H:%M:%S UTC").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn quake() -> Quake {
        Quake {
            position: LatLng::new(33.66, -116.78),
            depth: 11.0,
            magnitude: Some(2.46),
            place: Some("10km SSW of Idyllwild, CA".to_string()),
            time: Some(0),
        }
    }

    #[test]
    fn test_popup_contains_all_fields() {
        let text = quake_popup(&quake());
        assert!(text.contains("Location: 10km SSW of Idyllwild, CA"));
        assert!(text.contains("Magnitude: 2.46"));
        assert!(text.contains("Depth: 11"));
        // Epoch zero renders as the unix epoch in UTC.
        assert!(text.contains("Thu Jan 01 1970 00:00:00 UTC"));
    }

    #[test]
    fn test_popup_degrades_on_missing_fields() {
        let mut quake = quake();
        quake.place = None;
        quake.time = None;
        quake.magnitude = None;

        let text = quake_popup(&quake);
        assert!(text.contains("Location: unknown"));
        assert!(text.contains("Date: unknown"));
        assert!(text.contains("Magnitude: unknown"));
        assert!(text.contains("Depth: 11"));
    }
}
