//! Feed download for the earthquake and plate-boundary sources
//!
//! The two fetches are independent tasks with no ordering dependency, no
//! timeout, and no cancellation. A feed that never resolves simply never
//! delivers its payload and the corresponding overlay stays absent.

use crate::data::geojson::FeatureCollection;
use crate::Result;
use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::mpsc;

/// USGS all-earthquakes feed for the past week
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 tectonic-plate boundary lines
pub const TECTONIC_PLATES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// The two inbound data feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    Earthquakes,
    TectonicPlates,
}

impl FeedKind {
    pub fn url(&self) -> &'static str {
        match self {
            FeedKind::Earthquakes => EARTHQUAKE_FEED_URL,
            FeedKind::TectonicPlates => TECTONIC_PLATES_URL,
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Earthquakes => write!(f, "earthquakes"),
            FeedKind::TectonicPlates => write!(f, "tectonic plates"),
        }
    }
}

/// Anything that can produce a feature collection for a feed.
///
/// The production implementation is [`UsgsFeedClient`]; tests substitute
/// in-memory sources.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self, kind: FeedKind) -> Result<FeatureCollection>;
}

/// HTTP feed client for the public GeoJSON endpoints
#[derive(Debug, Clone, Default)]
pub struct UsgsFeedClient {
    http: reqwest::Client,
}

impl UsgsFeedClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FeedSource for UsgsFeedClient {
    async fn fetch(&self, kind: FeedKind) -> Result<FeatureCollection> {
        debug!("fetching {} feed from {}", kind, kind.url());

        let body = self
            .http
            .get(kind.url())
            .send()
            .await
            .map_err(crate::Error::Network)?
            .text()
            .await
            .map_err(crate::Error::Network)?;

        debug!("downloaded {} bytes for {} feed", body.len(), kind);
        FeatureCollection::from_str(&body)
    }
}

/// Spawns one fetch task per feed and returns the completion channel.
///
/// Payloads arrive in whichever order the network delivers them. The
/// channel closes once both tasks have finished; a hung fetch keeps it
/// open without blocking the other feed.
pub fn spawn_feed_fetches<S>(source: S) -> mpsc::Receiver<(FeedKind, Result<FeatureCollection>)>
where
    S: FeedSource + Clone + 'static,
{
    let (tx, rx) = mpsc::channel(2);

    for kind in [FeedKind::Earthquakes, FeedKind::TectonicPlates] {
        let source = source.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = source.fetch(kind).await;
            if let Err(e) = &result {
                warn!("{} feed fetch failed: {}", kind, e);
            }
            // The receiver dropping early is not an error worth surfacing.
            let _ = tx.send((kind, result)).await;
        });
    }

    rx
}
