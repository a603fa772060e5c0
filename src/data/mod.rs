pub mod feeds;
pub mod geojson;
