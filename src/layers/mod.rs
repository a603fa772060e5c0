pub mod base;
pub mod earthquakes;
pub mod plates;
pub mod tile;
