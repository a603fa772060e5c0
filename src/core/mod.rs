pub mod geo;
pub mod map;
