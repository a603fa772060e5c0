pub mod depth;
pub mod marker;
