pub mod control;
pub mod legend;
pub mod popup;
