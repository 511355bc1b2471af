pub mod app;
pub mod theme;
pub mod thumb;
pub mod view;

pub const REFERENCE_HEIGHT: f64 = 1440.0;
pub const OVERSIZE_THUMB_SCALE: f64 = 1.4; // bump the thumb on physically large screens
