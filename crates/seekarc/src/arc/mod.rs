pub mod geometry;
pub mod model;
pub mod view;

pub use model::{SeekArc, SeekArcListener, Settings, SweepDirection, TouchEvent, TouchOutcome};
pub use view::{Frame, StrokeCap, StrokePaint};

pub const ANGLE_OFFSET: f64 = -90.0; // drawing starts at 12 o'clock
pub const THUMB_HIT_MARGIN: f64 = 50.0; // grab slack around the thumb, px
pub const ROLLOVER_HIGH: f64 = 0.7; // seam clamp thresholds, fractions of max
pub const ROLLOVER_LOW: f64 = 0.3;
pub const TOUCH_INSIDE_DIVISOR: f64 = 4.0; // dead zone size in touch-inside mode
pub const DEFAULT_MAX: u32 = 100;
pub const DEFAULT_SWEEP_ANGLE: i32 = 360;
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0; // px
