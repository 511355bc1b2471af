//! A seek bar that follows a circular path instead of a straight line.
//!
//! The crate is renderer-agnostic: [`SeekArc`] owns the arc configuration,
//! the current progress and the touch state machine, and each frame it can
//! be flattened into a small list of draw primitives ([`view::frame`]) for
//! whatever canvas the host uses. Touch and layout events are fed in
//! through [`SeekArc::handle_touch`] and [`SeekArc::resize`].

pub mod arc;
pub mod thumb;

pub use arc::geometry::{ArcLayout, Dp, Padding, Point, Viewport};
pub use arc::model::{
    SeekArc, SeekArcListener, Settings, SweepDirection, TouchEvent, TouchOutcome,
};
pub use arc::view::{ArcStroke, Frame, StrokeCap, StrokePaint, ThumbPlacement, frame};
pub use thumb::{ThumbImage, VectorThumb};
