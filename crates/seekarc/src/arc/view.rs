use crate::arc::ANGLE_OFFSET;
use crate::arc::geometry::Point;
use crate::arc::model::SeekArc;
use crate::thumb::ThumbImage;
use palette::Srgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    Square,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePaint {
    pub color: Srgba<f64>,
    pub width: f64,
    pub cap: StrokeCap,
}

/// A stroked arc span around `center`, angles in degrees with 0 at 3
/// o'clock (the track's `start_deg` already folds in the 12 o'clock
/// offset and the configured rotation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStroke {
    pub center: Point,
    pub radius: f64,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub paint: StrokePaint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbPlacement {
    pub center: Point,
}

/// The ordered draw list for one frame: background track, progress span,
/// then the thumb on top. `mirror` carries the x to flip about when the
/// control runs counter-clockwise; it applies to the whole frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub mirror: Option<f64>,
    pub track: ArcStroke,
    pub fill: ArcStroke,
    pub thumb: ThumbPlacement,
}

pub fn frame<T: ThumbImage>(arc: &SeekArc<T>) -> Frame {
    let layout = arc.layout();
    let cap = if arc.rounded_edges() {
        StrokeCap::Round
    } else {
        StrokeCap::Square
    };
    let start_deg = arc.start_angle() as f64 + ANGLE_OFFSET + arc.rotation() as f64;

    let track = ArcStroke {
        center: layout.translate,
        radius: layout.radius,
        start_deg,
        sweep_deg: arc.sweep_angle() as f64,
        paint: StrokePaint {
            color: arc.arc_color(),
            width: arc.arc_width_px(),
            cap,
        },
    };

    let fill = ArcStroke {
        sweep_deg: arc.progress_sweep(),
        paint: StrokePaint {
            color: arc.progress_color(),
            width: arc.progress_width_px(),
            cap,
        },
        ..track
    };

    let thumb_pos = arc.thumb_pos();
    let thumb = ThumbPlacement {
        center: Point::new(
            layout.translate.x - thumb_pos.x,
            layout.translate.y - thumb_pos.y,
        ),
    };

    Frame {
        mirror: (!arc.is_clockwise()).then_some(layout.translate.x),
        track,
        fill,
        thumb,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::geometry::Viewport;
    use crate::arc::model::{Settings, SweepDirection};
    use crate::thumb::VectorThumb;

    fn arc_for(settings: Settings) -> SeekArc {
        let mut arc = SeekArc::with_thumb(settings, VectorThumb::new(0.0, Srgba::new(0.0, 0.0, 0.0, 1.0)));
        arc.resize(Viewport {
            width: 200.0,
            height: 200.0,
            ..Viewport::default()
        });
        arc
    }

    #[test]
    fn test_track_folds_offset_and_rotation_into_start() {
        let mut arc = arc_for(Settings {
            start_angle: 30,
            rotation: 45,
            arc_width: 0.0,
            progress_width: 0.0,
            ..Settings::default()
        });
        arc.set_progress(50);
        let frame = frame(&arc);

        assert!((frame.track.start_deg - (30.0 - 90.0 + 45.0)).abs() < 1e-9);
        assert_eq!(frame.track.sweep_deg, 360.0);
        assert!((frame.fill.sweep_deg - 180.0).abs() < 1e-9);
        assert_eq!(frame.fill.start_deg, frame.track.start_deg);
        assert_eq!(frame.mirror, None);
    }

    #[test]
    fn test_counter_clockwise_frames_mirror_about_center() {
        let arc = arc_for(Settings {
            direction: SweepDirection::CounterClockwise,
            arc_width: 0.0,
            progress_width: 0.0,
            ..Settings::default()
        });
        assert_eq!(frame(&arc).mirror, Some(100.0));
    }

    #[test]
    fn test_rounded_edges_select_round_caps() {
        let arc = arc_for(Settings {
            rounded_edges: true,
            ..Settings::default()
        });
        let frame = frame(&arc);
        assert_eq!(frame.track.paint.cap, StrokeCap::Round);
        assert_eq!(frame.fill.paint.cap, StrokeCap::Round);
    }

    #[test]
    fn test_thumb_rides_the_track() {
        let mut arc = arc_for(Settings {
            arc_width: 0.0,
            progress_width: 0.0,
            ..Settings::default()
        });
        arc.set_progress(0);
        let at_zero = frame(&arc).thumb.center;
        // progress 0 with no rotation puts the thumb at 12 o'clock
        assert!((at_zero.x - 100.0).abs() < 1e-9);
        assert!((at_zero.y - 0.0).abs() < 1e-9);

        arc.set_progress(25);
        let at_quarter = frame(&arc).thumb.center;
        assert!((at_quarter.x - 200.0).abs() < 1e-9);
        assert!((at_quarter.y - 100.0).abs() < 1e-9);
    }
}
