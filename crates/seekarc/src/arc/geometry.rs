use super::TOUCH_INSIDE_DIVISOR;
use derive_more::{Display, From, Into};
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A length in device-independent pixels. Converted to physical pixels
/// with the host's density factor before it touches any geometry.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into)]
pub struct Dp(pub f64);

impl Dp {
    pub fn to_px(self, density: f64) -> f64 {
        self.0 * density + 0.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn uniform(pad: f64) -> Self {
        Self {
            left: pad,
            top: pad,
            right: pad,
            bottom: pad,
        }
    }
}

/// Measured size of the drawing surface, delivered by the host whenever
/// the control is (re)measured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

/// Arc radius and center translation derived from a [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArcLayout {
    pub radius: f64,
    pub translate: Point,
}

impl ArcLayout {
    /// Fits the arc diameter inside the shorter view dimension, leaving
    /// room for the padding, half the thumb image and the track stroke so
    /// neither gets clipped at the edge.
    pub fn compute(viewport: Viewport, thumb_half_height: f64, arc_stroke_width: f64) -> Self {
        let min = viewport.width.min(viewport.height);
        let diameter = (min
            - viewport.padding.left
            - viewport.padding.right
            - thumb_half_height
            - arc_stroke_width)
            .max(0.0);

        Self {
            radius: diameter / 2.0,
            translate: Point::new(viewport.width / 2.0, viewport.height / 2.0),
        }
    }
}

/// Maps a touch point to an angle along the arc, in degrees from the start
/// of the arc. The result is a raw linear offset: it may be negative or
/// exceed 360 and is deliberately not re-normalized, so that points outside
/// the arc span resolve to an out-of-range progress instead of wrapping.
pub fn touch_degrees(
    point: Point,
    center: Point,
    clockwise: bool,
    rotation: f64,
    start_angle: f64,
) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;

    // invert the x-coord if we are rotating anti-clockwise
    let dx = if clockwise { dx } else { -dx };

    let mut angle = (dy.atan2(dx) + FRAC_PI_2 - rotation.to_radians()).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    angle - start_angle
}

/// Converts an arc angle to a progress value. `None` means the sample fell
/// outside the valid arc span and must be discarded, not clamped.
pub fn progress_for_angle(angle: f64, max: u32, sweep_angle: f64) -> Option<u32> {
    if sweep_angle <= 0.0 {
        return None;
    }
    let progress = (max as f64 / sweep_angle * angle).round();
    (progress >= 0.0 && progress <= max as f64).then_some(progress as u32)
}

/// Position of the thumb relative to the arc center, for the current
/// progress sweep. The host subtracts this from the center translation
/// when placing the thumb image.
pub fn thumb_position(radius: f64, start_angle: f64, progress_sweep: f64, rotation: f64) -> Point {
    let angle = (start_angle + progress_sweep + rotation + 90.0).to_radians();
    Point::new(radius * angle.cos(), radius * angle.sin())
}

/// Dead-zone radius: near the center when touches are accepted anywhere
/// inside the arc, or everything short of the track when only edge touches
/// count. The edge case backs off by the thumb half-extent so interaction
/// is not too tricky.
pub fn touch_ignore_radius(radius: f64, touch_inside: bool, thumb_half: (f64, f64)) -> f64 {
    if touch_inside {
        radius / TOUCH_INSIDE_DIVISOR
    } else {
        radius - thumb_half.0.min(thumb_half.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point { x: 100.0, y: 100.0 };

    #[test]
    fn test_touch_degrees_cardinal_points() {
        // 12 o'clock is 0 degrees, angles grow clockwise
        let cases = [
            (Point::new(100.0, 0.0), 0.0),
            (Point::new(200.0, 100.0), 90.0),
            (Point::new(100.0, 200.0), 180.0),
            (Point::new(0.0, 100.0), 270.0),
        ];
        for (point, expected) in cases {
            let angle = touch_degrees(point, CENTER, true, 0.0, 0.0);
            assert!(
                (angle - expected).abs() < 1e-9,
                "{point:?} -> {angle}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_touch_degrees_counter_clockwise_mirrors() {
        let point = Point::new(200.0, 100.0);
        let mirrored = Point::new(0.0, 100.0);
        let cw = touch_degrees(point, CENTER, true, 0.0, 0.0);
        let ccw = touch_degrees(mirrored, CENTER, false, 0.0, 0.0);
        assert!((cw - ccw).abs() < 1e-9);
    }

    #[test]
    fn test_touch_degrees_rotation_and_start_offset() {
        let point = Point::new(200.0, 100.0); // 90 degrees unrotated
        assert!((touch_degrees(point, CENTER, true, 30.0, 0.0) - 60.0).abs() < 1e-9);
        assert!((touch_degrees(point, CENTER, true, 0.0, 30.0) - 60.0).abs() < 1e-9);
        // subtracting the start angle may go negative; no re-normalization
        assert!((touch_degrees(point, CENTER, true, 0.0, 120.0) + 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_for_angle() {
        assert_eq!(progress_for_angle(90.0, 100, 360.0), Some(25));
        assert_eq!(progress_for_angle(90.0, 100, 180.0), Some(50));
        assert_eq!(progress_for_angle(0.0, 100, 360.0), Some(0));
        assert_eq!(progress_for_angle(360.0, 100, 360.0), Some(100));
    }

    #[test]
    fn test_progress_for_angle_discards_out_of_span_samples() {
        assert_eq!(progress_for_angle(-10.0, 100, 360.0), None);
        assert_eq!(progress_for_angle(200.0, 100, 180.0), None);
    }

    #[test]
    fn test_progress_for_angle_zero_sweep_is_never_valid() {
        for angle in [-90.0, 0.0, 90.0, 360.0] {
            assert_eq!(progress_for_angle(angle, 100, 0.0), None);
        }
    }

    #[test]
    fn test_angle_progress_round_trip() {
        let (max, sweep) = (100u32, 360.0);
        for progress in 0..=max {
            let angle = progress as f64 / max as f64 * sweep;
            assert_eq!(progress_for_angle(angle, max, sweep), Some(progress));
        }
    }

    #[test]
    fn test_layout_fits_shorter_dimension() {
        let viewport = Viewport {
            width: 200.0,
            height: 100.0,
            padding: Padding::default(),
        };
        let layout = ArcLayout::compute(viewport, 10.0, 4.0);
        assert!((layout.radius - 43.0).abs() < 1e-9);
        assert_eq!(layout.translate, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_layout_never_goes_negative() {
        let viewport = Viewport {
            width: 10.0,
            height: 10.0,
            padding: Padding::uniform(20.0),
        };
        let layout = ArcLayout::compute(viewport, 10.0, 4.0);
        assert_eq!(layout.radius, 0.0);
    }

    #[test]
    fn test_touch_ignore_radius_modes() {
        assert!((touch_ignore_radius(100.0, true, (12.0, 16.0)) - 25.0).abs() < 1e-9);
        assert!((touch_ignore_radius(100.0, false, (12.0, 16.0)) - 88.0).abs() < 1e-9);
    }

    #[test]
    fn test_dp_to_px() {
        assert!((Dp(4.0).to_px(2.0) - 8.5).abs() < 1e-9);
        assert!((Dp(1.0).to_px(1.0) - 1.5).abs() < 1e-9);
    }
}
