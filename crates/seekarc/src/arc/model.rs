use crate::arc::geometry::{self, ArcLayout, Dp, Point, Viewport};
use crate::arc::{
    DEFAULT_MAX, DEFAULT_STROKE_WIDTH, DEFAULT_SWEEP_ANGLE, ROLLOVER_HIGH, ROLLOVER_LOW,
    THUMB_HIT_MARGIN,
};
use crate::thumb::{ThumbImage, VectorThumb};
use palette::Srgba;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SweepDirection {
    #[default]
    #[strum(serialize = "Clockwise", serialize = "cw")]
    Clockwise,
    #[strum(
        serialize = "CounterClockwise",
        serialize = "ccw",
        serialize = "AntiClockwise"
    )]
    CounterClockwise,
}

impl SweepDirection {
    pub fn is_clockwise(self) -> bool {
        self == Self::Clockwise
    }

    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }
}

/// Construction-time configuration. Every field has a runtime setter on
/// [`SeekArc`] as well; out-of-range angles and progress are clamped at
/// assignment, never reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub max: u32,
    pub progress: u32,
    pub start_angle: i32,
    pub sweep_angle: i32,
    pub rotation: i32,
    pub direction: SweepDirection,
    pub rollover: bool,
    pub rounded_edges: bool,
    pub touch_inside: bool,
    pub thumbnail_touch_only: bool,
    pub touch_update_on_down: bool,
    pub enabled: bool,
    /// Stroke widths in physical pixels.
    pub arc_width: f64,
    pub progress_width: f64,
    pub arc_color: Srgba<f64>,
    pub progress_color: Srgba<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            progress: 0,
            start_angle: 0,
            sweep_angle: DEFAULT_SWEEP_ANGLE,
            rotation: 0,
            direction: SweepDirection::Clockwise,
            rollover: true,
            rounded_edges: false,
            touch_inside: true,
            thumbnail_touch_only: false,
            touch_update_on_down: true,
            enabled: true,
            arc_width: DEFAULT_STROKE_WIDTH,
            progress_width: DEFAULT_STROKE_WIDTH,
            arc_color: Srgba::new(0.6, 0.6, 0.6, 1.0),
            progress_color: Srgba::new(0.2, 0.71, 0.9, 1.0),
        }
    }
}

/// Receives change notifications from a [`SeekArc`]. A single slot; a new
/// registration replaces the previous listener. The `from_user` flag
/// distinguishes touch-driven updates from programmatic ones.
pub trait SeekArcListener {
    fn on_progress_changed(&mut self, progress: u32, from_user: bool);

    fn on_start_tracking_touch(&mut self) {}

    fn on_stop_tracking_touch(&mut self) {}
}

/// One touch sample in the control's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Down(Point),
    Move(Point),
    Up,
    Cancel,
}

/// What the host should do with a handled touch event: claim the gesture
/// and/or queue a redraw. Redraw requests are idempotent hints.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchOutcome {
    pub handled: bool,
    pub redraw: bool,
}

impl TouchOutcome {
    fn handled(redraw: bool) -> Self {
        Self {
            handled: true,
            redraw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum GestureState {
    #[default]
    Idle,
    Tracking,
}

/// The seek arc control: configuration, current progress, derived layout
/// and the per-gesture touch state. Owned by exactly one host view and
/// mutated only on its event thread.
pub struct SeekArc<T: ThumbImage = VectorThumb> {
    settings: Settings,
    thumb: T,

    // derived, recomputed on resize and progress changes
    viewport: Viewport,
    progress_sweep: f64,
    layout: ArcLayout,
    touch_ignore_radius: f64,
    thumb_pos: Point,

    gesture: GestureState,
    thumbnail_active: bool,
    listener: Option<Box<dyn SeekArcListener>>,
}

impl SeekArc<VectorThumb> {
    pub fn new(settings: Settings) -> Self {
        Self::with_thumb(settings, VectorThumb::default())
    }
}

impl<T: ThumbImage> SeekArc<T> {
    pub fn with_thumb(mut settings: Settings, thumb: T) -> Self {
        settings.max = settings.max.max(1);
        settings.sweep_angle = settings.sweep_angle.clamp(0, 360);
        settings.start_angle = clamp_start_angle(settings.start_angle);
        settings.progress = settings.progress.min(settings.max);

        let mut arc = Self {
            settings,
            thumb,
            viewport: Viewport::default(),
            progress_sweep: 0.0,
            layout: ArcLayout::default(),
            touch_ignore_radius: 0.0,
            thumb_pos: Point::default(),
            gesture: GestureState::Idle,
            thumbnail_active: false,
            listener: None,
        };
        arc.progress_sweep = arc.compute_progress_sweep(arc.settings.progress);
        arc.update_thumb_position();
        arc
    }

    /// Replaces the whole configuration at once, e.g. after a config
    /// reload. Derived state is rebuilt for the current layout.
    pub fn apply_settings(&mut self, settings: Settings) {
        let progress = settings.progress;
        self.settings = settings;
        self.settings.max = self.settings.max.max(1);
        self.settings.sweep_angle = self.settings.sweep_angle.clamp(0, 360);
        self.settings.start_angle = clamp_start_angle(self.settings.start_angle);
        self.resize(self.viewport);
        self.update_progress(progress, false);
    }

    pub fn set_listener(&mut self, listener: impl SeekArcListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    // ---- layout ----

    /// Recomputes the derived layout for a (re)measured drawing surface.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let (_, thumb_h) = self.thumb.size();
        self.layout = ArcLayout::compute(viewport, thumb_h / 2.0, self.settings.arc_width);
        self.refresh_touch_ignore_radius();
        self.update_thumb_position();
    }

    fn refresh_touch_ignore_radius(&mut self) {
        let (w, h) = self.thumb.size();
        self.touch_ignore_radius = geometry::touch_ignore_radius(
            self.layout.radius,
            self.settings.touch_inside,
            (w / 2.0, h / 2.0),
        );
    }

    // ---- touch ----

    /// Feeds one touch event through the gesture machine.
    ///
    /// A down enters tracking, evaluates the thumbnail grab in
    /// thumbnail-only mode and, when touch-update-on-down is set, applies
    /// the point immediately. Moves apply the point while tracking; up and
    /// cancel end the gesture. A disabled control handles nothing.
    pub fn handle_touch(&mut self, event: TouchEvent) -> TouchOutcome {
        if !self.settings.enabled {
            return TouchOutcome::default();
        }

        match event {
            TouchEvent::Down(point) => {
                self.gesture = GestureState::Tracking;
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_start_tracking_touch();
                }
                if self.settings.thumbnail_touch_only {
                    self.thumbnail_active = self.hits_thumb(point);
                }
                if self.settings.touch_update_on_down {
                    let redraw = self.apply_touch(point);
                    return TouchOutcome::handled(redraw);
                }
                TouchOutcome::handled(false)
            }
            TouchEvent::Move(point) => {
                if self.gesture != GestureState::Tracking {
                    return TouchOutcome::default();
                }
                TouchOutcome::handled(self.apply_touch(point))
            }
            TouchEvent::Up | TouchEvent::Cancel => {
                if self.gesture == GestureState::Tracking
                    && let Some(listener) = self.listener.as_mut()
                {
                    listener.on_stop_tracking_touch();
                }
                self.gesture = GestureState::Idle;
                self.thumbnail_active = false;
                self.thumb.set_pressed(false);
                TouchOutcome::handled(true)
            }
        }
    }

    /// Gating check, angle mapping, rollover policy, progress update.
    /// Returns whether anything changed enough to warrant a redraw.
    fn apply_touch(&mut self, point: Point) -> bool {
        if self.ignore_touch(point) {
            return false;
        }

        let angle = geometry::touch_degrees(
            point,
            self.layout.translate,
            self.settings.direction.is_clockwise(),
            self.settings.rotation as f64,
            self.settings.start_angle as f64,
        );
        let Some(sample) =
            geometry::progress_for_angle(angle, self.settings.max, self.settings.sweep_angle as f64)
        else {
            return false;
        };

        let sample = if self.settings.rollover {
            sample
        } else {
            self.clamp_seam(sample)
        };

        self.thumb.set_pressed(true);
        self.update_progress(sample, true)
    }

    fn ignore_touch(&self, point: Point) -> bool {
        if (self.settings.thumbnail_touch_only && !self.thumbnail_active) || !self.settings.enabled
        {
            return true;
        }
        let dx = point.x - self.layout.translate.x;
        let dy = point.y - self.layout.translate.y;
        dx.hypot(dy) < self.touch_ignore_radius
    }

    /// With rollover disabled, a single sample jumping across the 0/max
    /// seam clamps to the nearer bound instead of wrapping the thumb
    /// through the gap.
    fn clamp_seam(&self, sample: u32) -> u32 {
        let high = self.settings.max as f64 * ROLLOVER_HIGH;
        let low = self.settings.max as f64 * ROLLOVER_LOW;
        let current = self.settings.progress as f64;
        let sample_f = sample as f64;

        if current >= high && sample_f <= low {
            self.settings.max
        } else if current <= low && sample_f >= high {
            0
        } else {
            sample
        }
    }

    /// Hit box for grabbing the thumbnail: the thumb bounds expanded by a
    /// fixed margin, tested in translate-minus-point coordinates to match
    /// the thumb placement convention.
    fn hits_thumb(&self, point: Point) -> bool {
        let x = self.layout.translate.x - point.x;
        let y = self.layout.translate.y - point.y;
        let (w, h) = self.thumb.size();

        x >= self.thumb_pos.x - THUMB_HIT_MARGIN
            && x <= self.thumb_pos.x + w + 2.0 * THUMB_HIT_MARGIN
            && y >= self.thumb_pos.y - THUMB_HIT_MARGIN
            && y <= self.thumb_pos.y + h + 2.0 * THUMB_HIT_MARGIN
    }

    // ---- progress ----

    /// Programmatic progress update, clamped to `[0, max]`.
    pub fn set_progress(&mut self, progress: u32) {
        self.update_progress(progress, false);
    }

    fn update_progress(&mut self, progress: u32, from_user: bool) -> bool {
        let progress = progress.min(self.settings.max);
        self.settings.progress = progress;

        if let Some(listener) = self.listener.as_mut() {
            listener.on_progress_changed(progress, from_user);
        }

        self.progress_sweep = self.compute_progress_sweep(progress);
        self.update_thumb_position();
        true
    }

    fn compute_progress_sweep(&self, progress: u32) -> f64 {
        progress as f64 / self.settings.max as f64 * self.settings.sweep_angle as f64
    }

    fn update_thumb_position(&mut self) {
        self.thumb_pos = geometry::thumb_position(
            self.layout.radius,
            self.settings.start_angle as f64,
            self.progress_sweep,
            self.settings.rotation as f64,
        );
    }

    // ---- accessors ----

    pub fn progress(&self) -> u32 {
        self.settings.progress
    }

    pub fn max(&self) -> u32 {
        self.settings.max
    }

    /// Changing the range re-clamps the current progress into it.
    pub fn set_max(&mut self, max: u32) {
        self.settings.max = max.max(1);
        self.update_progress(self.settings.progress, false);
    }

    pub fn start_angle(&self) -> i32 {
        self.settings.start_angle
    }

    pub fn set_start_angle(&mut self, start_angle: i32) {
        self.settings.start_angle = clamp_start_angle(start_angle);
        self.update_thumb_position();
    }

    pub fn sweep_angle(&self) -> i32 {
        self.settings.sweep_angle
    }

    pub fn set_sweep_angle(&mut self, sweep_angle: i32) {
        self.settings.sweep_angle = sweep_angle.clamp(0, 360);
        self.progress_sweep = self.compute_progress_sweep(self.settings.progress);
        self.update_thumb_position();
    }

    pub fn rotation(&self) -> i32 {
        self.settings.rotation
    }

    pub fn set_rotation(&mut self, rotation: i32) {
        self.settings.rotation = rotation;
        self.update_thumb_position();
    }

    pub fn direction(&self) -> SweepDirection {
        self.settings.direction
    }

    pub fn is_clockwise(&self) -> bool {
        self.settings.direction.is_clockwise()
    }

    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.settings.direction = SweepDirection::from_clockwise(clockwise);
    }

    pub fn rollover(&self) -> bool {
        self.settings.rollover
    }

    pub fn set_rollover(&mut self, rollover: bool) {
        self.settings.rollover = rollover;
    }

    pub fn rounded_edges(&self) -> bool {
        self.settings.rounded_edges
    }

    pub fn set_rounded_edges(&mut self, rounded: bool) {
        self.settings.rounded_edges = rounded;
    }

    pub fn touch_inside(&self) -> bool {
        self.settings.touch_inside
    }

    pub fn set_touch_inside(&mut self, touch_inside: bool) {
        self.settings.touch_inside = touch_inside;
        self.refresh_touch_ignore_radius();
    }

    pub fn thumbnail_touch_only(&self) -> bool {
        self.settings.thumbnail_touch_only
    }

    pub fn set_thumbnail_touch_only(&mut self, thumbnail_only: bool) {
        self.settings.thumbnail_touch_only = thumbnail_only;
    }

    pub fn touch_update_on_down(&self) -> bool {
        self.settings.touch_update_on_down
    }

    pub fn set_touch_update_on_down(&mut self, update_on_down: bool) {
        self.settings.touch_update_on_down = update_on_down;
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    pub fn arc_color(&self) -> Srgba<f64> {
        self.settings.arc_color
    }

    pub fn set_arc_color(&mut self, color: Srgba<f64>) {
        self.settings.arc_color = color;
    }

    pub fn progress_color(&self) -> Srgba<f64> {
        self.settings.progress_color
    }

    pub fn set_progress_color(&mut self, color: Srgba<f64>) {
        self.settings.progress_color = color;
    }

    pub fn arc_width_px(&self) -> f64 {
        self.settings.arc_width
    }

    pub fn set_arc_width(&mut self, width: Dp, density: f64) {
        self.settings.arc_width = width.to_px(density);
    }

    pub fn progress_width_px(&self) -> f64 {
        self.settings.progress_width
    }

    pub fn set_progress_width(&mut self, width: Dp, density: f64) {
        self.settings.progress_width = width.to_px(density);
    }

    /// Styles the thumb's stroke ring, if the thumb image supports one.
    /// Logs and ignores the call otherwise; never an error.
    pub fn set_thumb_stroke(&mut self, width: Dp, color: Srgba<f64>, density: f64) {
        if !self.thumb.supports_stroke() {
            log::warn!("thumb image does not support strokes; ignoring stroke style");
            return;
        }
        self.thumb.set_stroke(width.to_px(density), color);
    }

    pub fn thumb(&self) -> &T {
        &self.thumb
    }

    pub fn radius(&self) -> f64 {
        self.layout.radius
    }

    pub fn layout(&self) -> ArcLayout {
        self.layout
    }

    pub fn progress_sweep(&self) -> f64 {
        self.progress_sweep
    }

    pub fn thumb_pos(&self) -> Point {
        self.thumb_pos
    }

    pub fn touch_ignore_radius(&self) -> f64 {
        self.touch_ignore_radius
    }
}

/// The original control treats an over-rotated start angle as "start at 12
/// o'clock" rather than clamping to the far end.
fn clamp_start_angle(start_angle: i32) -> i32 {
    if !(0..=360).contains(&start_angle) {
        0
    } else {
        start_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::geometry::Padding;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Note {
        Progress(u32, bool),
        Start,
        Stop,
    }

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<Note>>>);

    impl SeekArcListener for Recorder {
        fn on_progress_changed(&mut self, progress: u32, from_user: bool) {
            self.0.borrow_mut().push(Note::Progress(progress, from_user));
        }

        fn on_start_tracking_touch(&mut self) {
            self.0.borrow_mut().push(Note::Start);
        }

        fn on_stop_tracking_touch(&mut self) {
            self.0.borrow_mut().push(Note::Stop);
        }
    }

    const VIEW: Viewport = Viewport {
        width: 200.0,
        height: 200.0,
        padding: Padding {
            left: 0.0,
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
        },
    };

    /// Zero-size thumb and zero stroke width so the arc radius is exactly
    /// half the viewport and test arithmetic stays round.
    struct PointThumb;

    impl ThumbImage for PointThumb {
        fn size(&self) -> (f64, f64) {
            (0.0, 0.0)
        }
    }

    fn arc_with(settings: Settings) -> SeekArc<PointThumb> {
        let settings = Settings {
            arc_width: 0.0,
            progress_width: 0.0,
            ..settings
        };
        let mut arc = SeekArc::with_thumb(settings, PointThumb);
        arc.resize(VIEW);
        arc
    }

    /// Point on the arc track at the given arc angle (degrees from 12
    /// o'clock, clockwise).
    fn point_at(arc_deg: f64) -> Point {
        let theta = (arc_deg - 90.0).to_radians();
        Point::new(100.0 + 100.0 * theta.cos(), 100.0 + 100.0 * theta.sin())
    }

    #[test]
    fn test_defaults_and_layout() {
        let arc = arc_with(Settings::default());
        assert_eq!(arc.progress(), 0);
        assert_eq!(arc.max(), 100);
        assert_eq!(arc.radius(), 100.0);
        assert_eq!(arc.layout().translate, Point::new(100.0, 100.0));
        assert_eq!(arc.touch_ignore_radius(), 25.0);
    }

    #[test]
    fn test_touch_at_quarter_turn_yields_quarter_progress() {
        let mut arc = arc_with(Settings::default());
        let outcome = arc.handle_touch(TouchEvent::Down(point_at(90.0)));
        assert!(outcome.handled && outcome.redraw);
        assert_eq!(arc.progress(), 25);
    }

    #[test]
    fn test_half_sweep_doubles_value_per_degree() {
        let mut arc = arc_with(Settings {
            sweep_angle: 180,
            ..Settings::default()
        });
        arc.handle_touch(TouchEvent::Down(point_at(90.0)));
        assert_eq!(arc.progress(), 50);
    }

    #[test]
    fn test_touch_outside_sweep_is_discarded() {
        let mut arc = arc_with(Settings {
            sweep_angle: 180,
            progress: 20,
            ..Settings::default()
        });
        // 270 along the circle maps past max for a 180-degree sweep
        let outcome = arc.handle_touch(TouchEvent::Down(point_at(270.0)));
        assert!(outcome.handled && !outcome.redraw);
        assert_eq!(arc.progress(), 20);
    }

    #[test]
    fn test_center_touch_is_ignored() {
        let mut arc = arc_with(Settings::default());
        arc.set_progress(40);
        let outcome = arc.handle_touch(TouchEvent::Down(Point::new(100.0, 100.0)));
        assert!(!outcome.redraw);
        assert_eq!(arc.progress(), 40);
    }

    #[test]
    fn test_disabled_control_is_inert() {
        let notes = Recorder::default();
        let mut arc = arc_with(Settings {
            enabled: false,
            ..Settings::default()
        });
        arc.set_listener(notes.clone());

        for event in [
            TouchEvent::Down(point_at(90.0)),
            TouchEvent::Move(point_at(180.0)),
            TouchEvent::Up,
        ] {
            let outcome = arc.handle_touch(event);
            assert!(!outcome.handled);
        }
        assert_eq!(arc.progress(), 0);
        assert!(notes.0.borrow().is_empty());
    }

    #[test]
    fn test_rollover_disabled_clamps_high_to_max() {
        let mut arc = arc_with(Settings {
            rollover: false,
            ..Settings::default()
        });
        arc.set_progress(90);
        arc.handle_touch(TouchEvent::Down(point_at(5.0 * 3.6)));
        assert_eq!(arc.progress(), 100);
    }

    #[test]
    fn test_rollover_disabled_clamps_low_to_zero() {
        let mut arc = arc_with(Settings {
            rollover: false,
            ..Settings::default()
        });
        arc.set_progress(10);
        arc.handle_touch(TouchEvent::Down(point_at(95.0 * 3.6)));
        assert_eq!(arc.progress(), 0);
    }

    #[test]
    fn test_rollover_enabled_takes_raw_jump() {
        let mut arc = arc_with(Settings::default());
        arc.set_progress(90);
        arc.handle_touch(TouchEvent::Down(point_at(5.0 * 3.6)));
        assert_eq!(arc.progress(), 5);
    }

    #[test]
    fn test_counter_clockwise_mirrors_touch_mapping() {
        let mut cw = arc_with(Settings::default());
        let mut ccw = arc_with(Settings {
            direction: SweepDirection::CounterClockwise,
            ..Settings::default()
        });

        let point = point_at(60.0);
        let mirrored = Point::new(200.0 - point.x, point.y);
        cw.handle_touch(TouchEvent::Down(point));
        ccw.handle_touch(TouchEvent::Down(mirrored));
        assert_eq!(cw.progress(), ccw.progress());
    }

    #[test]
    fn test_set_progress_is_idempotent() {
        let mut arc = arc_with(Settings::default());
        arc.set_progress(42);
        let (sweep, pos) = (arc.progress_sweep(), arc.thumb_pos());
        arc.set_progress(42);
        assert_eq!(arc.progress_sweep(), sweep);
        assert_eq!(arc.thumb_pos(), pos);
    }

    #[test]
    fn test_progress_invariant_holds_under_clamping() {
        let mut arc = arc_with(Settings {
            progress: 500,
            ..Settings::default()
        });
        assert_eq!(arc.progress(), 100);
        arc.set_progress(1000);
        assert_eq!(arc.progress(), 100);
        arc.set_max(50);
        assert_eq!(arc.progress(), 50);
    }

    #[test]
    fn test_zero_sweep_never_updates() {
        let mut arc = arc_with(Settings {
            sweep_angle: 0,
            progress: 30,
            ..Settings::default()
        });
        for deg in [0.0, 90.0, 180.0, 270.0] {
            arc.handle_touch(TouchEvent::Down(point_at(deg)));
            arc.handle_touch(TouchEvent::Up);
        }
        assert_eq!(arc.progress(), 30);
    }

    #[test]
    fn test_gesture_notifications() {
        let notes = Recorder::default();
        let mut arc = arc_with(Settings::default());
        arc.set_listener(notes.clone());

        arc.handle_touch(TouchEvent::Down(point_at(90.0)));
        arc.handle_touch(TouchEvent::Move(point_at(180.0)));
        arc.handle_touch(TouchEvent::Up);

        assert_eq!(
            *notes.0.borrow(),
            vec![
                Note::Start,
                Note::Progress(25, true),
                Note::Progress(50, true),
                Note::Stop,
            ]
        );
    }

    #[test]
    fn test_move_without_down_is_ignored() {
        let mut arc = arc_with(Settings::default());
        let outcome = arc.handle_touch(TouchEvent::Move(point_at(90.0)));
        assert!(!outcome.handled);
        assert_eq!(arc.progress(), 0);
    }

    #[test]
    fn test_programmatic_update_is_not_from_user() {
        let notes = Recorder::default();
        let mut arc = arc_with(Settings::default());
        arc.set_listener(notes.clone());
        arc.set_progress(10);
        assert_eq!(*notes.0.borrow(), vec![Note::Progress(10, false)]);
    }

    #[test]
    fn test_last_listener_registration_wins() {
        let first = Recorder::default();
        let second = Recorder::default();
        let mut arc = arc_with(Settings::default());
        arc.set_listener(first.clone());
        arc.set_listener(second.clone());
        arc.set_progress(7);
        assert!(first.0.borrow().is_empty());
        assert_eq!(*second.0.borrow(), vec![Note::Progress(7, false)]);
    }

    #[test]
    fn test_thumbnail_only_requires_grab() {
        let mut arc = arc_with(Settings {
            thumbnail_touch_only: true,
            touch_update_on_down: false,
            ..Settings::default()
        });
        // thumb sits at progress 0; a down on the far side misses it
        arc.handle_touch(TouchEvent::Down(point_at(180.0)));
        arc.handle_touch(TouchEvent::Move(point_at(90.0)));
        assert_eq!(arc.progress(), 0);
        arc.handle_touch(TouchEvent::Up);

        // a down near the thumb grabs it, after which moves track
        arc.handle_touch(TouchEvent::Down(point_at(0.0)));
        arc.handle_touch(TouchEvent::Move(point_at(90.0)));
        assert_eq!(arc.progress(), 25);
    }

    #[test]
    fn test_touch_update_on_down_disabled_waits_for_drag() {
        let mut arc = arc_with(Settings {
            touch_update_on_down: false,
            ..Settings::default()
        });
        let outcome = arc.handle_touch(TouchEvent::Down(point_at(90.0)));
        assert!(outcome.handled && !outcome.redraw);
        assert_eq!(arc.progress(), 0);
        arc.handle_touch(TouchEvent::Move(point_at(90.0)));
        assert_eq!(arc.progress(), 25);
    }

    #[test]
    fn test_start_angle_over_rotation_resets_to_twelve_oclock() {
        let arc = arc_with(Settings {
            start_angle: 400,
            ..Settings::default()
        });
        assert_eq!(arc.start_angle(), 0);
    }

    #[test]
    fn test_sweep_angle_setter_clamps_and_rescales() {
        let mut arc = arc_with(Settings::default());
        arc.set_progress(50);
        arc.set_sweep_angle(500);
        assert_eq!(arc.sweep_angle(), 360);
        assert!((arc.progress_sweep() - 180.0).abs() < 1e-9);
        arc.set_sweep_angle(180);
        assert!((arc.progress_sweep() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_settings_rebuilds_derived_state() {
        let mut arc = arc_with(Settings::default());
        arc.set_progress(50);
        arc.apply_settings(Settings {
            max: 40,
            progress: 90,
            arc_width: 0.0,
            progress_width: 0.0,
            ..Settings::default()
        });
        assert_eq!(arc.progress(), 40);
        assert_eq!(arc.radius(), 100.0);
        assert!((arc.progress_sweep() - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_direction_parsing() {
        let cases = [
            ("\"cw\"", SweepDirection::Clockwise),
            ("\"Clockwise\"", SweepDirection::Clockwise),
            ("\"CLOCKWISE\"", SweepDirection::Clockwise),
            ("\"ccw\"", SweepDirection::CounterClockwise),
            ("\"anticlockwise\"", SweepDirection::CounterClockwise),
            ("\"CounterClockwise\"", SweepDirection::CounterClockwise),
        ];
        for (json, expected) in cases {
            let parsed: SweepDirection = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, expected);
        }
    }
}
