use palette::Srgba;

/// The draggable handle image. Implemented by whatever the host can draw;
/// the core only needs its dimensions for layout and hit testing.
///
/// Stroke support is an explicit capability rather than a downcast probe:
/// images that cannot carry a stroke ring keep the default `false` and
/// [`ThumbImage::set_stroke`] stays a no-op for them.
pub trait ThumbImage {
    /// Intrinsic (width, height) in pixels.
    fn size(&self) -> (f64, f64);

    fn supports_stroke(&self) -> bool {
        false
    }

    /// Applies a stroke ring. No-op on images without stroke support.
    fn set_stroke(&mut self, _width: f64, _color: Srgba<f64>) {}

    /// Pressed-state hook for stateful images, driven by the gesture
    /// machine. Most images ignore it.
    fn set_pressed(&mut self, _pressed: bool) {}
}

/// A plain filled circle with an optional stroke ring, the default thumb
/// when the host supplies no image of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorThumb {
    radius: f64,
    fill: Srgba<f64>,
    stroke: Option<(f64, Srgba<f64>)>,
    pressed: bool,
}

impl VectorThumb {
    pub fn new(radius: f64, fill: Srgba<f64>) -> Self {
        Self {
            radius,
            fill,
            stroke: None,
            pressed: false,
        }
    }

    /// Scales the thumb up, for oversized displays where the default size
    /// looks weird.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.radius *= factor;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fill(&self) -> Srgba<f64> {
        self.fill
    }

    pub fn stroke(&self) -> Option<(f64, Srgba<f64>)> {
        self.stroke
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl Default for VectorThumb {
    fn default() -> Self {
        Self::new(12.0, Srgba::new(0.9, 0.9, 0.9, 1.0))
    }
}

impl ThumbImage for VectorThumb {
    fn size(&self) -> (f64, f64) {
        (self.radius * 2.0, self.radius * 2.0)
    }

    fn supports_stroke(&self) -> bool {
        true
    }

    fn set_stroke(&mut self, width: f64, color: Srgba<f64>) {
        self.stroke = Some((width, color));
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}
