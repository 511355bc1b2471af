use crate::config::ThumbSection;
use crate::gui::theme::ThemeColors;
use gdk_pixbuf::Pixbuf;
use palette::Srgba;
use seekarc::{Dp, ThumbImage, VectorThumb};

/// The thumb the dial actually draws: a user-supplied image, or a vector
/// circle when none is configured (or the image fails to load).
pub enum DialThumb {
    Vector(VectorThumb),
    Pixbuf(Pixbuf),
}

impl DialThumb {
    pub fn from_config(section: &ThumbSection, theme: &ThemeColors, density: f64) -> Self {
        if let Some(path) = &section.image {
            match Pixbuf::from_file(path) {
                Ok(pixbuf) => return Self::Pixbuf(pixbuf),
                Err(e) => {
                    log::error!("Failed to load thumb image {}: {}", path.display(), e);
                }
            }
        }

        let color = section.color.map(Srgba::from).unwrap_or(theme.thumb);
        let radius = Dp(section.radius).to_px(density);
        Self::Vector(VectorThumb::new(radius, color).scaled(super::theme::oversize_factor()))
    }
}

impl ThumbImage for DialThumb {
    fn size(&self) -> (f64, f64) {
        match self {
            Self::Vector(thumb) => thumb.size(),
            Self::Pixbuf(pixbuf) => (pixbuf.width() as f64, pixbuf.height() as f64),
        }
    }

    fn supports_stroke(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    fn set_stroke(&mut self, width: f64, color: Srgba<f64>) {
        if let Self::Vector(thumb) = self {
            thumb.set_stroke(width, color);
        }
    }

    fn set_pressed(&mut self, pressed: bool) {
        if let Self::Vector(thumb) = self {
            thumb.set_pressed(pressed);
        }
    }
}
