use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub track: Srgba<f64>,
    pub fill: Srgba<f64>,
    pub thumb: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            track: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.6, 0.6, 0.6, 1.0),
                Some(1.0),
            ),
            fill: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.2, 0.71, 0.9, 1.0),
                Some(1.0),
            ),
            thumb: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.9, 0.9, 0.9, 1.0),
                Some(1.0),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.arcdial-value {
    font-size: 28px;
    font-weight: bold;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

/// Scale factor for the thumb on physically large screens, where the
/// default size looks weird.
pub fn oversize_factor() -> f64 {
    let tall = gdk::Display::default().is_some_and(|display| {
        let monitors = display.monitors();
        (0..monitors.n_items()).any(|i| {
            monitors
                .item(i)
                .and_then(|item| item.downcast::<gdk::Monitor>().ok())
                .is_some_and(|m| m.geometry().height() as f64 > super::REFERENCE_HEIGHT)
        })
    });

    if tall { super::OVERSIZE_THUMB_SCALE } else { 1.0 }
}
