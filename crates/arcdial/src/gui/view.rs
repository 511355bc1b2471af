use crate::gui::thumb::DialThumb;
use cairo::Context;
use gdk4::prelude::*;
use seekarc::{ArcStroke, Frame, Point, StrokeCap, VectorThumb};

/// Renders one frame of the dial: background track, progress span, thumb.
/// The mirror transform flips the whole frame for counter-clockwise arcs.
pub fn draw(cr: &Context, frame: &Frame, thumb: &DialThumb) -> Result<(), cairo::Error> {
    cr.save()?;
    if let Some(axis) = frame.mirror {
        cr.translate(axis, 0.0);
        cr.scale(-1.0, 1.0);
        cr.translate(-axis, 0.0);
    }

    draw_stroke(cr, &frame.track)?;
    draw_stroke(cr, &frame.fill)?;
    draw_thumb(cr, frame.thumb.center, thumb)?;

    cr.restore()
}

fn draw_stroke(cr: &Context, arc: &ArcStroke) -> Result<(), cairo::Error> {
    if arc.sweep_deg <= 0.0 || arc.radius <= 0.0 {
        return Ok(());
    }

    let (r, g, b, a) = arc.paint.color.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.set_line_width(arc.paint.width);
    cr.set_line_cap(match arc.paint.cap {
        StrokeCap::Round => cairo::LineCap::Round,
        StrokeCap::Square => cairo::LineCap::Square,
    });

    let start = arc.start_deg.to_radians();
    let end = (arc.start_deg + arc.sweep_deg).to_radians();
    cr.new_sub_path();
    cr.arc(arc.center.x, arc.center.y, arc.radius, start, end);
    cr.stroke()
}

fn draw_thumb(cr: &Context, center: Point, thumb: &DialThumb) -> Result<(), cairo::Error> {
    match thumb {
        DialThumb::Vector(thumb) => draw_vector_thumb(cr, center, thumb),
        DialThumb::Pixbuf(pixbuf) => {
            let (w, h) = (pixbuf.width() as f64, pixbuf.height() as f64);
            cr.set_source_pixbuf(pixbuf, center.x - w / 2.0, center.y - h / 2.0);
            cr.paint()
        }
    }
}

fn draw_vector_thumb(cr: &Context, center: Point, thumb: &VectorThumb) -> Result<(), cairo::Error> {
    // grow slightly while grabbed so the press reads visually
    let radius = if thumb.is_pressed() {
        thumb.radius() * 1.1
    } else {
        thumb.radius()
    };

    let (r, g, b, a) = thumb.fill().into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
    cr.fill()?;

    if let Some((width, color)) = thumb.stroke() {
        let (r, g, b, a) = color.into_components();
        cr.set_source_rgba(r, g, b, a);
        cr.set_line_width(width);
        cr.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
        cr.stroke()?;
    }
    Ok(())
}
