//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::shape::Shape;
use crate::util::{self, Point};

/// Padding between a text box border and its text, in logical pixels.
const TEXT_PADDING: f64 = 4.0;

/// Renders all shapes to a Cairo context in order (first shape = bottom layer).
pub fn render_shapes<'a>(ctx: &cairo::Context, shapes: impl IntoIterator<Item = &'a Shape>) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape to a Cairo context.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Rect {
            x,
            y,
            w,
            h,
            color,
            thick,
        } => render_rect(ctx, *x, *y, *w, *h, *color, *thick),
        Shape::Ellipse {
            cx,
            cy,
            rx,
            ry,
            color,
            thick,
        } => render_ellipse(ctx, *cx, *cy, *rx, *ry, *color, *thick),
        Shape::Line {
            start,
            end,
            color,
            thick,
        } => render_line(ctx, *start, *end, *color, *thick),
        Shape::Arrow {
            start,
            end,
            color,
            thick,
            head_length,
            head_angle,
        } => render_arrow(ctx, *start, *end, *color, *thick, *head_length, *head_angle),
        Shape::Text {
            x,
            y,
            w,
            h,
            text,
            color,
            size,
        } => render_text_box(ctx, *x, *y, *w, *h, text, *color, *size),
    }
}

fn render_line(ctx: &cairo::Context, start: Point, end: Point, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(start.x, start.y);
    ctx.line_to(end.x, end.y);
    let _ = ctx.stroke();
}

fn render_rect(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.rectangle(x, y, w, h);
    let _ = ctx.stroke();
}

/// Render an ellipse using Cairo's arc with scaling
fn render_ellipse(
    ctx: &cairo::Context,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    color: Color,
    thick: f64,
) {
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);

    ctx.save().ok();
    ctx.translate(cx, cy);
    ctx.scale(rx, ry);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    let _ = ctx.stroke();
}

/// Render an arrow (line with arrowhead at `end`)
fn render_arrow(
    ctx: &cairo::Context,
    start: Point,
    end: Point,
    color: Color,
    thick: f64,
    head_length: f64,
    head_angle: f64,
) {
    render_line(ctx, start, end, color, thick);

    let [left, right] = util::calculate_arrowhead(end, start, head_length, head_angle);
    for side in [left, right] {
        ctx.move_to(end.x, end.y);
        ctx.line_to(side.x, side.y);
        let _ = ctx.stroke();
    }
}

/// Renders a text box: translucent fill, thin border, and the text clipped to the box.
#[allow(clippy::too_many_arguments)]
fn render_text_box(
    ctx: &cairo::Context,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    text: &str,
    color: Color,
    size: f64,
) {
    let _ = ctx.save();

    let fill = color.with_alpha(0.15);
    ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
    ctx.rectangle(x, y, w, h);
    let _ = ctx.fill_preserve();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(1.0);
    let _ = ctx.stroke_preserve();
    ctx.clip();

    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    ctx.set_font_size(size);
    ctx.move_to(x + TEXT_PADDING, y + TEXT_PADDING + size);
    let _ = ctx.show_text(text);

    let _ = ctx.restore();
}
