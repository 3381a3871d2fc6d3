//! SVG serialization of a sketch.

use crate::draw::{Color, Shape, Sketch};
use crate::util::{self, Point};
use std::fmt::Write;

/// Renders the committed shapes of `sketch` as a standalone SVG document.
///
/// `background_href`, when given, is placed underneath the shapes as an
/// `<image>` covering the whole canvas (usually the step screenshot).
pub fn render_svg(sketch: &Sketch, width: u32, height: u32, background_href: Option<&str>) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    if let Some(href) = background_href {
        let _ = writeln!(
            svg,
            r#"  <image href="{}" x="0" y="0" width="{width}" height="{height}"/>"#,
            escape(href)
        );
    }

    for record in sketch.records() {
        let _ = writeln!(
            svg,
            r#"  <g id="{}" class="{}">{}</g>"#,
            record.id,
            record.shape.name(),
            shape_element(&record.shape)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn stroke(color: &Color, thick: f64) -> String {
    format!(
        r#"fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}""#,
        util::color_to_hex(color),
        color.a,
        thick
    )
}

fn shape_element(shape: &Shape) -> String {
    match shape {
        Shape::Rect {
            x,
            y,
            w,
            h,
            color,
            thick,
        } => format!(
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" {}/>"#,
            stroke(color, *thick)
        ),
        Shape::Ellipse {
            cx,
            cy,
            rx,
            ry,
            color,
            thick,
        } => format!(
            r#"<ellipse cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}" {}/>"#,
            stroke(color, *thick)
        ),
        Shape::Line {
            start,
            end,
            color,
            thick,
        } => line_element(*start, *end, color, *thick),
        Shape::Arrow {
            start,
            end,
            color,
            thick,
            head_length,
            head_angle,
        } => {
            let [left, right] = util::calculate_arrowhead(*end, *start, *head_length, *head_angle);
            format!(
                r#"{}<polyline points="{},{} {},{} {},{}" stroke-linecap="round" {}/>"#,
                line_element(*start, *end, color, *thick),
                left.x,
                left.y,
                end.x,
                end.y,
                right.x,
                right.y,
                stroke(color, *thick)
            )
        }
        Shape::Text {
            x,
            y,
            w,
            h,
            text,
            color,
            size,
        } => format!(
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{hex}" fill-opacity="0.15" stroke="{hex}" stroke-width="1"/><text x="{}" y="{}" font-family="sans-serif" font-size="{size}" fill="{hex}">{}</text>"#,
            x + 4.0,
            y + 4.0 + size,
            escape(text),
            hex = util::color_to_hex(color),
        ),
    }
}

fn line_element(start: Point, end: Point, color: &Color, thick: f64) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-linecap="round" {}/>"#,
        start.x,
        start.y,
        end.x,
        end.y,
        stroke(color, thick)
    )
}

/// Escapes XML special characters in text content and attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};
    use crate::input::{ShapeFactory, ShapeRegistrar};

    fn commit(sketch: &mut Sketch, shape: Shape) {
        let handle = sketch.new_shape(shape);
        sketch.register_interactive_behavior(&handle, false);
    }

    #[test]
    fn empty_sketch_is_a_valid_document() {
        let svg = render_svg(&Sketch::new(), 640, 480, None);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 640 480""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn shapes_are_emitted_in_draw_order() {
        let mut sketch = Sketch::new();
        commit(
            &mut sketch,
            Shape::Rect {
                x: 20.0,
                y: 5.0,
                w: 30.0,
                h: 20.0,
                color: RED,
                thick: 3.0,
            },
        );
        commit(
            &mut sketch,
            Shape::Arrow {
                start: Point::new(0.0, 0.0),
                end: Point::new(100.0, 0.0),
                color: BLUE,
                thick: 2.0,
                head_length: 20.0,
                head_angle: 30.0,
            },
        );

        let svg = render_svg(&sketch, 200, 100, Some("original.png"));
        let rect = svg.find(r#"<rect x="20" y="5" width="30" height="20""#).unwrap();
        let arrow = svg.find(r#"class="arrow""#).unwrap();
        assert!(rect < arrow);
        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert!(svg.contains("<polyline"));
        assert!(svg.contains(r#"<image href="original.png""#));
    }

    #[test]
    fn pending_shapes_are_not_exported() {
        let mut sketch = Sketch::new();
        sketch.new_shape(Shape::Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 1.0),
            color: RED,
            thick: 1.0,
        });
        assert!(!render_svg(&sketch, 10, 10, None).contains("<line"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut sketch = Sketch::new();
        commit(
            &mut sketch,
            Shape::Text {
                x: 0.0,
                y: 0.0,
                w: 100.0,
                h: 30.0,
                text: "a < b & \"c\"".to_string(),
                color: RED,
                size: 16.0,
            },
        );
        let svg = render_svg(&sketch, 100, 30, None);
        assert!(svg.contains("a &lt; b &amp; &quot;c&quot;"));
    }
}
