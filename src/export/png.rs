//! PNG rendering of a sketch via Cairo.

use super::ExportError;
use crate::draw::{Sketch, render_shapes};
use std::fs::File;
use std::path::Path;

/// Loads a step screenshot to draw the sketch on.
pub fn load_background(path: &Path) -> Result<cairo::ImageSurface, ExportError> {
    let mut file = File::open(path)?;
    Ok(cairo::ImageSurface::create_from_png(&mut file)?)
}

/// Smallest canvas covering every committed shape, at least 1x1.
pub fn canvas_size(sketch: &Sketch) -> (u32, u32) {
    sketch
        .records()
        .iter()
        .map(|record| record.shape.bounding_box().corner)
        .fold((1, 1), |(w, h), corner| {
            (
                w.max(corner.x.ceil().max(0.0) as u32),
                h.max(corner.y.ceil().max(0.0) as u32),
            )
        })
}

/// Renders the committed shapes onto a new ARGB surface.
///
/// With a background the surface takes the screenshot's size and the shapes
/// are drawn over it; otherwise the canvas is transparent and `size` is used.
pub fn render_sketch(
    sketch: &Sketch,
    background: Option<&cairo::ImageSurface>,
    size: (u32, u32),
) -> Result<cairo::ImageSurface, ExportError> {
    let (width, height) = match background {
        Some(bg) => (bg.width(), bg.height()),
        None => (size.0 as i32, size.1 as i32),
    };
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    let ctx = cairo::Context::new(&surface)?;

    if let Some(bg) = background {
        ctx.set_source_surface(bg, 0.0, 0.0)?;
        ctx.paint()?;
    }

    let records = sketch.records();
    render_shapes(&ctx, records.iter().map(|record| &record.shape));
    drop(ctx);
    surface.flush();

    Ok(surface)
}

/// Writes a rendered surface as PNG.
pub fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<(), ExportError> {
    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Saved sketch image to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, Shape};
    use crate::input::{ShapeFactory, ShapeRegistrar};
    use crate::util::Point;

    #[test]
    fn canvas_covers_shapes() {
        let mut sketch = Sketch::new();
        assert_eq!(canvas_size(&sketch), (1, 1));

        let handle = sketch.new_shape(Shape::Line {
            start: Point::new(10.0, 10.0),
            end: Point::new(99.2, 49.5),
            color: RED,
            thick: 2.0,
        });
        sketch.register_interactive_behavior(&handle, false);

        assert_eq!(canvas_size(&sketch), (101, 51));
    }
}
