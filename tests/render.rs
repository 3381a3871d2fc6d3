use stepsketch::config::Config;
use stepsketch::draw::Sketch;
use stepsketch::export;
use stepsketch::input::{DrawTool, DrawingPad, PointerEvent, ToolKind, ZoomPanState};
use tempfile::TempDir;

fn make_tool(kind: ToolKind) -> DrawTool<Sketch, ZoomPanState> {
    let config = Config::default();
    DrawTool::new(
        kind,
        config.tool_style(),
        Sketch::new(),
        config.zoom_state().unwrap(),
    )
}

fn draw(tool: &mut DrawTool<Sketch, ZoomPanState>, from: (f64, f64), to: (f64, f64)) {
    let pad = DrawingPad::default();
    tool.on_press_start(&mut PointerEvent::left(from.0, from.1), &pad)
        .unwrap();
    tool.on_drag(&mut PointerEvent::left(to.0, to.1), &pad)
        .unwrap();
    tool.on_release_end(&mut PointerEvent::left(to.0, to.1))
        .unwrap();
}

fn pixel(surface: &mut cairo::ImageSurface, x: usize, y: usize) -> [u8; 4] {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y * stride + x * 4;
    [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
}

#[test]
fn every_tool_renders_pixels() {
    for kind in [
        ToolKind::Rect,
        ToolKind::Ellipse,
        ToolKind::Line,
        ToolKind::Arrow,
        ToolKind::Text,
    ] {
        let mut tool = make_tool(kind);
        draw(&mut tool, (10.0, 10.0), (90.0, 60.0));

        let mut surface = export::render_sketch(tool.store(), None, (100, 80)).unwrap();
        let data = surface.data().unwrap();
        assert!(
            data.iter().any(|byte| *byte != 0),
            "{kind:?} should render pixels"
        );
    }
}

#[test]
fn rect_is_drawn_at_logical_coordinates() {
    let mut tool = make_tool(ToolKind::Rect);
    tool.zoom_mut().set_zoom(2.0);
    // Device (40, 40)-(160, 160) at 2x is logical (20, 20)-(80, 80).
    draw(&mut tool, (40.0, 40.0), (160.0, 160.0));

    let mut surface = export::render_sketch(tool.store(), None, (100, 100)).unwrap();
    assert_ne!(pixel(&mut surface, 20, 50)[3], 0, "left edge is stroked");
    assert_eq!(pixel(&mut surface, 50, 50)[3], 0, "interior stays empty");
    assert_eq!(pixel(&mut surface, 90, 50)[3], 0, "outside stays empty");
}

#[test]
fn sketch_is_drawn_over_screenshot() {
    let temp = TempDir::new().unwrap();
    let screenshot = temp.path().join("original.png");
    {
        let bg = cairo::ImageSurface::create(cairo::Format::ARgb32, 64, 48).unwrap();
        let ctx = cairo::Context::new(&bg).unwrap();
        ctx.set_source_rgb(1.0, 1.0, 1.0);
        ctx.paint().unwrap();
        drop(ctx);
        let mut file = std::fs::File::create(&screenshot).unwrap();
        bg.write_to_png(&mut file).unwrap();
    }

    let mut tool = make_tool(ToolKind::Line);
    draw(&mut tool, (0.0, 24.0), (64.0, 24.0));

    let background = export::load_background(&screenshot).unwrap();
    let mut surface = export::render_sketch(tool.store(), Some(&background), (1, 1)).unwrap();
    assert_eq!((surface.width(), surface.height()), (64, 48));

    // ARGB32 is stored as BGRA on little-endian; white background, red line.
    let background_pixel = pixel(&mut surface, 32, 5);
    assert_eq!(background_pixel, [255, 255, 255, 255]);
    let line_pixel = pixel(&mut surface, 32, 24);
    assert!(line_pixel[2] > 200 && line_pixel[1] < 50);

    let out = temp.path().join("sketch.png");
    export::write_png(&surface, &out).unwrap();
    assert!(out.exists());
}
