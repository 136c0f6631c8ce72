/// Offline PNG renderer for the transformation galleries
use image::{imageops, Rgba, RgbaImage};
use nalgebra::Matrix4;
use tfviz_core::{Camera, Error, Result, Scene, Shape, Viewport};

pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const GRID: Rgba<u8> = Rgba([225, 225, 225, 255]);
pub const AXIS: Rgba<u8> = Rgba([130, 130, 130, 255]);
pub const FRAME: Rgba<u8> = Rgba([60, 60, 60, 255]);
/// Original shape in blue, transformed in red, matching the terminal viewer.
pub const ORIGINAL: Rgba<u8> = Rgba([70, 100, 220, 255]);
pub const TRANSFORMED: Rgba<u8> = Rgba([220, 60, 50, 255]);

/// World window for planar panels; the terminal viewer uses the same one.
const PLANAR_WINDOW: (f32, f32, f32, f32) = (-3.0, 4.0, -3.0, 4.0);

/// Tick length in pixels along each axis
const TICK: i32 = 3;

/// A pixel buffer with just enough drawing primitives for wireframe panels.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::from_pixel(width, height, BACKGROUND),
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.img.width() as i32 || y >= self.img.height() as i32 {
            return;
        }
        self.img.put_pixel(x as u32, y as u32, color);
    }

    /// Step along the longer axis, one pixel per step.
    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba<u8>) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0);

        let mut i = 0.0;
        while i <= steps {
            let t = i / steps;
            self.plot(
                (x0 + dx * t).round() as i32,
                (y0 + dy * t).round() as i32,
                color,
            );
            i += 1.0;
        }
    }

    /// One-pixel border around the panel
    pub fn frame(&mut self) {
        let w = self.img.width() as f32 - 1.0;
        let h = self.img.height() as f32 - 1.0;
        self.line(0.0, 0.0, w, 0.0, FRAME);
        self.line(0.0, h, w, h, FRAME);
        self.line(0.0, 0.0, 0.0, h, FRAME);
        self.line(w, 0.0, w, h, FRAME);
    }

    /// Grid lines at integer world coordinates
    pub fn grid(&mut self, viewport: &Viewport) {
        let (x_min, x_max) = viewport.x_range();
        let (y_min, y_max) = viewport.y_range();
        let h = self.img.height() as f32 - 1.0;
        let w = self.img.width() as f32 - 1.0;

        let mut gx = x_min.ceil();
        while gx <= x_max {
            let (sx, _) = viewport.to_screen(&nalgebra::Point2::new(gx, y_min));
            self.line(sx, 0.0, sx, h, GRID);
            gx += 1.0;
        }
        let mut gy = y_min.ceil();
        while gy <= y_max {
            let (_, sy) = viewport.to_screen(&nalgebra::Point2::new(x_min, gy));
            self.line(0.0, sy, w, sy, GRID);
            gy += 1.0;
        }
    }

    /// Coordinate axes through the world origin, with integer tick marks
    pub fn axes(&mut self, viewport: &Viewport) {
        let (x_min, x_max) = viewport.x_range();
        let (y_min, y_max) = viewport.y_range();
        let h = self.img.height() as f32 - 1.0;
        let w = self.img.width() as f32 - 1.0;

        let (origin_x, origin_y) = viewport.to_screen(&nalgebra::Point2::new(0.0, 0.0));
        self.line(origin_x, 0.0, origin_x, h, AXIS);
        self.line(0.0, origin_y, w, origin_y, AXIS);

        let mut gx = x_min.ceil();
        while gx <= x_max {
            let (sx, sy) = viewport.to_screen(&nalgebra::Point2::new(gx, 0.0));
            self.line(sx, sy - TICK as f32, sx, sy + TICK as f32, AXIS);
            gx += 1.0;
        }
        let mut gy = y_min.ceil();
        while gy <= y_max {
            let (sx, sy) = viewport.to_screen(&nalgebra::Point2::new(0.0, gy));
            self.line(sx - TICK as f32, sy, sx + TICK as f32, sy, AXIS);
            gy += 1.0;
        }
    }
}

fn draw_planar_shape(
    canvas: &mut Canvas,
    shape: &tfviz_core::Shape2,
    viewport: &Viewport,
    color: Rgba<u8>,
) {
    let vertices = shape.vertices();
    for [a, b] in shape.edges() {
        let (x0, y0) = viewport.to_screen(&vertices[a]);
        let (x1, y1) = viewport.to_screen(&vertices[b]);
        canvas.line(x0, y0, x1, y1, color);
    }
}

fn draw_spatial_shape(
    canvas: &mut Canvas,
    shape: &tfviz_core::Shape3,
    camera: &Camera,
    color: Rgba<u8>,
) {
    let (w, h) = (canvas.width(), canvas.height());
    let vertices = shape.vertices();
    let spin = Matrix4::identity();
    for &[a, b] in shape.edges() {
        let pa = camera.project_to_screen(&vertices[a], &spin, w, h);
        let pb = camera.project_to_screen(&vertices[b], &spin, w, h);
        if let (Some((x0, y0, _)), Some((x1, y1, _))) = (pa, pb) {
            canvas.line(x0, y0, x1, y1, color);
        }
    }
}

/// World axes drawn as projected 3D lines, in place of a planar grid.
fn draw_spatial_axes(canvas: &mut Canvas, camera: &Camera) {
    let (w, h) = (canvas.width(), canvas.height());
    let spin = Matrix4::identity();
    let origin = nalgebra::Point3::new(0.0, 0.0, 0.0);
    let tips = [
        nalgebra::Point3::new(3.0, 0.0, 0.0),
        nalgebra::Point3::new(0.0, 3.0, 0.0),
        nalgebra::Point3::new(0.0, 0.0, 3.0),
    ];
    if let Some((x0, y0, _)) = camera.project_to_screen(&origin, &spin, w, h) {
        for tip in tips {
            if let Some((x1, y1, _)) = camera.project_to_screen(&tip, &spin, w, h) {
                canvas.line(x0, y0, x1, y1, AXIS);
            }
        }
    }
}

/// Default planar window, grown to contain every scene vertex and then
/// widened on one axis so both axes share the same world-units-per-pixel.
fn planar_window(scene: &Scene, width: u32, height: u32) -> (f32, f32, f32, f32) {
    const PAD: f32 = 0.5;
    let (mut x_min, mut x_max, mut y_min, mut y_max) = PLANAR_WINDOW;
    for shape in [scene.original(), scene.transformed()] {
        if let Shape::Planar(s) = shape {
            for v in s.vertices() {
                x_min = x_min.min(v.x - PAD);
                x_max = x_max.max(v.x + PAD);
                y_min = y_min.min(v.y - PAD);
                y_max = y_max.max(v.y + PAD);
            }
        }
    }

    let ppu_x = width as f32 / (x_max - x_min);
    let ppu_y = height as f32 / (y_max - y_min);
    if ppu_x > ppu_y {
        let extra = width as f32 / ppu_y - (x_max - x_min);
        x_min -= extra / 2.0;
        x_max += extra / 2.0;
    } else {
        let extra = height as f32 / ppu_x - (y_max - y_min);
        y_min -= extra / 2.0;
        y_max += extra / 2.0;
    }
    (x_min, x_max, y_min, y_max)
}

/// Render one scene into a framed panel: grid, axes, original shape in blue,
/// transformed shape in red.
pub fn render_panel(scene: &Scene, width: u32, height: u32) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(width, height);

    match (scene.original(), scene.transformed()) {
        (Shape::Planar(original), Shape::Planar(transformed)) => {
            let (x_min, x_max, y_min, y_max) = planar_window(scene, width, height);
            let viewport = Viewport::new(x_min, x_max, y_min, y_max, width, height)?;
            canvas.grid(&viewport);
            canvas.axes(&viewport);
            draw_planar_shape(&mut canvas, original, &viewport, ORIGINAL);
            draw_planar_shape(&mut canvas, transformed, &viewport, TRANSFORMED);
        }
        (Shape::Spatial(original), Shape::Spatial(transformed)) => {
            let camera = Camera::new(width, height);
            draw_spatial_axes(&mut canvas, &camera);
            draw_spatial_shape(&mut canvas, original, &camera, ORIGINAL);
            draw_spatial_shape(&mut canvas, transformed, &camera, TRANSFORMED);
        }
        _ => {
            // Scene construction guarantees matching dimensions
            unreachable!("scene with mixed shape dimensions");
        }
    }

    canvas.frame();
    Ok(canvas.into_image())
}

/// Compose panels into a grid, one scene per cell (row-major order).
pub fn contact_sheet(
    scenes: &[Scene],
    columns: usize,
    panel_width: u32,
    panel_height: u32,
) -> Result<RgbaImage> {
    if columns == 0 || scenes.is_empty() {
        return Err(Error::InvalidArgument {
            op: "contact_sheet",
            reason: "need at least one scene and one column".to_string(),
        });
    }

    const MARGIN: u32 = 10;
    let rows = scenes.len().div_ceil(columns) as u32;
    let cols = columns as u32;
    let sheet_width = cols * panel_width + (cols + 1) * MARGIN;
    let sheet_height = rows * panel_height + (rows + 1) * MARGIN;
    let mut sheet = RgbaImage::from_pixel(sheet_width, sheet_height, BACKGROUND);

    for (i, scene) in scenes.iter().enumerate() {
        let panel = render_panel(scene, panel_width, panel_height)?;
        let col = (i % columns) as u32;
        let row = (i / columns) as u32;
        let x = MARGIN + col * (panel_width + MARGIN);
        let y = MARGIN + row * (panel_height + MARGIN);
        imageops::replace(&mut sheet, &panel, x as i64, y as i64);
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfviz_core::{demos, Shape2, Transform2, TransformMatrix};

    #[test]
    fn test_line_hits_endpoints() {
        let mut canvas = Canvas::new(10, 10);
        canvas.line(0.0, 0.0, 9.0, 4.0, TRANSFORMED);
        assert_eq!(canvas.pixel(0, 0), TRANSFORMED);
        assert_eq!(canvas.pixel(9, 4), TRANSFORMED);
        assert_eq!(canvas.pixel(9, 9), BACKGROUND);
    }

    #[test]
    fn test_out_of_bounds_line_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.line(-20.0, -20.0, 30.0, 30.0, TRANSFORMED);
        // No panic, and the visible diagonal got drawn
        assert_eq!(canvas.pixel(2, 2), TRANSFORMED);
    }

    #[test]
    fn test_panel_draws_both_shapes() {
        let scene = Scene::new(
            "translate",
            Shape2::unit_square(),
            TransformMatrix::Planar(Transform2::translation(2.0, 1.0).unwrap()),
        )
        .unwrap();
        let panel = render_panel(&scene, 200, 200).unwrap();

        let mut saw_original = false;
        let mut saw_transformed = false;
        for pixel in panel.pixels() {
            saw_original |= *pixel == ORIGINAL;
            saw_transformed |= *pixel == TRANSFORMED;
        }
        assert!(saw_original);
        assert!(saw_transformed);
    }

    #[test]
    fn test_spatial_panel_renders() {
        let scenes = demos::spatial_gallery().unwrap();
        let panel = render_panel(&scenes[0], 200, 200).unwrap();
        assert!(panel.pixels().any(|p| *p == TRANSFORMED));
    }

    #[test]
    fn test_contact_sheet_dimensions() {
        let scenes = demos::planar_gallery().unwrap();
        let sheet = contact_sheet(&scenes, 3, 100, 80).unwrap();
        // 3 columns x 2 rows with 10px margins
        assert_eq!(sheet.width(), 3 * 100 + 4 * 10);
        assert_eq!(sheet.height(), 2 * 80 + 3 * 10);
    }

    #[test]
    fn test_contact_sheet_rejects_empty_input() {
        assert!(contact_sheet(&[], 3, 100, 100).is_err());
        let scenes = demos::planar_gallery().unwrap();
        assert!(contact_sheet(&scenes, 0, 100, 100).is_err());
    }
}
