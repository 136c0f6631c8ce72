/// ASCII wireframe rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Matrix4;
use std::io::Write;
use tfviz_core::{Camera, Scene, Shape, Viewport};

/// Stroke style for one wireframe layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub ch: char,
    pub color: Color,
}

/// Original shape in blue, transformed in red, matching the plot colors.
pub const ORIGINAL_STROKE: Stroke = Stroke {
    ch: '+',
    color: Color::Blue,
};
pub const TRANSFORMED_STROKE: Stroke = Stroke {
    ch: '#',
    color: Color::Red,
};

/// Rasterizes wireframe scenes into a character grid with depth testing.
pub struct WireRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl WireRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = Color::Reset;
        }
    }

    /// Draw the scene's original and transformed shapes overlaid.
    ///
    /// The original is drawn first so the transformed shape wins cells the
    /// two share at equal depth.
    pub fn render_scene(
        &mut self,
        scene: &Scene,
        view_spin: &Matrix4<f32>,
        camera: &Camera,
        viewport: &Viewport,
    ) {
        self.render_shape(scene.original(), view_spin, camera, viewport, ORIGINAL_STROKE);
        self.render_shape(
            scene.transformed(),
            view_spin,
            camera,
            viewport,
            TRANSFORMED_STROKE,
        );
    }

    fn render_shape(
        &mut self,
        shape: &Shape,
        view_spin: &Matrix4<f32>,
        camera: &Camera,
        viewport: &Viewport,
        stroke: Stroke,
    ) {
        match shape {
            Shape::Planar(s) => {
                let vertices = s.vertices();
                for [a, b] in s.edges() {
                    let (x0, y0) = viewport.to_screen(&vertices[a]);
                    let (x1, y1) = viewport.to_screen(&vertices[b]);
                    self.line(x0, y0, 0.0, x1, y1, 0.0, stroke);
                }
            }
            Shape::Spatial(s) => {
                let vertices = s.vertices();
                for &[a, b] in s.edges() {
                    let pa = camera.project_to_screen(
                        &vertices[a],
                        view_spin,
                        self.width as u32,
                        self.height as u32,
                    );
                    let pb = camera.project_to_screen(
                        &vertices[b],
                        view_spin,
                        self.width as u32,
                        self.height as u32,
                    );
                    // Edges with a clipped endpoint are dropped whole
                    if let (Some((x0, y0, z0)), Some((x1, y1, z1))) = (pa, pb) {
                        self.line(x0, y0, z0, x1, y1, z1, stroke);
                    }
                }
            }
        }
    }

    /// Step along the longer axis, interpolating depth per cell.
    #[allow(clippy::too_many_arguments)]
    fn line(&mut self, x0: f32, y0: f32, z0: f32, x1: f32, y1: f32, z1: f32, stroke: Stroke) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0);

        let mut i = 0.0;
        while i <= steps {
            let t = i / steps;
            let x = (x0 + dx * t).round() as i32;
            let y = (y0 + dy * t).round() as i32;
            let z = z0 + (z1 - z0) * t;
            self.plot(x, y, z, stroke);
            i += 1.0;
        }
    }

    fn plot(&mut self, x: i32, y: i32, depth: f32, stroke: Stroke) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        if depth <= self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = stroke.ch;
            self.color_buffer[idx] = stroke.color;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    #[cfg(test)]
    fn cell(&self, x: usize, y: usize) -> (char, Color) {
        let idx = y * self.width + x;
        (self.char_buffer[idx], self.color_buffer[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfviz_core::{Shape2, Transform2, TransformMatrix};

    #[test]
    fn test_line_hits_endpoints() {
        let mut renderer = WireRenderer::new(10, 10);
        renderer.line(0.0, 0.0, 0.0, 9.0, 9.0, 0.0, TRANSFORMED_STROKE);
        assert_eq!(renderer.cell(0, 0).0, '#');
        assert_eq!(renderer.cell(9, 9).0, '#');
        // Off-diagonal cells stay empty
        assert_eq!(renderer.cell(9, 0).0, ' ');
    }

    #[test]
    fn test_nearer_stroke_wins_cell() {
        let mut renderer = WireRenderer::new(4, 1);
        renderer.line(0.0, 0.0, 0.8, 3.0, 0.0, 0.8, ORIGINAL_STROKE);
        renderer.line(0.0, 0.0, 0.2, 3.0, 0.0, 0.2, TRANSFORMED_STROKE);
        assert_eq!(renderer.cell(1, 0), ('#', Color::Red));

        renderer.clear();
        renderer.line(0.0, 0.0, 0.2, 3.0, 0.0, 0.2, TRANSFORMED_STROKE);
        renderer.line(0.0, 0.0, 0.8, 3.0, 0.0, 0.8, ORIGINAL_STROKE);
        assert_eq!(renderer.cell(1, 0), ('#', Color::Red));
    }

    #[test]
    fn test_out_of_bounds_plot_is_ignored() {
        let mut renderer = WireRenderer::new(4, 4);
        renderer.line(-10.0, -10.0, 0.0, -1.0, -1.0, 0.0, ORIGINAL_STROKE);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(renderer.cell(x, y).0, ' ');
            }
        }
    }

    #[test]
    fn test_planar_scene_draws_both_shapes() {
        let scene = Scene::new(
            "translate",
            Shape2::unit_square(),
            TransformMatrix::Planar(Transform2::translation(2.0, 2.0).unwrap()),
        )
        .unwrap();
        let viewport = Viewport::new(-1.0, 4.0, -1.0, 4.0, 40, 40).unwrap();
        let camera = Camera::new(40, 40);
        let mut renderer = WireRenderer::new(40, 40);
        renderer.render_scene(&scene, &Matrix4::identity(), &camera, &viewport);

        let drawn: Vec<(char, Color)> = (0..40 * 40)
            .map(|i| (renderer.char_buffer[i], renderer.color_buffer[i]))
            .filter(|(c, _)| *c != ' ')
            .collect();
        assert!(drawn.iter().any(|(_, c)| *c == Color::Blue));
        assert!(drawn.iter().any(|(_, c)| *c == Color::Red));
    }
}
