/// Camera and viewport utilities shared by the renderers
use nalgebra::{Matrix4, Point2, Point3, Vector3};

use crate::error::{ensure_finite, Error, Result};

/// Projection mode for 3D rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

/// Camera configuration for projecting spatial scenes
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Point3::new(4.0, 3.0, 8.0),
            target: Point3::new(0.5, 0.5, 0.5),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::PI / 4.0,
            aspect: width as f32 / height as f32,
            near: 0.1,
            far: 100.0,
            mode: ProjectionMode::Perspective,
        }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Create the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.mode {
            ProjectionMode::Perspective => {
                Matrix4::new_perspective(self.aspect, self.fov, self.near, self.far)
            }
            ProjectionMode::Orthographic => {
                let height = (self.position - self.target).norm();
                let width = height * self.aspect;
                Matrix4::new_orthographic(
                    -width / 2.0,
                    width / 2.0,
                    -height / 2.0,
                    height / 2.0,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Project a 3D point to screen space.
    ///
    /// `view_spin` is applied ahead of the view matrix so renderers can orbit
    /// the whole scene without touching its shapes. Returns None for points
    /// outside the clip volume; the third component is depth for z-buffering.
    pub fn project_to_screen(
        &self,
        point: &Point3<f32>,
        view_spin: &Matrix4<f32>,
        width: u32,
        height: u32,
    ) -> Option<(f32, f32, f32)> {
        let mvp = self.projection_matrix() * self.view_matrix() * view_spin;

        // transform_point performs the homogeneous divide
        let ndc = mvp.transform_point(point);

        // Points behind the camera flip through the divide and land back in
        // the x/y window, so depth has to be clipped as well.
        if ndc.x < -1.0 || ndc.x > 1.0 || ndc.y < -1.0 || ndc.y > 1.0 || ndc.z < -1.0 || ndc.z > 1.0
        {
            return None;
        }

        let screen_x = (ndc.x + 1.0) * 0.5 * width as f32;
        let screen_y = (1.0 - ndc.y) * 0.5 * height as f32;

        Some((screen_x, screen_y, ndc.z))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Maps a world-space rectangle onto screen pixels, y pointing up in world
/// space and down on screen. Both renderers share it so 2D panels agree on
/// axis scaling.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        ensure_finite("viewport", &[x_min, x_max, y_min, y_max])?;
        if x_min >= x_max || y_min >= y_max {
            return Err(Error::InvalidArgument {
                op: "viewport",
                reason: format!("degenerate world rectangle [{x_min}, {x_max}] x [{y_min}, {y_max}]"),
            });
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// World x-range covered by this viewport.
    pub fn x_range(&self) -> (f32, f32) {
        (self.x_min, self.x_max)
    }

    /// World y-range covered by this viewport.
    pub fn y_range(&self) -> (f32, f32) {
        (self.y_min, self.y_max)
    }

    /// Convert a world point to screen pixels.
    pub fn to_screen(&self, point: &Point2<f32>) -> (f32, f32) {
        let sx = (point.x - self.x_min) / (self.x_max - self.x_min) * self.width as f32;
        let sy = (1.0 - (point.y - self.y_min) / (self.y_max - self.y_min)) * self.height as f32;
        (sx, sy)
    }
}
