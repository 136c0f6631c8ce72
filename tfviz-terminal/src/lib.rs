/// Terminal-based ASCII viewer for the transformation galleries
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use nalgebra::{Matrix4, Vector3};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tfviz_core::{Camera, Dim, Scene, Viewport};

pub mod renderer;

pub use renderer::WireRenderer;

/// Interactive view rotation around three axes (in radians)
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewSpin {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ViewSpin {
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rotation matrix applied ahead of the view matrix (Z, then Y, then X)
    pub fn matrix(&self) -> Matrix4<f32> {
        let rx = Matrix4::new_rotation(Vector3::new(self.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, self.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, self.z));
        rz * ry * rx
    }
}

/// Main application struct for browsing galleries in the terminal
pub struct TerminalApp {
    planar: Vec<Scene>,
    spatial: Vec<Scene>,
    gallery: Dim,
    index: usize,
    spin: ViewSpin,
    camera: Camera,
    viewport: Viewport,
    renderer: WireRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(planar: Vec<Scene>, spatial: Vec<Scene>, gallery: Dim) -> io::Result<Self> {
        if planar.is_empty() || spatial.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "galleries must not be empty",
            ));
        }
        let (width, height) = terminal::size()?;
        // World window matches the PNG panels so both front-ends agree
        let viewport = Viewport::new(-3.0, 4.0, -3.0, 4.0, width as u32, height as u32)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        Ok(Self {
            planar,
            spatial,
            gallery,
            index: 0,
            spin: ViewSpin {
                x: 0.3,
                y: 0.3,
                z: 0.0,
            },
            camera: Camera::new(width as u32, height as u32),
            viewport,
            renderer: WireRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    fn scenes(&self) -> &[Scene] {
        match self.gallery {
            Dim::Planar => &self.planar,
            Dim::Spatial => &self.spatial,
        }
    }

    fn current(&self) -> &Scene {
        &self.scenes()[self.index]
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Right | KeyCode::Char('n') => {
                    self.index = (self.index + 1) % self.scenes().len();
                    log::debug!("demo: {}", self.current().title());
                }
                KeyCode::Left | KeyCode::Char('p') => {
                    let len = self.scenes().len();
                    self.index = (self.index + len - 1) % len;
                    log::debug!("demo: {}", self.current().title());
                }
                KeyCode::Tab | KeyCode::Char('g') => {
                    self.gallery = match self.gallery {
                        Dim::Planar => Dim::Spatial,
                        Dim::Spatial => Dim::Planar,
                    };
                    self.index = 0;
                    log::debug!("gallery: {}", self.gallery);
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.spin.rotate(0.1, 0.0, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.spin.rotate(-0.1, 0.0, 0.0);
                }
                KeyCode::Char('a') => {
                    self.spin.rotate(0.0, -0.1, 0.0);
                }
                KeyCode::Char('d') => {
                    self.spin.rotate(0.0, 0.1, 0.0);
                }
                KeyCode::Char('e') => {
                    self.spin.rotate(0.0, 0.0, 0.1);
                }
                KeyCode::Char('r') => {
                    self.spin.rotate(0.0, 0.0, -0.1);
                }
                KeyCode::Char('0') => {
                    self.spin.reset();
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        // Gentle continuous spin makes the 3D overlays easier to read
        if self.gallery == Dim::Spatial {
            self.spin.rotate(0.0, 0.008, 0.0);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        let spin = match self.gallery {
            Dim::Planar => Matrix4::identity(),
            Dim::Spatial => self.spin.matrix(),
        };
        let scene = match self.gallery {
            Dim::Planar => &self.planar[self.index],
            Dim::Spatial => &self.spatial[self.index],
        };
        self.renderer
            .render_scene(scene, &spin, &self.camera, &self.viewport);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Header overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "TFViz | {} {}/{} | {} | FPS: {:.1}",
                self.gallery,
                self.index + 1,
                self.scenes().len(),
                self.current().title(),
                self.fps
            )),
            cursor::MoveTo(0, 1),
            SetForegroundColor(Color::DarkGrey),
            Print("Left/Right=Demo Tab=2D/3D WASD/E/R=Spin 0=Reset Q=Quit | original: blue +, transformed: red #"),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
