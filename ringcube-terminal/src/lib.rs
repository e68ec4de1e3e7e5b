/// Terminal frontend for the rotating-cube demo
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use log::{debug, info};
use ringcube_core::{content, Camera, Scene, Viewport};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::WireframeRenderer;

/// Frame pacing target, matching a typical display refresh
const TARGET_FPS: u64 = 60;

/// Main application struct for the terminal demo.
///
/// Owns the scene, the camera, and the drawing surface; `run` is the whole
/// lifecycle: enter the alternate screen, loop until quit, restore the
/// terminal.
pub struct TerminalApp {
    scene: Scene,
    camera: Camera,
    renderer: WireframeRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    /// Size the drawing surface from the terminal and frame the demo scene.
    ///
    /// The size is read once; later terminal resizes are ignored.
    pub fn new(scene: Scene) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let viewport = Viewport::new(width as u32, height as u32);
        debug!("viewport sized to {}x{}", viewport.width, viewport.height);

        Ok(Self {
            scene,
            camera: content::build_camera(viewport),
            renderer: WireframeRenderer::new(viewport),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Restore the terminal even when the loop errored
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;
        info!("terminal restored");

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / TARGET_FPS);

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

            // Wait out the remainder of the frame
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

    /// The terminal stands in for the browser tab; q/Esc is "close the tab"
    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        for mesh in self.scene.meshes_mut() {
            content::advance(mesh);
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.clear();
        for mesh in self.scene.meshes() {
            self.renderer.render_mesh(mesh, &self.camera);
        }

        let color = self
            .scene
            .meshes()
            .first()
            .map(|mesh| mesh.material().color())
            .unwrap_or(ringcube_core::Color { r: 255, g: 255, b: 255 });

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut stdout, color)?;

        // Status overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!("ringcube | FPS: {:.1} | Q=Quit", self.fps)),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
