/// ASCII wireframe rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use ringcube_core::{Camera, Mesh, Triangle, Viewport};
use std::io::Write;

/// Glyph used for wireframe lines; the material color does the rest
const LINE_GLYPH: char = '#';

/// Wireframe renderer that converts triangle edges to terminal characters.
///
/// The buffers are sized once from the viewport and never resized.
pub struct WireframeRenderer {
    viewport: Viewport,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl WireframeRenderer {
    pub fn new(viewport: Viewport) -> Self {
        let size = (viewport.width * viewport.height) as usize;
        Self {
            viewport,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.char_buffer[i] = ' ';
        }
    }

    /// Count of cells currently holding a wireframe character
    pub fn occupied_cells(&self) -> usize {
        self.char_buffer.iter().filter(|c| **c != ' ').count()
    }

    pub fn render_mesh(&mut self, mesh: &Mesh, camera: &Camera) {
        let model = mesh.model_matrix();
        for triangle in &mesh.geometry().triangles {
            self.render_triangle(triangle, &model, camera);
        }
    }

    fn render_triangle(
        &mut self,
        triangle: &Triangle,
        model_matrix: &nalgebra::Matrix4<f32>,
        camera: &Camera,
    ) {
        let mut screen = [(0.0_f32, 0.0_f32, 0.0_f32); 3];
        for (i, vertex) in triangle.vertices.iter().enumerate() {
            match camera.project_to_screen(&vertex.position, model_matrix, self.viewport) {
                Some(coords) => screen[i] = coords,
                // Whole triangle is dropped when any vertex clips
                None => return,
            }
        }

        self.plot_line(screen[0], screen[1]);
        self.plot_line(screen[1], screen[2]);
        self.plot_line(screen[2], screen[0]);
    }

    /// Rasterize one edge by stepping in screen space, interpolating depth
    fn plot_line(&mut self, a: (f32, f32, f32), b: (f32, f32, f32)) {
        let dx = b.0 - a.0;
        let dy = b.1 - a.1;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let x = a.0 + dx * t;
            let y = a.1 + dy * t;
            let depth = a.2 + (b.2 - a.2) * t;
            self.plot(x as i32, y as i32, depth);
        }
    }

    fn plot(&mut self, x: i32, y: i32, depth: f32) {
        if x < 0 || y < 0 || x >= self.viewport.width as i32 || y >= self.viewport.height as i32 {
            return;
        }

        let idx = y as usize * self.viewport.width as usize + x as usize;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = LINE_GLYPH;
        }
    }

    /// Write the buffer to the terminal in the mesh's material color
    pub fn draw<W: Write>(&self, writer: &mut W, color: ringcube_core::Color) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }))?;
        for y in 0..self.viewport.height as usize {
            for x in 0..self.viewport.width as usize {
                let idx = y * self.viewport.width as usize + x;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}
