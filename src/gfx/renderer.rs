use super::frame::Frame;
use super::texture::{TextureData, TextureHandle};

/// Draws frames built from scene state.
///
/// Implementations own every GPU resource, including textures referenced by
/// handle. Nothing flows back from the renderer into the scene.
pub trait Renderer {
    /// Called when the drawable surface changes size. A minimised window
    /// reports zero for either dimension.
    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Hands over decoded pixels once at startup. Frames refer to them by handle.
    fn upload_texture(&mut self, _handle: TextureHandle, _data: &TextureData) {}

    fn render(&mut self, frame: &Frame<'_>);
}

/// Renderer that only reports what it would draw.
///
/// Useful headless and for checking the draw list under `RUST_LOG=trace`.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames_rendered: u64,
    size: (u32, u32),
    textures: Vec<TextureHandle>,
    texture_bytes: usize,
    last_triangles: usize,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn textures(&self) -> &[TextureHandle] {
        &self.textures
    }

    pub fn texture_bytes(&self) -> usize {
        self.texture_bytes
    }

    /// Triangles the last frame would have submitted for the sun, bodies and rings.
    pub fn last_triangles(&self) -> usize {
        self.last_triangles
    }
}

impl Renderer for LogRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        log::debug!("Surface resized to {}x{}", width, height);
    }

    fn upload_texture(&mut self, handle: TextureHandle, data: &TextureData) {
        if self.textures.contains(&handle) {
            return;
        }
        log::debug!(
            "Texture {:?}: {}x{}, {} bytes",
            handle,
            data.width,
            data.height,
            data.pixels.len()
        );
        self.textures.push(handle);
        self.texture_bytes += data.pixels.len();
    }

    fn render(&mut self, frame: &Frame<'_>) {
        self.frames_rendered += 1;
        let meshes = frame.meshes;
        self.last_triangles = meshes.sphere.triangle_count() * (frame.bodies.len() + 1)
            + meshes.ring.triangle_count() * frame.rings.len();
        log::trace!(
            "Frame {}: eye ({:.1}, {:.1}, {:.1}), {} triangles, {} bodies, {} rings, {} orbits, {} asteroids, {} stars",
            self.frames_rendered,
            frame.view.eye.x,
            frame.view.eye.y,
            frame.view.eye.z,
            self.last_triangles,
            frame.bodies.len(),
            frame.rings.len(),
            frame.orbits.len(),
            frame.asteroids.len(),
            frame.stars.len(),
        );
    }
}
