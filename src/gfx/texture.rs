//! Texture loading for body surfaces.
//!
//! The scene only ever stores [`TextureHandle`]s. Decoded pixels stay with the
//! loader that produced them, and a renderer looks them up by handle when it
//! uploads to the GPU.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Opaque reference to a decoded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to decode texture {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Resolves texture identifiers to handles.
///
/// A missing or undecodable asset yields `None`; the body is then drawn with
/// its flat colour.
pub trait TextureLoader {
    fn load(&mut self, path: &str) -> Option<TextureHandle>;

    /// Decoded pixels for a handle this loader returned, if it keeps them.
    fn get(&self, _handle: TextureHandle) -> Option<&TextureData> {
        None
    }
}

/// Loader used when textures are disabled at startup.
#[derive(Debug, Default)]
pub struct NullTextureLoader;

impl TextureLoader for NullTextureLoader {
    fn load(&mut self, _path: &str) -> Option<TextureHandle> {
        None
    }
}

/// RGBA8 pixels, rows ordered bottom to top.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decodes image files from disk with the `image` crate.
#[derive(Debug)]
pub struct ImageTextureLoader {
    root: PathBuf,
    textures: Vec<TextureData>,
    by_path: HashMap<String, TextureHandle>,
}

impl ImageTextureLoader {
    /// Relative texture paths are resolved against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            textures: Vec::new(),
            by_path: HashMap::new(),
        }
    }

    pub fn decode(path: &Path) -> Result<TextureData, TextureError> {
        let image = image::open(path).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = image.flipv().to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(TextureData {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl TextureLoader for ImageTextureLoader {
    fn load(&mut self, path: &str) -> Option<TextureHandle> {
        if let Some(handle) = self.by_path.get(path) {
            return Some(*handle);
        }

        let full = self.root.join(path);
        match Self::decode(&full) {
            Ok(data) => {
                let handle = TextureHandle(self.textures.len() as u32);
                log::debug!(
                    "Loaded texture {} ({}x{})",
                    full.display(),
                    data.width,
                    data.height
                );
                self.textures.push(data);
                self.by_path.insert(path.to_string(), handle);
                Some(handle)
            }
            Err(err) => {
                log::warn!("{}; drawing untextured", err);
                None
            }
        }
    }

    fn get(&self, handle: TextureHandle) -> Option<&TextureData> {
        self.textures.get(handle.0 as usize)
    }
}
