//! Texture cache - CPU-side image loading and handle management
//!
//! The cache decodes image files once and hands out opaque [`TextureHandle`]s
//! for the presentation backend to draw with. It is an explicitly constructed
//! object passed by reference into whoever needs it; there is no process-wide
//! singleton. Loading is idempotent per path: loading the same file twice
//! returns the cached handle.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

new_key_type! {
    /// Opaque handle to a loaded texture
    pub struct TextureHandle;
}

/// Decoded texture data (RGBA8)
pub struct Texture {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Tightly packed RGBA8 pixel data
    pub pixels: Vec<u8>,
}

/// Texture cache errors
#[derive(Debug, Error)]
pub enum AssetError {
    /// The image file could not be read
    #[error("failed to read image file {path}: {source}")]
    Io {
        /// Path that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The image file could not be decoded
    #[error("failed to decode image {path}: {source}")]
    Decode {
        /// Path that failed to decode
        path: PathBuf,
        /// Underlying decoder error
        #[source]
        source: image::ImageError,
    },
}

/// Texture cache
///
/// Owned by the [`Application`](crate::Application) and shared by reference
/// with scenes during startup. Handles stay valid until [`shutdown`]
/// (nothing is evicted during a run).
///
/// [`shutdown`]: TextureCache::shutdown
#[derive(Default)]
pub struct TextureCache {
    textures: SlotMap<TextureHandle, Texture>,
    by_path: HashMap<PathBuf, TextureHandle>,
}

impl TextureCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an image file, returning the cached handle if already loaded
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<TextureHandle, AssetError> {
        let path = path.as_ref();
        if let Some(&handle) = self.by_path.get(path) {
            return Ok(handle);
        }

        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = decoded.to_rgba8();
        let texture = Texture {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        };

        let handle = self.textures.insert(texture);
        self.by_path.insert(path.to_path_buf(), handle);
        log::debug!("Loaded texture {} -> {:?}", path.display(), handle);
        Ok(handle)
    }

    /// Load an image file, logging and returning `None` on failure
    ///
    /// A missing or unreadable image is not fatal: the entity simply renders
    /// nothing and the simulation continues unaffected.
    pub fn load_logged(&mut self, path: impl AsRef<Path>) -> Option<TextureHandle> {
        match self.load(path) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    /// Get the handle for an already-loaded path
    pub fn get(&self, path: impl AsRef<Path>) -> Option<TextureHandle> {
        self.by_path.get(path.as_ref()).copied()
    }

    /// Get the decoded texture data behind a handle
    pub fn texture(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle)
    }

    /// Number of loaded textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Release all loaded textures
    pub fn shutdown(&mut self) {
        log::info!("Releasing {} cached textures", self.textures.len());
        self.textures.clear();
        self.by_path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_png(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("platform_engine_{}_{}.png", std::process::id(), name));
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
        img.save(&path).expect("write test png");
        path
    }

    #[test]
    fn test_load_is_idempotent_per_path() {
        let path = temp_png("idempotent");
        let mut cache = TextureCache::new();

        let first = cache.load(&path).unwrap();
        let second = cache.load(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_get_unknown_path_is_none() {
        let cache = TextureCache::new();
        assert!(cache.get("no/such/file.png").is_none());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let mut cache = TextureCache::new();
        match cache.load("no/such/file.png") {
            Err(AssetError::Io { .. }) => {}
            other => panic!("expected Io error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_logged_missing_file_is_none() {
        let mut cache = TextureCache::new();
        assert!(cache.load_logged("no/such/file.png").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_texture_data_round_trip() {
        let path = temp_png("data");
        let mut cache = TextureCache::new();

        let handle = cache.load(&path).unwrap();
        let texture = cache.texture(handle).unwrap();
        assert_eq!(texture.width, 2);
        assert_eq!(texture.height, 2);
        assert_eq!(texture.pixels.len(), 16);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_shutdown_releases_handles() {
        let path = temp_png("shutdown");
        let mut cache = TextureCache::new();

        let handle = cache.load(&path).unwrap();
        cache.shutdown();
        assert!(cache.texture(handle).is_none());
        assert!(cache.get(&path).is_none());

        let _ = std::fs::remove_file(path);
    }
}
