//! PNG decoding into engine surfaces.

use std::path::PathBuf;

use lantern_engine::{EngineError, ImageLoader, Pixmap, Rgba};

/// Loads PNG files from a root directory, resolving manifest paths against
/// it.
pub struct PngLoader {
    root: PathBuf,
}

impl PngLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageLoader for PngLoader {
    fn load(&self, path: &str) -> Result<Pixmap, EngineError> {
        let full = self.root.join(path);
        let decoded = image::open(&full)
            .map_err(|err| EngineError::Asset(format!("{}: {err}", full.display())))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels: Vec<Rgba> = rgba
            .pixels()
            .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
            .collect();
        log::debug!("decoded {} ({width}x{height})", full.display());
        Pixmap::from_pixels(width, height, pixels)
            .ok_or_else(|| EngineError::Asset(format!("{}: size mismatch", full.display())))
    }
}
