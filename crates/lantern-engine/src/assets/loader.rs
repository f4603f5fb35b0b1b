//! Image loading seam and manifest-driven asset construction.

use crate::assets::manifest::{AssetManifest, FontEntry};
use crate::components::animation::{slice_sheet, AnimationPlayer, AnimationRegistry, FrameDurations};
use crate::error::EngineError;
use crate::renderer::pixmap::{Pixmap, Rgba};
use crate::text::Font;

/// Decodes an image file into a [`Pixmap`]. The engine core stays free of
/// codec and filesystem concerns; backends supply the implementation.
pub trait ImageLoader {
    fn load(&self, path: &str) -> Result<Pixmap, EngineError>;
}

/// Build an [`AnimationRegistry`] from every sheet in the manifest. Each
/// sheet registers under its manifest key; nothing is selected yet.
pub fn load_animations(
    manifest: &AssetManifest,
    loader: &dyn ImageLoader,
) -> Result<AnimationRegistry, EngineError> {
    let mut registry = AnimationRegistry::new();
    for (tag, sheet) in &manifest.sheets {
        let image = loader.load(&sheet.path)?;
        let keys: Vec<Rgba> = sheet
            .color_keys
            .iter()
            .map(|&[r, g, b]| Rgba::opaque(r, g, b))
            .collect();
        let frames = slice_sheet(
            &image,
            sheet.frame_width,
            sheet.frame_height,
            sheet.cols,
            sheet.rows,
            &keys,
        );
        let durations = match &sheet.durations {
            Some(table) => FrameDurations::per_frame(table.clone(), sheet.duration),
            None => FrameDurations::uniform(sheet.duration),
        };
        let player = AnimationPlayer::new(frames, durations)?;
        log::debug!(
            "loaded sheet '{tag}' from {}: {} frames",
            sheet.path,
            player.frame_count()
        );
        registry.insert(tag.clone(), player)?;
    }
    Ok(registry)
}

/// Load and colorize one font strip.
pub fn load_font(entry: &FontEntry, loader: &dyn ImageLoader) -> Result<Font, EngineError> {
    let strip = loader.load(&entry.path)?;
    let [r, g, b] = entry.color;
    Font::from_strip(&strip, Rgba::opaque(r, g, b))
}
