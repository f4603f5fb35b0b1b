//! Bitmap font built from a glyph-strip image.
//!
//! The strip lays glyphs out left to right in [`CHARACTER_ORDER`], with a
//! 1-pixel column of [`SEPARATOR`] marking the end of each glyph in the
//! strip's top row. Glyph pixels drawn in [`GLYPH_MARKER`] are recolored to
//! the requested text color at build time; everything else in a glyph cell
//! becomes transparent. There is no implicit default font image: hosts load
//! a strip once (through the image-loader collaborator) and pass it in.

use std::collections::HashMap;

use crate::error::EngineError;
use crate::renderer::pixmap::{Pixmap, Rgba};

/// Glyph order in a font strip.
pub const CHARACTER_ORDER: [char; 83] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j',
    'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '.', '-',
    ',', ':', '+', '\'', '!', '?', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '(', ')',
    '/', '_', '=', '\\', '[', ']', '*', '"', '<', '>', ';',
];

/// Column color marking glyph boundaries in the strip's top row.
pub const SEPARATOR: Rgba = Rgba::opaque(127, 127, 127);

/// Color glyph pixels are drawn in; recolored to the text color.
pub const GLYPH_MARKER: Rgba = Rgba::opaque(255, 0, 0);

const GLYPH_SPACING: f32 = 2.0;
const SPACE_WIDTH: f32 = 4.0;

/// A fixed-advance bitmap font in one color.
#[derive(Debug, Clone)]
pub struct Font {
    glyphs: HashMap<char, Pixmap>,
    height: u32,
    spacing: f32,
    space_width: f32,
}

impl Font {
    /// Parse a glyph strip and colorize it. Fails if the strip holds fewer
    /// separators than [`CHARACTER_ORDER`] has characters.
    pub fn from_strip(strip: &Pixmap, color: Rgba) -> Result<Self, EngineError> {
        let mut glyphs = HashMap::new();
        let mut last_x: i64 = -1;
        let mut count = 0usize;

        for x in 0..strip.width() {
            let Some(pixel) = strip.get(x, 0) else { break };
            if !pixel.same_color(&SEPARATOR) {
                continue;
            }
            if count >= CHARACTER_ORDER.len() {
                break;
            }
            let start = (last_x + 1) as u32;
            let width = x.saturating_sub(start);
            let mut glyph = strip.region(start, 0, width, strip.height());
            glyph.apply_color_keys(&[Rgba::BLACK, SEPARATOR]);
            glyph.replace_color(GLYPH_MARKER, color);
            glyphs.insert(CHARACTER_ORDER[count], glyph);
            last_x = x as i64;
            count += 1;
        }

        if count < CHARACTER_ORDER.len() {
            return Err(EngineError::FontParse(format!(
                "strip has {count} glyphs, expected {}",
                CHARACTER_ORDER.len()
            )));
        }

        Ok(Self {
            glyphs,
            height: strip.height(),
            spacing: GLYPH_SPACING,
            space_width: SPACE_WIDTH,
        })
    }

    /// Pixel size of `text` rendered with this font: summed glyph advances
    /// (glyph width + spacing), fixed space width, strip height.
    pub fn measure(&self, text: &str) -> (f32, f32) {
        let mut width = 0.0;
        let mut height = 0.0;
        for c in text.chars() {
            if c == ' ' {
                width += self.space_width;
                continue;
            }
            if let Some(glyph) = self.glyphs.get(&c) {
                width += glyph.width() as f32 + self.spacing;
                height = self.height as f32;
            }
        }
        (width, height)
    }

    /// Blit `text` left to right starting at (`x`, `y`), using the same
    /// advance as [`Font::measure`]. Characters without a glyph are skipped
    /// (logged at debug level); the frame never aborts over a missing glyph.
    pub fn render(&self, screen: &mut Pixmap, text: &str, x: i32, y: i32) {
        let mut cursor = 0.0f32;
        for c in text.chars() {
            if c == ' ' {
                cursor += self.space_width;
                continue;
            }
            match self.glyphs.get(&c) {
                Some(glyph) => {
                    screen.blit(glyph, x + cursor as i32, y);
                    cursor += glyph.width() as f32 + self.spacing;
                }
                None => log::debug!("no glyph for {c:?}; skipping"),
            }
        }
    }

    pub fn line_height(&self) -> u32 {
        self.height
    }
}
