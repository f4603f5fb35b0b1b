//! Owned RGBA software surface.
//!
//! Everything the engine draws lands in a `Pixmap`: the logical
//! low-resolution screen, sliced animation frames, font glyphs, composed
//! UI buttons. Alpha 0 means transparent; blits skip transparent pixels.

use bytemuck::{Pod, Zeroable};

use crate::core::rect::Rect;

/// 8-bit RGBA pixel. `a == 0` is fully transparent; blending is on/off,
/// not fractional.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const RED: Rgba = Rgba::new(255, 0, 0, 255);
    pub const GREEN: Rgba = Rgba::new(0, 255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Compare color channels only, ignoring alpha. Color-key matching uses
    /// this so keys expressed as RGB triples match regardless of source alpha.
    pub fn same_color(&self, other: &Rgba) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// A width×height grid of [`Rgba`] pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Pixmap {
    /// Create a fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; (width * height) as usize],
        }
    }

    /// Wrap an existing pixel buffer. `None` when the buffer length does not
    /// match `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
        if pixels.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Set a pixel; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    /// Fill the whole surface with one color.
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let (x0, y0, x1, y1) = self.clip_span(rect);
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels[(y * self.width + x) as usize] = color;
            }
        }
    }

    /// Draw a 1-pixel rectangle outline, clipped to the surface.
    pub fn outline_rect(&mut self, rect: Rect, color: Rgba) {
        let (x0, y0, x1, y1) = self.clip_span(rect);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for x in x0..x1 {
            self.pixels[(y0 * self.width + x) as usize] = color;
            self.pixels[((y1 - 1) * self.width + x) as usize] = color;
        }
        for y in y0..y1 {
            self.pixels[(y * self.width + x0) as usize] = color;
            self.pixels[(y * self.width + x1 - 1) as usize] = color;
        }
    }

    /// Blit `src` with its top-left corner at (`x`, `y`), skipping
    /// transparent source pixels. Negative positions clip.
    pub fn blit(&mut self, src: &Pixmap, x: i32, y: i32) {
        self.blit_impl(src, x, y, false);
    }

    /// Like [`Pixmap::blit`] but mirrored horizontally. The source is read
    /// back-to-front; it is never modified.
    pub fn blit_flipped_h(&mut self, src: &Pixmap, x: i32, y: i32) {
        self.blit_impl(src, x, y, true);
    }

    fn blit_impl(&mut self, src: &Pixmap, x: i32, y: i32, flip: bool) {
        for sy in 0..src.height {
            let dy = y + sy as i32;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width {
                let read_x = if flip { src.width - 1 - sx } else { sx };
                let pixel = src.pixels[(sy * src.width + read_x) as usize];
                if pixel.a == 0 {
                    continue;
                }
                let dx = x + sx as i32;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                self.pixels[(dy as u32 * self.width + dx as u32) as usize] = pixel;
            }
        }
    }

    /// Copy a `w`×`h` region of `src` starting at (`sx`, `sy`) into a new
    /// pixmap. Out-of-bounds source pixels stay transparent.
    pub fn region(&self, sx: u32, sy: u32, w: u32, h: u32) -> Pixmap {
        let mut out = Pixmap::new(w, h);
        for y in 0..h {
            for x in 0..w {
                if let Some(pixel) = self.get(sx + x, sy + y) {
                    out.set(x, y, pixel);
                }
            }
        }
        out
    }

    /// Nearest-neighbor scale into `dst`. `dst` dimensions must be an
    /// integer multiple of this pixmap's; anything else is a programming
    /// error in the host's surface setup and panics in debug builds only.
    pub fn scale_into(&self, dst: &mut Pixmap) {
        debug_assert_eq!(dst.width % self.width, 0);
        debug_assert_eq!(dst.height % self.height, 0);
        let factor_x = (dst.width / self.width).max(1);
        let factor_y = (dst.height / self.height).max(1);
        for y in 0..dst.height {
            let sy = (y / factor_y).min(self.height - 1);
            for x in 0..dst.width {
                let sx = (x / factor_x).min(self.width - 1);
                dst.pixels[(y * dst.width + x) as usize] =
                    self.pixels[(sy * self.width + sx) as usize];
            }
        }
    }

    /// Nearest-neighbor scale by an integer factor into a new pixmap.
    pub fn scaled(&self, factor: u32) -> Pixmap {
        let factor = factor.max(1);
        let mut out = Pixmap::new(self.width * factor, self.height * factor);
        self.scale_into(&mut out);
        out
    }

    /// Replace every pixel matching `from` (color channels only) with `to`.
    pub fn replace_color(&mut self, from: Rgba, to: Rgba) {
        for pixel in &mut self.pixels {
            if pixel.same_color(&from) {
                *pixel = to;
            }
        }
    }

    /// Make every pixel matching one of `keys` (color channels only)
    /// transparent. Baked once at load/slice time.
    pub fn apply_color_keys(&mut self, keys: &[Rgba]) {
        for pixel in &mut self.pixels {
            if keys.iter().any(|k| pixel.same_color(k)) {
                *pixel = Rgba::TRANSPARENT;
            }
        }
    }

    /// Raw byte view (RGBA order, row-major) for presentation backends.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Clip a rect to this surface, returning half-open pixel spans.
    fn clip_span(&self, rect: Rect) -> (u32, u32, u32, u32) {
        let x0 = rect.x.max(0.0) as u32;
        let y0 = rect.y.max(0.0) as u32;
        let x1 = (rect.right().max(0.0) as u32).min(self.width);
        let y1 = (rect.bottom().max(0.0) as u32).min(self.height);
        (x0.min(self.width), y0.min(self.height), x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pixmap_is_transparent() {
        let p = Pixmap::new(4, 4);
        assert_eq!(p.get(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(p.get(4, 0), None);
    }

    #[test]
    fn fill_rect_clips() {
        let mut p = Pixmap::new(4, 4);
        p.fill_rect(Rect::new(2.0, 2.0, 10.0, 10.0), Rgba::RED);
        assert_eq!(p.get(2, 2), Some(Rgba::RED));
        assert_eq!(p.get(3, 3), Some(Rgba::RED));
        assert_eq!(p.get(1, 1), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut dst = Pixmap::new(4, 4);
        dst.fill(Rgba::GREEN);
        let mut src = Pixmap::new(2, 1);
        src.set(0, 0, Rgba::RED);
        // src(1,0) stays transparent
        dst.blit(&src, 1, 1);
        assert_eq!(dst.get(1, 1), Some(Rgba::RED));
        assert_eq!(dst.get(2, 1), Some(Rgba::GREEN));
    }

    #[test]
    fn flipped_blit_mirrors_without_mutating_source() {
        let mut src = Pixmap::new(2, 1);
        src.set(0, 0, Rgba::RED);
        src.set(1, 0, Rgba::GREEN);
        let original = src.clone();

        let mut dst = Pixmap::new(2, 1);
        dst.blit_flipped_h(&src, 0, 0);
        assert_eq!(dst.get(0, 0), Some(Rgba::GREEN));
        assert_eq!(dst.get(1, 0), Some(Rgba::RED));
        assert_eq!(src, original);
    }

    #[test]
    fn negative_blit_position_clips() {
        let mut dst = Pixmap::new(2, 2);
        let mut src = Pixmap::new(2, 2);
        src.fill(Rgba::RED);
        dst.blit(&src, -1, -1);
        assert_eq!(dst.get(0, 0), Some(Rgba::RED));
        assert_eq!(dst.get(1, 1), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn region_copies_subrect() {
        let mut p = Pixmap::new(4, 4);
        p.set(2, 1, Rgba::RED);
        let r = p.region(2, 1, 2, 2);
        assert_eq!(r.get(0, 0), Some(Rgba::RED));
        assert_eq!(r.get(1, 1), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn integer_scale_doubles_pixels() {
        let mut p = Pixmap::new(2, 1);
        p.set(0, 0, Rgba::RED);
        p.set(1, 0, Rgba::GREEN);
        let scaled = p.scaled(2);
        assert_eq!(scaled.width(), 4);
        assert_eq!(scaled.get(0, 0), Some(Rgba::RED));
        assert_eq!(scaled.get(1, 1), Some(Rgba::RED));
        assert_eq!(scaled.get(2, 0), Some(Rgba::GREEN));
        assert_eq!(scaled.get(3, 1), Some(Rgba::GREEN));
    }

    #[test]
    fn color_keys_become_transparent() {
        let mut p = Pixmap::new(2, 1);
        p.set(0, 0, Rgba::opaque(255, 0, 255));
        p.set(1, 0, Rgba::RED);
        p.apply_color_keys(&[Rgba::opaque(255, 0, 255)]);
        assert_eq!(p.get(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(p.get(1, 0), Some(Rgba::RED));
    }

    #[test]
    fn byte_view_is_rgba_order() {
        let mut p = Pixmap::new(1, 1);
        p.set(0, 0, Rgba::new(1, 2, 3, 4));
        assert_eq!(p.as_bytes(), &[1, 2, 3, 4]);
    }
}
