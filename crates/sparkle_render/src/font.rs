//! Font rasterization into a glyph atlas
//!
//! Glyphs are rasterized with fontdue on first use and packed into a
//! single-channel coverage texture. Text is drawn as one textured quad per
//! visible glyph.

use std::collections::HashMap;
use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use sparkle_core::TextAlign;
use sparkle_math::{Rect, Vec2};

/// Edge length of the atlas texture in texels
pub const ATLAS_SIZE: u32 = 512;

/// Empty texels kept around every packed glyph
const GLYPH_PADDING: u32 = 1;

/// Font loading error
#[derive(Debug)]
pub enum FontError {
    /// The font file could not be read
    Io { path: String, message: String },
    /// The bytes are not a usable font
    Parse(String),
}

impl std::fmt::Display for FontError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontError::Io { path, message } => write!(f, "Failed to read font '{}': {}", path, message),
            FontError::Parse(msg) => write!(f, "Failed to parse font: {}", msg),
        }
    }
}

impl std::error::Error for FontError {}

/// Where a rasterized glyph lives in the atlas
#[derive(Clone, Copy, Debug, PartialEq)]
struct AtlasSlot {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl AtlasSlot {
    /// Normalized texture coordinates: u0, v0, u1, v1
    fn uv(&self) -> [f32; 4] {
        let size = ATLAS_SIZE as f32;
        [
            self.x as f32 / size,
            self.y as f32 / size,
            (self.x + self.width) as f32 / size,
            (self.y + self.height) as f32 / size,
        ]
    }
}

/// A font at one pixel size, plus the atlas of the glyphs drawn so far
pub struct GlyphAtlas {
    font: fontdue::Font,
    /// Pixel size glyphs are rasterized at
    size: f32,
    ascent: f32,
    /// Negative, below the baseline
    descent: f32,
    pixels: Vec<u8>,
    /// None for glyphs with no coverage or that did not fit
    slots: HashMap<u16, Option<AtlasSlot>>,
    /// Shelf packer state
    shelf_x: u32,
    shelf_y: u32,
    shelf_height: u32,
    dirty: bool,
}

impl GlyphAtlas {
    pub fn from_bytes(bytes: &[u8], size: f32) -> Result<Self, FontError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontError::Parse(e.to_string()))?;
        let size = size.max(1.0);

        let (ascent, descent) = match font.horizontal_line_metrics(size) {
            Some(lm) => (lm.ascent, lm.descent),
            None => (size * 0.8, -size * 0.2),
        };

        Ok(Self {
            font,
            size,
            ascent,
            descent,
            pixels: vec![0; (ATLAS_SIZE * ATLAS_SIZE) as usize],
            slots: HashMap::new(),
            shelf_x: 0,
            shelf_y: 0,
            shelf_height: 0,
            dirty: true,
        })
    }

    /// Load a TrueType/OpenType font file
    pub fn load<P: AsRef<Path>>(path: P, size: f32) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| FontError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let atlas = Self::from_bytes(&bytes, size)?;
        log::info!("Loaded font {} at {}px", path.display(), atlas.size);
        Ok(atlas)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn line_height(&self) -> f32 {
        self.ascent - self.descent
    }

    /// Size of the text box: pen advance by line height
    pub fn measure(&self, text: &str) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }
        let mut width = 0.0;
        let mut previous = None;
        for c in text.chars() {
            if let Some(prev) = previous {
                width += self.font.horizontal_kern(prev, c, self.size).unwrap_or(0.0);
            }
            width += self.font.metrics(c, self.size).advance_width;
            previous = Some(c);
        }
        Vec2::new(width, self.line_height())
    }

    /// Top-left corner of the text box for an anchored position
    ///
    /// Left-aligned text sits on the baseline at `position`; centered text
    /// has its box centered on `position`.
    pub fn origin(&self, text: &str, position: Vec2, align: TextAlign) -> Vec2 {
        match align {
            TextAlign::Left => Vec2::new(position.x, position.y - self.ascent),
            TextAlign::Center => position - self.measure(text) / 2.0,
        }
    }

    /// Lay out `text` and emit the screen rectangle and atlas uv of every
    /// visible glyph, rasterizing glyphs not yet in the atlas
    pub fn layout(&mut self, text: &str, position: Vec2, align: TextAlign, mut emit: impl FnMut(Rect, [f32; 4])) {
        let origin = self.origin(text, position, align);

        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: origin.x,
            y: origin.y,
            ..LayoutSettings::default()
        });
        layout.append(&[&self.font], &TextStyle::new(text, self.size, 0));

        let placed: Vec<(u16, f32, f32)> = layout
            .glyphs()
            .iter()
            .filter(|g| g.width > 0 && g.height > 0)
            .map(|g| (g.key.glyph_index, g.x, g.y))
            .collect();

        for (glyph_index, x, y) in placed {
            if let Some(slot) = self.slot(glyph_index) {
                emit(
                    Rect::new(x, y, slot.width as f32, slot.height as f32),
                    slot.uv(),
                );
            }
        }
    }

    fn slot(&mut self, glyph_index: u16) -> Option<AtlasSlot> {
        if let Some(slot) = self.slots.get(&glyph_index) {
            return *slot;
        }

        let (metrics, coverage) = self.font.rasterize_indexed(glyph_index, self.size);
        let slot = if metrics.width == 0 || metrics.height == 0 {
            None
        } else {
            let slot = self.pack(metrics.width as u32, metrics.height as u32);
            match slot {
                Some(slot) => self.blit(slot, &coverage),
                None => log::warn!("Glyph atlas full, glyph {} not drawn", glyph_index),
            }
            slot
        };

        self.slots.insert(glyph_index, slot);
        slot
    }

    /// Reserve space on the current shelf, opening a new one when needed
    fn pack(&mut self, width: u32, height: u32) -> Option<AtlasSlot> {
        let padded_width = width + GLYPH_PADDING;
        let padded_height = height + GLYPH_PADDING;
        if padded_width > ATLAS_SIZE {
            return None;
        }

        if self.shelf_x + padded_width > ATLAS_SIZE {
            self.shelf_y += self.shelf_height;
            self.shelf_x = 0;
            self.shelf_height = 0;
        }
        if self.shelf_y + padded_height > ATLAS_SIZE {
            return None;
        }

        let slot = AtlasSlot {
            x: self.shelf_x,
            y: self.shelf_y,
            width,
            height,
        };
        self.shelf_x += padded_width;
        self.shelf_height = self.shelf_height.max(padded_height);
        Some(slot)
    }

    fn blit(&mut self, slot: AtlasSlot, coverage: &[u8]) {
        let width = slot.width as usize;
        for (row, src) in coverage.chunks_exact(width).enumerate() {
            let start = (slot.y as usize + row) * ATLAS_SIZE as usize + slot.x as usize;
            self.pixels[start..start + width].copy_from_slice(src);
        }
        self.dirty = true;
    }

    /// Coverage texels, row-major, `ATLAS_SIZE` per row
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether glyphs were added since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl std::fmt::Debug for GlyphAtlas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphAtlas")
            .field("size", &self.size)
            .field("glyphs", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");

    fn atlas() -> GlyphAtlas {
        GlyphAtlas::from_bytes(FONT, 16.0).unwrap()
    }

    fn quads(atlas: &mut GlyphAtlas, text: &str) -> Vec<(Rect, [f32; 4])> {
        let mut out = Vec::new();
        atlas.layout(text, Vec2::new(10.0, 40.0), TextAlign::Left, |r, uv| out.push((r, uv)));
        out
    }

    #[test]
    fn test_invalid_font_bytes() {
        let err = GlyphAtlas::from_bytes(&[0, 1, 2, 3], 16.0).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)));
    }

    #[test]
    fn test_missing_font_file() {
        let err = GlyphAtlas::load("does/not/exist.ttf", 16.0).unwrap_err();
        assert!(matches!(err, FontError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.ttf"));
    }

    #[test]
    fn test_measure() {
        let atlas = atlas();
        assert_eq!(atlas.measure(""), Vec2::ZERO);
        let one = atlas.measure("A");
        let two = atlas.measure("AB");
        assert!(one.x > 0.0);
        assert!(two.x > one.x);
        assert_eq!(one.y, atlas.line_height());
    }

    #[test]
    fn test_lowercase_differs_from_uppercase() {
        let mut atlas = atlas();
        let lower = quads(&mut atlas, "pretty cool");
        let upper = quads(&mut atlas, "PRETTY COOL");
        assert_eq!(lower.len(), upper.len());
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_accented_letters_have_their_own_glyph() {
        let mut atlas = atlas();
        let accented = quads(&mut atlas, "é");
        let question = quads(&mut atlas, "?");
        assert_eq!(accented.len(), 1);
        assert_ne!(accented[0].1, question[0].1);
        assert_eq!(quads(&mut atlas, "Très").len(), 4);
    }

    #[test]
    fn test_space_emits_nothing() {
        let mut atlas = atlas();
        assert!(quads(&mut atlas, "   ").is_empty());
    }

    #[test]
    fn test_glyphs_are_cached() {
        let mut atlas = atlas();
        assert!(atlas.take_dirty());
        let first = quads(&mut atlas, "aa");
        assert!(atlas.take_dirty());
        assert_eq!(first[0].1, first[1].1);

        quads(&mut atlas, "a");
        assert!(!atlas.take_dirty());
    }

    #[test]
    fn test_left_align_sits_on_baseline() {
        let mut atlas = atlas();
        let glyphs = quads(&mut atlas, "x");
        let rect = glyphs[0].0;
        // "x" has no descender, so its bottom is at the baseline
        assert!((rect.y + rect.height - 40.0).abs() <= 1.0);
        assert!(rect.x >= 10.0);
    }

    #[test]
    fn test_center_align() {
        let atlas = atlas();
        let size = atlas.measure("Hello!");
        let origin = atlas.origin("Hello!", Vec2::new(160.0, 116.0), TextAlign::Center);
        assert_eq!(origin, Vec2::new(160.0, 116.0) - size / 2.0);
    }

    #[test]
    fn test_uv_inside_atlas() {
        let mut atlas = atlas();
        for (_, uv) in quads(&mut atlas, "Welcome to Sparkle!") {
            assert!(uv[0] < uv[2] && uv[1] < uv[3]);
            assert!(uv.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn test_coverage_written_to_atlas() {
        let mut atlas = atlas();
        quads(&mut atlas, "W");
        assert!(atlas.pixels().iter().any(|&p| p > 0));
    }
}
