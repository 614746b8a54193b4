//! Single glyph bitmap
//!
//! A glyph is a fixed `width × height` grid of bits stored row-major.
//! Coordinates handed to the pixel accessors must already be inside the grid;
//! the interaction layer only produces such coordinates through the canvas
//! hit-test. An out-of-range coordinate is a caller bug and panics.

use crate::{EditError, Result};

/// Maximum glyph width in pixels
pub const MAX_GLYPH_WIDTH: i32 = 1024;

/// Maximum glyph height in pixels
pub const MAX_GLYPH_HEIGHT: i32 = 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: i32,
    height: i32,
    bits: Vec<bool>,
}

impl GlyphBitmap {
    /// Create an empty (all pixels off) glyph
    ///
    /// Both dimensions must be in `1..=MAX_GLYPH_WIDTH` / `1..=MAX_GLYPH_HEIGHT`.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if !(1..=MAX_GLYPH_WIDTH).contains(&width) || !(1..=MAX_GLYPH_HEIGHT).contains(&height) {
            return Err(EditError::InvalidGlyphSize { width, height });
        }
        let len = width.checked_mul(height).ok_or(EditError::InvalidGlyphSize { width, height })?;
        Ok(Self {
            width,
            height,
            bits: vec![false; len as usize],
        })
    }

    /// Create a glyph from rows of pixels (height × width), the layout
    /// `BitFontEditState` style glyph data uses.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut glyph = Self::new(i32::try_from(width).unwrap_or(i32::MAX), i32::try_from(height).unwrap_or(i32::MAX))?;
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(EditError::RaggedGlyphRow {
                    row: row_idx,
                    expected: width,
                    actual: row.len(),
                });
            }
            let start = row_idx * width;
            glyph.bits[start..start + width].copy_from_slice(row);
        }
        Ok(glyph)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            x >= 0 && x < self.width && y >= 0 && y < self.height,
            "glyph pixel ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        (y * self.width + x) as usize
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.bits[self.index(x, y)]
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, value: bool) {
        let idx = self.index(x, y);
        self.bits[idx] = value;
    }

    /// Flip a single pixel and return its new value
    pub fn toggle_pixel(&mut self, x: i32, y: i32) -> bool {
        let idx = self.index(x, y);
        self.bits[idx] = !self.bits[idx];
        self.bits[idx]
    }

    /// Number of pixels that are on
    pub fn count_set(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Render the glyph as text, one line per row
    pub fn to_ascii(&self, on: char, off: char) -> String {
        let mut result = String::with_capacity(self.bits.len() + self.height as usize);
        for row in self.bits.chunks(self.width as usize) {
            result.extend(row.iter().map(|&b| if b { on } else { off }));
            result.push('\n');
        }
        result
    }
}
