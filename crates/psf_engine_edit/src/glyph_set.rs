//! In-memory font: a fixed number of equally sized glyphs with an optional
//! current selection.

use crate::{EditError, GlyphBitmap, GlyphProvider, Result, codepoint_name};

pub struct GlyphSet {
    width: i32,
    height: i32,
    glyphs: Vec<GlyphBitmap>,
    selected: Option<usize>,
    is_dirty: bool,
}

impl GlyphSet {
    /// Create `count` empty glyphs of `width × height`; nothing is selected.
    pub fn new(width: i32, height: i32, count: usize) -> Result<Self> {
        let glyph = GlyphBitmap::new(width, height)?;
        Ok(Self {
            width,
            height,
            glyphs: vec![glyph; count],
            selected: None,
            is_dirty: false,
        })
    }

    /// Build a set from existing glyphs, which must all share one size.
    pub fn from_glyphs(glyphs: Vec<GlyphBitmap>) -> Result<Self> {
        let (width, height) = glyphs.first().map_or((0, 0), |g| (g.width(), g.height()));
        if width <= 0 || glyphs.iter().any(|g| g.width() != width || g.height() != height) {
            return Err(EditError::InvalidGlyphSize { width, height });
        }
        Ok(Self {
            width,
            height,
            glyphs,
            selected: None,
            is_dirty: false,
        })
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn glyph(&self, index: usize) -> Option<&GlyphBitmap> {
        self.glyphs.get(index)
    }

    pub fn glyph_mut(&mut self, index: usize) -> Option<&mut GlyphBitmap> {
        let glyph = self.glyphs.get_mut(index)?;
        self.is_dirty = true;
        Some(glyph)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.glyphs.len() {
            return Err(EditError::GlyphIndexOutOfRange {
                index,
                count: self.glyphs.len(),
            });
        }
        log::debug!("select glyph {index}");
        self.selected = Some(index);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Name of the selected glyph's codepoint (index = codepoint), empty if
    /// nothing is selected or the codepoint has no name.
    pub fn selected_glyph_name(&self) -> &'static str {
        self.selected.map_or("", |index| codepoint_name(index as u32))
    }

    /// Whether any glyph was handed out for modification since the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    fn selected_slot(&self) -> usize {
        match self.selected {
            Some(index) => index,
            None => panic!("no glyph selected"),
        }
    }
}

impl GlyphProvider for GlyphSet {
    fn has_glyph(&self) -> bool {
        self.selected.is_some()
    }

    fn current_glyph(&self) -> &GlyphBitmap {
        &self.glyphs[self.selected_slot()]
    }

    fn current_glyph_mut(&mut self) -> &mut GlyphBitmap {
        let slot = self.selected_slot();
        self.is_dirty = true;
        &mut self.glyphs[slot]
    }

    fn glyph_width(&self) -> i32 {
        self.width
    }

    fn glyph_height(&self) -> i32 {
        self.height
    }
}
