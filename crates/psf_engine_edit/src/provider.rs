//! Interfaces the interaction controller consumes from its host

use crate::GlyphBitmap;

/// Source of the glyph being edited.
///
/// The controller queries the provider on every event but never creates or
/// replaces glyphs itself. `current_glyph`/`current_glyph_mut` are only called
/// after `has_glyph` returned `true`.
pub trait GlyphProvider {
    fn has_glyph(&self) -> bool;

    fn current_glyph(&self) -> &GlyphBitmap;

    fn current_glyph_mut(&mut self) -> &mut GlyphBitmap;

    fn glyph_width(&self) -> i32;

    fn glyph_height(&self) -> i32;
}

/// Receives "something changed, draw again" notifications
pub trait RepaintScheduler {
    fn request_repaint(&mut self);
}

impl<F: FnMut()> RepaintScheduler for F {
    fn request_repaint(&mut self) {
        self()
    }
}

/// Scheduler that only counts requests; used by headless hosts and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepaintCounter {
    count: usize,
}

impl RepaintCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Return the number of requests since the last call and reset it
    pub fn take(&mut self) -> usize {
        std::mem::take(&mut self.count)
    }
}

impl RepaintScheduler for RepaintCounter {
    fn request_repaint(&mut self) {
        self.count += 1;
    }
}
