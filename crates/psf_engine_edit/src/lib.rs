//! Editing model for PC Screen Font style bitmap glyphs.
//!
//! The crate contains everything needed to paint a glyph with a pointer,
//! independent of any GUI toolkit:
//! - [`GlyphBitmap`] - the bit grid of a single glyph
//! - [`CanvasGeometry`] - maps between widget pixels and glyph cells
//! - [`InteractionController`] - turns pointer, wheel and resize events into
//!   bitmap mutations and geometry updates
//! - [`draw_commands`] - produces the draw list a front end paints
//!
//! Hosts plug in through the [`GlyphProvider`] and [`RepaintScheduler`] traits.

pub mod canvas;
pub mod codepoints;
mod error;
pub mod glyph;
mod glyph_set;
pub mod interaction;
pub mod provider;
pub mod settings;

pub use canvas::{
    CanvasGeometry, CanvasPalette, Color, DEFAULT_DOT_HEIGHT, DEFAULT_DOT_WIDTH, DrawCommand, MAX_DOT_HEIGHT, MAX_DOT_WIDTH, MIN_DOT_HEIGHT, MIN_DOT_WIDTH, Position, Rectangle, Size,
    draw_commands,
};
pub use codepoints::codepoint_name;
pub use error::{EditError, Result};
pub use glyph::{GlyphBitmap, MAX_GLYPH_HEIGHT, MAX_GLYPH_WIDTH};
pub use glyph_set::GlyphSet;
pub use interaction::{CanvasEvent, DragState, DrawingMode, InteractionController, PointerButton};
pub use provider::{GlyphProvider, RepaintCounter, RepaintScheduler};
pub use settings::EditorSettings;
