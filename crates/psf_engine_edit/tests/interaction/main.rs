//! Interaction controller tests
//!
//! Split by area:
//! - `drag.rs` - press/move/release painting in all drawing modes
//! - `zoom_resize.rs` - wheel zoom and widget resize
//! - `preconditions.rs` - editing disabled, no glyph, glyph switching

mod preconditions;
mod zoom_resize;
