//! Canvas layer: geometry of the glyph grid inside a widget and the draw list
//! produced from it.

mod geometry;
mod render;

pub use geometry::*;
pub use render::*;
