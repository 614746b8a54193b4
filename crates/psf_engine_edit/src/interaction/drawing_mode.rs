use serde::{Deserialize, Serialize};

use crate::GlyphBitmap;

/// Operation a drag applies to every cell it enters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawingMode {
    /// Switch pixels on
    #[default]
    Setting,
    /// Switch pixels off
    Clearing,
    /// Invert pixels
    Flipping,
}

impl DrawingMode {
    /// Apply the mode to one pixel and return the pixel's new value
    pub fn apply(self, glyph: &mut GlyphBitmap, x: i32, y: i32) -> bool {
        match self {
            DrawingMode::Setting => {
                glyph.set_pixel(x, y, true);
                true
            }
            DrawingMode::Clearing => {
                glyph.set_pixel(x, y, false);
                false
            }
            DrawingMode::Flipping => glyph.toggle_pixel(x, y),
        }
    }
}
