//! Draw list for the glyph canvas
//!
//! The renderer does not paint anything itself. It turns the current geometry
//! and glyph into a flat list of [`DrawCommand`]s which a front end replays
//! with whatever painter it has.

use serde::{Deserialize, Serialize};

use super::{CanvasGeometry, Position, Rectangle, Size};
use crate::GlyphBitmap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors used to draw the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasPalette {
    /// Widget area outside the grid
    pub background: Color,
    /// Pixel that is on
    pub set_cell: Color,
    /// Pixel that is off
    pub unset_cell: Color,
    /// Lines between cells
    pub grid_line: Color,
    /// Right and bottom outline of the grid
    pub border: Color,
}

impl Default for CanvasPalette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(72, 71, 65),
            set_cell: Color::from_rgb8(255, 140, 0),
            unset_cell: Color::from_rgb8(0, 43, 54),
            grid_line: Color::from_rgb8(64, 64, 64),
            border: Color::from_rgb8(192, 192, 192),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect { rect: Rectangle, color: Color },
    Line { from: Position, to: Position, color: Color },
}

/// Build the draw list for a widget of size `widget`.
///
/// Without content only the background is drawn. Otherwise every cell is
/// filled (row-major, leaving the one pixel grid line free), followed by the
/// grid lines and the right/bottom border.
pub fn draw_commands(widget: Size, content: Option<(&CanvasGeometry, &GlyphBitmap)>, palette: &CanvasPalette) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::FillRect {
        rect: Rectangle::new(0, 0, widget.width, widget.height),
        color: palette.background,
    }];

    let Some((geometry, glyph)) = content else {
        return commands;
    };
    debug_assert_eq!(
        (geometry.glyph_width(), geometry.glyph_height()),
        (glyph.width(), glyph.height()),
        "geometry computed for a different glyph"
    );

    let (dot_w, dot_h) = (geometry.dot_width(), geometry.dot_height());
    commands.reserve((geometry.glyph_width() * geometry.glyph_height() + geometry.glyph_width() + geometry.glyph_height() + 2) as usize);

    for gy in 0..geometry.glyph_height() {
        for gx in 0..geometry.glyph_width() {
            let origin = geometry.cell_origin(gx, gy);
            let color = if glyph.get_pixel(gx, gy) { palette.set_cell } else { palette.unset_cell };
            commands.push(DrawCommand::FillRect {
                rect: Rectangle::new(origin.x + 1, origin.y + 1, dot_w - 1, dot_h - 1),
                color,
            });
        }
    }

    let (x1, y1, x2, y2) = (geometry.x1(), geometry.y1(), geometry.x2(), geometry.y2());
    for y in (y1..y2).step_by(dot_h as usize) {
        commands.push(DrawCommand::Line {
            from: Position::new(x1, y),
            to: Position::new(x2, y),
            color: palette.grid_line,
        });
    }
    for x in (x1..x2).step_by(dot_w as usize) {
        commands.push(DrawCommand::Line {
            from: Position::new(x, y1),
            to: Position::new(x, y2),
            color: palette.grid_line,
        });
    }

    commands.push(DrawCommand::Line {
        from: Position::new(x2, y1),
        to: Position::new(x2, y2),
        color: palette.border,
    });
    commands.push(DrawCommand::Line {
        from: Position::new(x1, y2),
        to: Position::new(x2, y2),
        color: palette.border,
    });

    commands
}
