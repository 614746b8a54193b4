//! Canvas geometry
//!
//! Maps between widget pixel coordinates and glyph cell coordinates.
//!
//! The grid is laid out from the requested cell ("dot") size, capped at
//! [`MAX_DOT_WIDTH`] / [`MAX_DOT_HEIGHT`]. A dimension that
//! does not fit into the widget is shrunk to `widget / glyph` cells, never
//! below [`MIN_DOT_WIDTH`] / [`MIN_DOT_HEIGHT`], and the resulting grid is
//! centered. When even the minimum does not fit, the origin becomes negative
//! and the grid overflows on both sides.
//!
//! Cell `(gx, gy)` starts at `(x1 + gx * dot_width, y1 + gy * dot_height)`.
//! Its hit-test rectangle is inset by one pixel: `(x + 1, y + 1, dot_width,
//! dot_height)`, half-open. The left and top grid lines therefore never hit
//! a cell.

use serde::{Deserialize, Serialize};

/// Requested cell width used until the user zooms
pub const DEFAULT_DOT_WIDTH: i32 = 20;

/// Requested cell height used until the user zooms
pub const DEFAULT_DOT_HEIGHT: i32 = 20;

/// Smallest cell width, both for zooming and for fitting into the widget
pub const MIN_DOT_WIDTH: i32 = 4;

/// Smallest cell height, both for zooming and for fitting into the widget
pub const MIN_DOT_HEIGHT: i32 = 4;

/// Largest cell width a user can zoom to
pub const MAX_DOT_WIDTH: i32 = 256;

/// Largest cell height a user can zoom to
pub const MAX_DOT_HEIGHT: i32 = 256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// Axis aligned rectangle; `contains` treats it as half-open
/// (left/top edges inside, right/bottom edges outside).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, pt: Position) -> bool {
        pt.x >= self.x && pt.x < self.right() && pt.y >= self.y && pt.y < self.bottom()
    }
}

/// Layout of the glyph grid inside a widget.
///
/// Derived data: it is recomputed whenever the widget size, the glyph size or
/// the requested cell size changes and never stored anywhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasGeometry {
    glyph_width: i32,
    glyph_height: i32,
    dot_width: i32,
    dot_height: i32,
    x1: i32,
    y1: i32,
}

impl CanvasGeometry {
    /// Lay out a `glyph` sized grid inside `widget` using the `requested` cell size.
    ///
    /// The glyph must have positive dimensions; callers only compute geometry
    /// while a glyph is selected.
    pub fn compute(widget: Size, glyph: Size, requested: Size) -> Self {
        debug_assert!(glyph.width > 0 && glyph.height > 0, "geometry needs a non-empty glyph");

        let dot_width = fit_dot(requested.width, widget.width, glyph.width, MIN_DOT_WIDTH, MAX_DOT_WIDTH);
        let dot_height = fit_dot(requested.height, widget.height, glyph.height, MIN_DOT_HEIGHT, MAX_DOT_HEIGHT);

        let x1 = widget.width.saturating_sub(glyph.width.saturating_mul(dot_width)).div_euclid(2);
        let y1 = widget.height.saturating_sub(glyph.height.saturating_mul(dot_height)).div_euclid(2);

        Self {
            glyph_width: glyph.width,
            glyph_height: glyph.height,
            dot_width,
            dot_height,
            x1,
            y1,
        }
    }

    pub fn glyph_width(&self) -> i32 {
        self.glyph_width
    }

    pub fn glyph_height(&self) -> i32 {
        self.glyph_height
    }

    /// Effective cell width
    pub fn dot_width(&self) -> i32 {
        self.dot_width
    }

    /// Effective cell height
    pub fn dot_height(&self) -> i32 {
        self.dot_height
    }

    /// Effective cell size
    pub fn dot_size(&self) -> Size {
        Size::new(self.dot_width, self.dot_height)
    }

    /// Total grid width in widget pixels
    pub fn width(&self) -> i32 {
        self.glyph_width.saturating_mul(self.dot_width)
    }

    /// Total grid height in widget pixels
    pub fn height(&self) -> i32 {
        self.glyph_height.saturating_mul(self.dot_height)
    }

    pub fn x1(&self) -> i32 {
        self.x1
    }

    pub fn y1(&self) -> i32 {
        self.y1
    }

    pub fn x2(&self) -> i32 {
        self.x1 + self.width()
    }

    pub fn y2(&self) -> i32 {
        self.y1 + self.height()
    }

    pub fn origin(&self) -> Position {
        Position::new(self.x1, self.y1)
    }

    /// Whether `(gx, gy)` addresses a cell of the grid
    pub fn contains_cell(&self, gx: i32, gy: i32) -> bool {
        gx >= 0 && gx < self.glyph_width && gy >= 0 && gy < self.glyph_height
    }

    /// Top left corner of the raw (not inset) cell boundary
    pub fn cell_origin(&self, gx: i32, gy: i32) -> Position {
        Position::new(self.x1 + gx * self.dot_width, self.y1 + gy * self.dot_height)
    }

    /// Hit-test rectangle of a cell, inset by the one pixel grid line
    pub fn cell_rect(&self, gx: i32, gy: i32) -> Rectangle {
        let origin = self.cell_origin(gx, gy);
        Rectangle::new(origin.x + 1, origin.y + 1, self.dot_width, self.dot_height)
    }

    /// Resolve a widget position to the cell whose hit-test rectangle contains it.
    ///
    /// Cell rectangles tile the area `x1 + 1 .. x2 + 1` without gaps, so the
    /// cell is found arithmetically instead of scanning every rectangle.
    pub fn point_to_cell(&self, pt: Position) -> Option<(i32, i32)> {
        let gx = (pt.x - self.x1 - 1).div_euclid(self.dot_width);
        let gy = (pt.y - self.y1 - 1).div_euclid(self.dot_height);
        self.contains_cell(gx, gy).then_some((gx, gy))
    }
}

/// Cell size along one axis; `dot > widget / cells` is the overflow free
/// form of `cells * dot > widget`.
fn fit_dot(requested: i32, widget: i32, cells: i32, min: i32, max: i32) -> i32 {
    let dot = requested.clamp(min, max);
    let fitting = widget.max(0) / cells;
    if dot > fitting {
        fitting.max(min)
    } else {
        dot
    }
}
