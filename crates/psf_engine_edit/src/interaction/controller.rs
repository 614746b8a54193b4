//! Interaction controller for the glyph canvas
//!
//! # State machine
//!
//! | State                | Event                         | Result                                                    |
//! |----------------------|-------------------------------|-----------------------------------------------------------|
//! | any                  | PointerDown(primary) on cell  | apply primary mode to cell, `Dragging(primary mode)`      |
//! | any                  | PointerDown(secondary) on cell| clear cell, `Dragging(Clearing)`                          |
//! | any                  | PointerDown, miss             | unchanged                                                 |
//! | `Dragging(mode)`     | PointerMove onto a new cell   | apply `mode` to the cell, remember it as last cell        |
//! | `Dragging(mode)`     | PointerMove onto the last cell| nothing (a flip is never applied twice in a row)          |
//! | `Dragging(mode)`     | PointerMove, miss             | nothing                                                   |
//! | any                  | PointerUp                     | `Idle`                                                    |
//!
//! Pointer events are dropped while editing is disabled or no glyph is
//! selected. Wheel events zoom by one pixel per step in both directions, between
//! the minimum and maximum cell size, and only need a glyph. Resize and wheel recompute the [`CanvasGeometry`]; none
//! of them touch the drag state.
//!
//! The primary mode defaults to [`DrawingMode::Setting`]. Hosts can switch it
//! (e.g. from a menu) with [`InteractionController::set_primary_mode`], which is
//! the only way to start a [`DrawingMode::Flipping`] drag.

use crate::{
    CanvasEvent, CanvasGeometry, CanvasPalette, DEFAULT_DOT_HEIGHT, DEFAULT_DOT_WIDTH, DrawCommand, DrawingMode, EditorSettings, GlyphProvider,
    MAX_DOT_HEIGHT, MAX_DOT_WIDTH, MIN_DOT_HEIGHT, MIN_DOT_WIDTH, PointerButton, Position, RepaintScheduler, Size, draw_commands,
};

/// Drag state of the canvas
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        mode: DrawingMode,
        /// Cell the last operation was applied to
        last_cell: (i32, i32),
    },
}

pub struct InteractionController {
    /// Size of the canvas widget, kept even while no glyph is selected
    widget_size: Size,
    /// Cell size the user zoomed to; the geometry may use a smaller one
    requested_dot: Size,
    /// Layout for the current glyph, `None` while no glyph is selected
    geometry: Option<CanvasGeometry>,
    drag: DragState,
    /// Mode started by the primary button
    primary_mode: DrawingMode,
    editing_enabled: bool,
    /// Set whenever a pixel operation was applied
    glyph_edited: bool,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    /// Controller with default cell size and editing enabled
    pub fn new() -> Self {
        Self {
            widget_size: Size::default(),
            requested_dot: Size::new(DEFAULT_DOT_WIDTH, DEFAULT_DOT_HEIGHT),
            geometry: None,
            drag: DragState::Idle,
            primary_mode: DrawingMode::Setting,
            editing_enabled: true,
            glyph_edited: false,
        }
    }

    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self {
            requested_dot: clamp_dot(Size::new(settings.dot_width, settings.dot_height)),
            editing_enabled: settings.editing_enabled,
            ..Self::new()
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn geometry(&self) -> Option<&CanvasGeometry> {
        self.geometry.as_ref()
    }

    pub fn widget_size(&self) -> Size {
        self.widget_size
    }

    /// Cell size requested by zooming (before fitting into the widget)
    pub fn requested_dot_size(&self) -> Size {
        self.requested_dot
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Mode of the active drag
    pub fn drawing_mode(&self) -> Option<DrawingMode> {
        match self.drag {
            DragState::Dragging { mode, .. } => Some(mode),
            DragState::Idle => None,
        }
    }

    /// Cell the active drag last modified
    pub fn last_cell(&self) -> Option<(i32, i32)> {
        match self.drag {
            DragState::Dragging { last_cell, .. } => Some(last_cell),
            DragState::Idle => None,
        }
    }

    pub fn primary_mode(&self) -> DrawingMode {
        self.primary_mode
    }

    pub fn editing_enabled(&self) -> bool {
        self.editing_enabled
    }

    /// Whether any pixel was modified since the last `reset_glyph_edited`
    pub fn glyph_edited(&self) -> bool {
        self.glyph_edited
    }

    pub fn reset_glyph_edited(&mut self) {
        self.glyph_edited = false;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Host actions
    // ═══════════════════════════════════════════════════════════════════════

    /// Select the mode a primary button drag uses
    pub fn set_primary_mode(&mut self, mode: DrawingMode) {
        log::debug!("primary drawing mode {:?}", mode);
        self.primary_mode = mode;
    }

    /// Enable or disable pixel editing; disabling ends an active drag
    pub fn set_editing_enabled(&mut self, enabled: bool) {
        self.editing_enabled = enabled;
        if !enabled {
            self.drag = DragState::Idle;
        }
    }

    /// Set the requested cell size directly (clamped to the minimum and maximum)
    pub fn set_requested_dot_size<P, R>(&mut self, size: Size, font: &P, repaint: &mut R)
    where
        P: GlyphProvider + ?Sized,
        R: RepaintScheduler + ?Sized,
    {
        self.requested_dot = clamp_dot(size);
        self.update_geometry(font);
        repaint.request_repaint();
    }

    /// Must be called after the provider switched to another glyph (or to none).
    pub fn glyph_changed<P, R>(&mut self, font: &P, repaint: &mut R)
    where
        P: GlyphProvider + ?Sized,
        R: RepaintScheduler + ?Sized,
    {
        self.drag = DragState::Idle;
        self.update_geometry(font);
        repaint.request_repaint();
    }

    /// Resolve a widget position to a glyph cell using the current geometry
    pub fn hit_test(&self, pt: Position) -> Option<(i32, i32)> {
        self.geometry.as_ref()?.point_to_cell(pt)
    }

    /// Draw list for the current state
    pub fn draw_commands<P>(&self, font: &P, palette: &CanvasPalette) -> Vec<DrawCommand>
    where
        P: GlyphProvider + ?Sized,
    {
        let content = match &self.geometry {
            Some(geometry) if font.has_glyph() => Some((geometry, font.current_glyph())),
            _ => None,
        };
        draw_commands(self.widget_size, content, palette)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Event handlers
    // ═══════════════════════════════════════════════════════════════════════

    /// Dispatch a single event to its handler
    pub fn handle_event<P, R>(&mut self, event: CanvasEvent, font: &mut P, repaint: &mut R)
    where
        P: GlyphProvider + ?Sized,
        R: RepaintScheduler + ?Sized,
    {
        match event {
            CanvasEvent::PointerDown { button, position } => self.pointer_down(button, position, font, repaint),
            CanvasEvent::PointerMove { position } => self.pointer_move(position, font, repaint),
            CanvasEvent::PointerUp => self.pointer_up(),
            CanvasEvent::Wheel { delta } => self.wheel(delta, font, repaint),
            CanvasEvent::Resize { size } => self.resize(size, font, repaint),
        }
    }

    pub fn pointer_down<P, R>(&mut self, button: PointerButton, pt: Position, font: &mut P, repaint: &mut R)
    where
        P: GlyphProvider + ?Sized,
        R: RepaintScheduler + ?Sized,
    {
        if !self.can_edit(font) {
            return;
        }
        let mode = match button {
            PointerButton::Primary => self.primary_mode,
            PointerButton::Secondary => DrawingMode::Clearing,
            PointerButton::Middle => return,
        };
        self.ensure_geometry(font);
        let Some(cell) = self.hit_test(pt) else {
            return;
        };

        self.apply(mode, cell, font, repaint);
        self.drag = DragState::Dragging { mode, last_cell: cell };
        log::debug!("drag start {:?} at {:?}", mode, cell);
    }

    pub fn pointer_move<P, R>(&mut self, pt: Position, font: &mut P, repaint: &mut R)
    where
        P: GlyphProvider + ?Sized,
        R: RepaintScheduler + ?Sized,
    {
        let DragState::Dragging { mode, last_cell } = self.drag else {
            return;
        };
        if !self.can_edit(font) {
            return;
        }
        let Some(cell) = self.hit_test(pt) else {
            return;
        };
        if cell == last_cell {
            return;
        }

        self.apply(mode, cell, font, repaint);
        self.drag = DragState::Dragging { mode, last_cell: cell };
    }

    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            log::debug!("drag end");
        }
        self.drag = DragState::Idle;
    }

    pub fn wheel<P, R>(&mut self, delta: i32, font: &P, repaint: &mut R)
    where
        P: GlyphProvider + ?Sized,
        R: RepaintScheduler + ?Sized,
    {
        if !font.has_glyph() || delta == 0 {
            return;
        }
        let step = delta.signum();
        self.requested_dot = clamp_dot(Size::new(self.requested_dot.width + step, self.requested_dot.height + step));
        log::debug!("zoom to {}x{}", self.requested_dot.width, self.requested_dot.height);

        self.update_geometry(font);
        repaint.request_repaint();
    }

    pub fn resize<P, R>(&mut self, size: Size, font: &P, repaint: &mut R)
    where
        P: GlyphProvider + ?Sized,
        R: RepaintScheduler + ?Sized,
    {
        self.widget_size = size;
        self.update_geometry(font);
        repaint.request_repaint();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internals
    // ═══════════════════════════════════════════════════════════════════════

    fn can_edit<P: GlyphProvider + ?Sized>(&self, font: &P) -> bool {
        self.editing_enabled && font.has_glyph()
    }

    fn update_geometry<P: GlyphProvider + ?Sized>(&mut self, font: &P) {
        self.geometry = font.has_glyph().then(|| {
            let glyph = Size::new(font.glyph_width(), font.glyph_height());
            CanvasGeometry::compute(self.widget_size, glyph, self.requested_dot)
        });
    }

    /// Recompute the geometry if the host swapped glyphs without telling us
    fn ensure_geometry<P: GlyphProvider + ?Sized>(&mut self, font: &P) {
        let stale = match &self.geometry {
            Some(geometry) => geometry.glyph_width() != font.glyph_width() || geometry.glyph_height() != font.glyph_height(),
            None => true,
        };
        if stale {
            self.update_geometry(font);
        }
    }

    fn apply<P, R>(&mut self, mode: DrawingMode, (gx, gy): (i32, i32), font: &mut P, repaint: &mut R)
    where
        P: GlyphProvider + ?Sized,
        R: RepaintScheduler + ?Sized,
    {
        let value = mode.apply(font.current_glyph_mut(), gx, gy);
        log::trace!("{:?} pixel ({}, {}) -> {}", mode, gx, gy, value);
        self.glyph_edited = true;
        repaint.request_repaint();
    }
}

fn clamp_dot(size: Size) -> Size {
    Size::new(size.width.clamp(MIN_DOT_WIDTH, MAX_DOT_WIDTH), size.height.clamp(MIN_DOT_HEIGHT, MAX_DOT_HEIGHT))
}
