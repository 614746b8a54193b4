//! Recorded canvas sessions
//!
//! A script describes the glyph and widget size and lists the input events to
//! feed into the controller:
//!
//! ```toml
//! glyph = { width = 8, height = 8 }
//! widget = { width = 100, height = 100 }
//! dot = { width = 10, height = 10 }
//! mode = "flipping"
//! pixels = ["#.......", "........"]
//!
//! [[events]]
//! type = "pointer_down"
//! button = "primary"
//! position = { x = 15, y = 15 }
//!
//! [[events]]
//! type = "pointer_up"
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use psf_engine_edit::{
    CanvasEvent, CanvasGeometry, DrawCommand, DrawingMode, EditorSettings, GlyphBitmap, GlyphProvider, GlyphSet, InteractionController, MAX_GLYPH_HEIGHT,
    MAX_GLYPH_WIDTH, RepaintCounter, Size,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct EventScript {
    pub glyph: Size,
    pub widget: Size,
    /// Requested cell size; settings are used when absent
    #[serde(default)]
    pub dot: Option<Size>,
    /// Mode of the primary button
    #[serde(default)]
    pub mode: Option<DrawingMode>,
    /// Overrides `editing_enabled` from the settings
    #[serde(default)]
    pub editing: Option<bool>,
    /// Initial glyph rows, `#` for pixels that are on
    #[serde(default)]
    pub pixels: Vec<String>,
    #[serde(default)]
    pub events: Vec<CanvasEvent>,
}

/// State after all events of a script were processed
pub struct ReplayOutcome {
    pub glyph: GlyphBitmap,
    pub geometry: Option<CanvasGeometry>,
    pub repaints: usize,
    pub glyph_edited: bool,
    pub commands: Vec<DrawCommand>,
}

impl EventScript {
    pub fn load(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path).with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("Failed to parse script {}", path.display()))
    }

    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    fn initial_glyph(&self) -> Result<GlyphBitmap> {
        let Size { width, height } = self.glyph;
        if !(1..=MAX_GLYPH_WIDTH).contains(&width) || !(1..=MAX_GLYPH_HEIGHT).contains(&height) {
            bail!("glyph size {}x{} outside 1x1..{}x{}", width, height, MAX_GLYPH_WIDTH, MAX_GLYPH_HEIGHT);
        }
        if self.pixels.len() > height as usize {
            bail!("{} pixel rows given for a glyph of height {}", self.pixels.len(), height);
        }
        let mut rows = vec![vec![false; width as usize]; height as usize];
        for (y, line) in self.pixels.iter().enumerate() {
            if line.chars().count() > width as usize {
                bail!("pixel row {} is wider than the glyph ({} columns)", y, width);
            }
            for (cell, ch) in rows[y].iter_mut().zip(line.chars()) {
                *cell = ch == '#';
            }
        }
        Ok(GlyphBitmap::from_rows(&rows)?)
    }

    /// Feed all events into a fresh controller editing a single glyph
    pub fn replay(&self, settings: &EditorSettings) -> Result<ReplayOutcome> {
        let mut font = GlyphSet::from_glyphs(vec![self.initial_glyph()?])?;
        font.select(0)?;

        let mut controller = InteractionController::from_settings(settings);
        if let Some(editing) = self.editing {
            controller.set_editing_enabled(editing);
        }
        if let Some(mode) = self.mode {
            controller.set_primary_mode(mode);
        }

        let mut repaint = RepaintCounter::new();
        if let Some(dot) = self.dot {
            controller.set_requested_dot_size(dot, &font, &mut repaint);
        }
        controller.resize(self.widget, &font, &mut repaint);
        repaint.take();

        for (idx, event) in self.events.iter().enumerate() {
            log::debug!("event {}: {:?}", idx, event);
            controller.handle_event(*event, &mut font, &mut repaint);
        }
        log::info!("replayed {} events, {} repaints", self.events.len(), repaint.count());

        Ok(ReplayOutcome {
            commands: controller.draw_commands(&font, &settings.palette),
            geometry: controller.geometry().copied(),
            glyph: font.current_glyph().clone(),
            repaints: repaint.count(),
            glyph_edited: controller.glyph_edited(),
        })
    }
}
