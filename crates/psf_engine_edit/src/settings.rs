//! Persisted editor options
//!
//! Stored as TOML. Every field is optional; missing fields take their default.
//!
//! ```toml
//! dot_width = 24
//! dot_height = 24
//! editing_enabled = true
//!
//! [palette]
//! set_cell = { r = 255, g = 255, b = 255 }
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{CanvasPalette, DEFAULT_DOT_HEIGHT, DEFAULT_DOT_WIDTH, EditError, MAX_DOT_HEIGHT, MAX_DOT_WIDTH, MIN_DOT_HEIGHT, MIN_DOT_WIDTH, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Initial requested cell width
    pub dot_width: i32,
    /// Initial requested cell height
    pub dot_height: i32,
    pub editing_enabled: bool,
    pub palette: CanvasPalette,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            dot_width: DEFAULT_DOT_WIDTH,
            dot_height: DEFAULT_DOT_HEIGHT,
            editing_enabled: true,
            palette: CanvasPalette::default(),
        }
    }
}

impl EditorSettings {
    pub const FILE_NAME: &'static str = "settings.toml";

    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let mut settings: Self = toml::from_str(txt)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)?;
        Self::from_toml_str(&txt)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject settings that cannot be used at all.
    pub fn validate(&self) -> Result<()> {
        if self.dot_width <= 0 || self.dot_height <= 0 {
            return Err(EditError::InvalidSettings(format!(
                "cell size must be positive, got {}x{}",
                self.dot_width, self.dot_height
            )));
        }
        if self.dot_width > MAX_DOT_WIDTH || self.dot_height > MAX_DOT_HEIGHT {
            return Err(EditError::InvalidSettings(format!(
                "cell size {}x{} exceeds {}x{}",
                self.dot_width, self.dot_height, MAX_DOT_WIDTH, MAX_DOT_HEIGHT
            )));
        }
        Ok(())
    }

    fn sanitize(&mut self) {
        let dot_width = self.dot_width.clamp(MIN_DOT_WIDTH, MAX_DOT_WIDTH);
        if dot_width != self.dot_width {
            log::warn!("dot_width {} out of range, using {}", self.dot_width, dot_width);
            self.dot_width = dot_width;
        }
        let dot_height = self.dot_height.clamp(MIN_DOT_HEIGHT, MAX_DOT_HEIGHT);
        if dot_height != self.dot_height {
            log::warn!("dot_height {} out of range, using {}", self.dot_height, dot_height);
            self.dot_height = dot_height;
        }
    }
}
