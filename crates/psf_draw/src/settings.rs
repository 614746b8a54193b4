use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use psf_engine_edit::EditorSettings;

// =============================================================================
// Project directory constants
// =============================================================================

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "psf_draw";

/// Lazily initialized project directories (computed once on first access)
static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

pub fn config_dir() -> Option<PathBuf> {
    PROJECT_DIRS.as_ref().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Configuration directory, created on demand
pub fn get_log_dir() -> Option<PathBuf> {
    let dir = config_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

/// Load settings from `path`, or from the default location.
///
/// An explicit path must exist; a missing default file means default settings.
pub fn load_settings(path: Option<&Path>) -> Result<EditorSettings> {
    let settings = match path {
        Some(path) => EditorSettings::load(path).with_context(|| format!("Failed to load settings {}", path.display()))?,
        None => {
            let Some(file) = config_dir().map(|dir| dir.join(EditorSettings::FILE_NAME)) else {
                log::warn!("No configuration directory, using default settings");
                return Ok(EditorSettings::default());
            };
            if !file.exists() {
                log::info!("No settings at {}, using defaults", file.display());
                return Ok(EditorSettings::default());
            }
            EditorSettings::load(&file).with_context(|| format!("Failed to load settings {}", file.display()))?
        }
    };
    settings.validate()?;
    Ok(settings)
}
