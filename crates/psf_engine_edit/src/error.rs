use thiserror::Error;

/// Errors raised outside of the interactive path: building glyphs and fonts,
/// selecting glyphs and loading settings.
///
/// Pointer, wheel and resize handling never fail; invalid input there is a
/// silent no-op.
#[derive(Error, Debug)]
pub enum EditError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid glyph size {width}x{height}: both dimensions must be positive")]
    InvalidGlyphSize { width: i32, height: i32 },

    #[error("Glyph row {row} has {actual} pixels, expected {expected}")]
    RaggedGlyphRow { row: usize, expected: usize, actual: usize },

    #[error("Glyph index {index} out of range (font has {count} glyphs)")]
    GlyphIndexOutOfRange { index: usize, count: usize },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, EditError>;
