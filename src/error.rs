use mosaic_core::{InputSizeError, MosaicError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Mosaic error: {0}")]
    Mosaic(#[from] MosaicError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PaletteError> for AppError {
    fn from(e: PaletteError) -> Self {
        AppError::Mosaic(e.into())
    }
}

impl From<InputSizeError> for AppError {
    fn from(e: InputSizeError) -> Self {
        AppError::Mosaic(e.into())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Embedded config not found")]
    MissingEmbedded,

    #[error("Invalid resolution {0} (must be 1..={max})", max = crate::models::MosaicSpec::MAX_RESOLUTION)]
    InvalidResolution(usize),

    #[error("Invalid scale {0} (must be 1..={max})", max = crate::models::MosaicSpec::MAX_SCALE)]
    InvalidScale(u32),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}
