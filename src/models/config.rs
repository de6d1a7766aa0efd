use crate::assets::AssetLoader;
use crate::error::ConfigError;
use crate::models::MosaicSpec;
use mosaic_core::{Palette, PaletteError, Rgb};
use serde::Deserialize;

/// Application configuration loaded from palette.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Cells per side of the mosaic
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// Output pixels per cell when writing PNGs
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Available colors in declared (tie-break) order
    #[serde(default)]
    pub palette: Vec<PaletteColorConfig>,
}

fn default_resolution() -> usize {
    mosaic_core::DEFAULT_RESOLUTION
}

fn default_scale() -> u32 {
    1
}

/// One stocked color
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteColorConfig {
    pub name: String,
    pub color: ColorValue,
    /// Signed so that negative counts reach palette validation
    pub stock: i64,
}

/// A color as written in YAML: `"#RRGGBB"` or `[r, g, b]`
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Triple([u8; 3]),
}

impl ColorValue {
    fn to_rgb(&self, name: &str) -> Result<Rgb, PaletteError> {
        match self {
            ColorValue::Hex(hex) => hex.parse().map_err(|source| PaletteError::ParseColor {
                name: name.to_string(),
                source,
            }),
            ColorValue::Triple([r, g, b]) => Ok(Rgb::new(*r, *g, *b)),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// Unlike a missing screen or font, a broken palette file is never
    /// replaced by the default: the bill of materials would be wrong.
    pub fn load_from_assets(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let content = loader.read_config_string()?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            source = %loader.config_source(),
            colors = config.palette.len(),
            resolution = config.resolution,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Replace resolution and scale with command-line values, where given
    pub fn with_overrides(mut self, resolution: Option<usize>, scale: Option<u32>) -> Self {
        if let Some(resolution) = resolution {
            self.resolution = resolution;
        }
        if let Some(scale) = scale {
            self.scale = scale;
        }
        self
    }

    /// Validated output geometry
    pub fn spec(&self) -> Result<MosaicSpec, ConfigError> {
        MosaicSpec::new(self.resolution, self.scale)
    }

    /// Build the core palette, keeping declared order
    pub fn to_palette(&self) -> Result<Palette, PaletteError> {
        let entries = self
            .palette
            .iter()
            .map(|c| Ok((c.name.as_str(), c.color.to_rgb(&c.name)?, c.stock)))
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Palette::new(entries)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            scale: default_scale(),
            palette: Vec::new(),
        }
    }
}
