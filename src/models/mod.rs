pub mod config;
pub mod mosaic_spec;

pub use config::{AppConfig, ColorValue, PaletteColorConfig};
pub use mosaic_spec::MosaicSpec;
