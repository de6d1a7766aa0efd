//! Temporary directory holding configs and images for a test.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use stockmosaic::assets::AssetLoader;
use stockmosaic::models::AppConfig;
use stockmosaic::services::MosaicService;

use super::fixtures;

/// Scratch directory that is removed when dropped
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a palette config and return its path
    pub fn write_config(&self, name: &str, yaml: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    /// Write an image as PNG and return its path
    pub fn write_png(&self, name: &str, img: &image::RgbImage) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, fixtures::png_bytes(img)).expect("Failed to write image");
        path
    }

    /// Build a service the way the CLI does, from a config file
    pub fn service_from_config(&self, config: &Path) -> MosaicService {
        let loader = AssetLoader::new(Some(config.to_path_buf()));
        let config = AppConfig::load_from_assets(&loader).expect("config should load");
        let spec = config.spec().expect("spec should be valid");
        let palette = config.to_palette().expect("palette should be valid");
        MosaicService::new(palette, spec)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
