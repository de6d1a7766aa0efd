use crate::error::AppError;
use crate::models::MosaicSpec;
use crate::rendering::{encode_rgb_png, SummaryReport};
use mosaic_core::{MosaicGenerator, Palette, RasterBuffer, RunResult};
use std::path::Path;
use std::sync::{Arc, RwLock};

use super::raster_source;

/// Generates mosaics against a fixed palette and remembers the latest run
///
/// Every run starts from the palette's original stock; the remembered run
/// only backs [`color_name_at`](Self::color_name_at) lookups.
pub struct MosaicService {
    generator: MosaicGenerator,
    spec: MosaicSpec,
    latest: RwLock<Option<Arc<RunResult>>>,
}

impl MosaicService {
    pub fn new(palette: Palette, spec: MosaicSpec) -> Self {
        Self {
            generator: MosaicGenerator::new(palette).resolution(spec.resolution),
            spec,
            latest: RwLock::new(None),
        }
    }

    pub fn palette(&self) -> &Palette {
        self.generator.palette()
    }

    pub fn spec(&self) -> MosaicSpec {
        self.spec
    }

    /// Run the pipeline on an N×N raster and remember the result
    pub fn run(&self, raster: &RasterBuffer) -> Result<Arc<RunResult>, AppError> {
        let result = Arc::new(self.generator.generate(raster)?);

        let summary = result.summary();
        tracing::info!(
            resolution = self.spec.resolution,
            used = summary.total_used,
            unassigned = summary.unassigned,
            colors = summary.rows.len(),
            "Generated mosaic"
        );
        if summary.unassigned > 0 {
            tracing::warn!(
                unassigned = summary.unassigned,
                "Inventory exhausted, some cells left black"
            );
        }

        let mut latest = self.latest.write().unwrap_or_else(|e| e.into_inner());
        *latest = Some(result.clone());
        Ok(result)
    }

    /// Decode an image file, resize it to the working grid, and run
    pub fn run_file(&self, path: &Path) -> Result<Arc<RunResult>, AppError> {
        let raster = raster_source::load_raster_from_path(path, self.spec.resolution)?;
        self.run(&raster)
    }

    /// Decode encoded image bytes, resize them to the working grid, and run
    pub fn run_bytes(&self, bytes: &[u8]) -> Result<Arc<RunResult>, AppError> {
        let raster = raster_source::load_raster_from_bytes(bytes, self.spec.resolution)?;
        self.run(&raster)
    }

    /// Most recent run, if any
    pub fn latest(&self) -> Option<Arc<RunResult>> {
        self.latest
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Color name at cell (x, y) of the most recent run
    ///
    /// `None` before the first run or outside the grid; `"Out of Stock"`
    /// for cells the inventory could not cover.
    pub fn color_name_at(&self, x: usize, y: usize) -> Option<String> {
        let latest = self.latest()?;
        latest.color_name_at(x, y).map(str::to_string)
    }

    /// Encode a run as PNG at the configured scale
    pub fn render_png(&self, result: &RunResult) -> Result<Vec<u8>, AppError> {
        let side = result.size() as u32;
        Ok(encode_rgb_png(&result.to_rgb(), side, side, self.spec.scale)?)
    }

    /// Encode a run as PNG and write it to `path`, returning the byte count
    pub fn write_png(&self, result: &RunResult, path: &Path) -> Result<usize, AppError> {
        let png_bytes = self.render_png(result)?;
        std::fs::write(path, &png_bytes)?;
        tracing::debug!(path = %path.display(), bytes = png_bytes.len(), "Wrote mosaic");
        Ok(png_bytes.len())
    }

    pub fn report(&self, result: &RunResult) -> SummaryReport {
        SummaryReport::from(&result.summary())
    }
}
