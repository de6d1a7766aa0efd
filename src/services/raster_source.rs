use crate::error::AppError;
use image::imageops::FilterType;
use image::DynamicImage;
use mosaic_core::RasterBuffer;
use std::path::Path;

/// Decode encoded image bytes (PNG, JPEG) into an N×N raster.
///
/// The image is stretched to the square grid without preserving aspect
/// ratio; alpha is dropped.
pub fn load_raster_from_bytes(bytes: &[u8], resolution: usize) -> Result<RasterBuffer, AppError> {
    let img = image::load_from_memory(bytes).map_err(|e| AppError::ImageDecode(e.to_string()))?;
    to_raster(img, resolution)
}

/// Open an image file and resize it into an N×N raster.
pub fn load_raster_from_path(path: &Path, resolution: usize) -> Result<RasterBuffer, AppError> {
    let img = image::open(path)
        .map_err(|e| AppError::ImageDecode(format!("{}: {e}", path.display())))?;
    to_raster(img, resolution)
}

fn to_raster(img: DynamicImage, resolution: usize) -> Result<RasterBuffer, AppError> {
    let side = u32::try_from(resolution)
        .ok()
        .filter(|&s| s > 0)
        .ok_or(crate::error::ConfigError::InvalidResolution(resolution))?;

    tracing::debug!(
        width = img.width(),
        height = img.height(),
        resolution,
        "Resizing source image"
    );

    let rgb = if img.width() == side && img.height() == side {
        img.to_rgb8()
    } else {
        img.resize_exact(side, side, FilterType::Triangle).to_rgb8()
    };

    Ok(RasterBuffer::from_bytes(
        rgb.as_raw(),
        resolution,
        resolution,
        3,
    )?)
}
