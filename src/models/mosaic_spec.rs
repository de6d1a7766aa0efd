use crate::error::ConfigError;

/// Output geometry of a mosaic: the working grid and the PNG upscale factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicSpec {
    /// Cells per side (N)
    pub resolution: usize,
    /// Output pixels per cell side
    pub scale: u32,
}

impl MosaicSpec {
    pub const MAX_RESOLUTION: usize = 1024;
    pub const MAX_SCALE: u32 = 64;

    /// 48x48 grid written 1:1
    pub const DEFAULT: Self = Self {
        resolution: mosaic_core::DEFAULT_RESOLUTION,
        scale: 1,
    };

    /// Validate a resolution/scale pair
    pub fn new(resolution: usize, scale: u32) -> Result<Self, ConfigError> {
        if resolution == 0 || resolution > Self::MAX_RESOLUTION {
            return Err(ConfigError::InvalidResolution(resolution));
        }
        if scale == 0 || scale > Self::MAX_SCALE {
            return Err(ConfigError::InvalidScale(scale));
        }
        Ok(Self { resolution, scale })
    }

    /// Number of mosaic cells (N * N)
    pub fn cell_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Side length of the written PNG in pixels
    pub fn output_side(&self) -> u32 {
        self.resolution as u32 * self.scale
    }

    /// Map a pixel in the written PNG back to its mosaic cell
    pub fn cell_at_output(&self, px: u32, py: u32) -> Option<(usize, usize)> {
        let side = self.output_side();
        if px >= side || py >= side {
            return None;
        }
        Some(((px / self.scale) as usize, (py / self.scale) as usize))
    }
}

impl Default for MosaicSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}
