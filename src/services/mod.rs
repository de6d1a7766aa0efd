pub mod mosaic_service;
pub mod raster_source;

pub use mosaic_service::MosaicService;
pub use raster_source::{load_raster_from_bytes, load_raster_from_path};
