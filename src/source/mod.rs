//! Pixel sources
//!
//! This module covers everything before extraction: turning a URL, a decoded
//! image or a raw buffer into an RGBA raster that the extractor can read.

mod pixel_source;
mod raster;
mod input;

pub use pixel_source::PixelSource;
pub use raster::RasterBuffer;
pub use input::SourceInput;
