pub mod errors;
pub mod source;
pub mod extractor;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{Heightmap, HeightmapState};

pub use errors::{HeightmapError, HeightmapResult};
pub use source::{PixelSource, RasterBuffer, SourceInput};
pub use extractor::{
    ArrayData, ArrayFormat, ArrayLayout, Channel, ExtractionMode, FlatArray, GridArray,
    Region, RegionExtractor, RegionSpec, RgbaTuple,
};
