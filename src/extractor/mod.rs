//! Array extraction from rasterized images
//!
//! This module turns an RGBA raster into the numeric views used for
//! heightmaps. A `RegionExtractor` runs one crop-and-iterate loop with a
//! pluggable `PixelSelector`, so every view shares the same indexing.

mod region;
mod channel;
mod selector;
mod region_extractor;
mod array_data;
#[cfg(test)]
mod tests;

// Public exports
pub use region::{Region, RegionSpec};
pub use channel::{Channel, IntoChannel};
pub use selector::{
    average_rgb, AverageSelector, ChannelSelector, ExtractionMode, PixelSelector, RawSelector,
    RgbaSelector, RgbaTuple,
};
pub use region_extractor::{FlatArray, GridArray, RegionExtractor};
pub use array_data::{ArrayData, ArrayFormat, ArrayLayout};
