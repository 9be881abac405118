//! Region extraction over RGBA rasters
//!
//! This module implements the views a heightmap exposes: flat and grid
//! arrays of raw bytes, averaged heights, single channels and RGBA tuples.
//! All of them share one crop-and-iterate loop parameterized by a
//! `PixelSelector`.

use log::debug;

use crate::errors::{HeightmapError, HeightmapResult};
use crate::source::PixelSource;

use super::array_data::ArrayData;
use super::channel::IntoChannel;
use super::region::{Region, RegionSpec};
use super::selector::{
    AverageSelector, ChannelSelector, ExtractionMode, PixelSelector, RawSelector, RgbaSelector,
    RgbaTuple,
};

/// Row-major sequence of `width * height` values
pub type FlatArray<T> = Vec<T>;

/// `height` rows of `width` values each
pub type GridArray<T> = Vec<Vec<T>>;

/// Read-only extractor borrowing a rasterized buffer
///
/// Every call recomputes its result from the buffer; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct RegionExtractor<'a> {
    /// Raster width in pixels
    width: u32,
    /// Raster height in pixels
    height: u32,
    /// Row-major RGBA bytes
    data: &'a [u8],
}

impl<'a> RegionExtractor<'a> {
    /// Create an extractor over a pixel source
    ///
    /// # Returns
    /// The extractor, or `NotReady` if the source has not been rasterized yet
    pub fn new<S: PixelSource + ?Sized>(source: &'a S) -> HeightmapResult<Self> {
        if !source.is_ready() {
            return Err(HeightmapError::NotReady);
        }

        let data = source.rgba_buffer().ok_or(HeightmapError::NotReady)?;
        let (width, height) = source.dimensions();

        let expected = 4 * width as usize * height as usize;
        if data.len() != expected {
            return Err(HeightmapError::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(RegionExtractor { width, height, data })
    }

    /// Raster dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resolve and validate a region spec against this raster
    pub fn resolve(&self, region: RegionSpec) -> HeightmapResult<Region> {
        region.resolve(self.width, self.height)
    }

    /// Visit every pixel of a region in row-major order
    ///
    /// The callback receives the row index within the region and the pixel.
    fn for_each_pixel<F>(&self, region: Region, mut visit: F)
    where
        F: FnMut(u32, &RgbaTuple),
    {
        let stride = self.width as usize;

        for r in 0..region.height {
            let row_start = (region.y + r) as usize * stride + region.x as usize;
            let bytes = &self.data[4 * row_start..4 * (row_start + region.width as usize)];

            for chunk in bytes.chunks_exact(4) {
                let pixel = [chunk[0], chunk[1], chunk[2], chunk[3]];
                visit(r, &pixel);
            }
        }
    }

    /// Extract a region as a flat, row-major array
    ///
    /// # Arguments
    /// * `selector` - Function applied to every pixel
    /// * `region` - Crop rectangle, any field may be omitted
    pub fn extract_flat<S: PixelSelector>(&self, selector: &S,
                                          region: RegionSpec) -> HeightmapResult<FlatArray<S::Output>> {
        let region = self.resolve(region)?;
        debug!("Extracting flat array over {:?}", region);

        let mut values = Vec::with_capacity(region.area());
        self.for_each_pixel(region, |_, pixel| values.push(selector.select(pixel)));

        Ok(values)
    }

    /// Extract a region as rows of values
    ///
    /// # Arguments
    /// * `selector` - Function applied to every pixel
    /// * `region` - Crop rectangle, any field may be omitted
    pub fn extract_grid<S: PixelSelector>(&self, selector: &S,
                                          region: RegionSpec) -> HeightmapResult<GridArray<S::Output>> {
        let region = self.resolve(region)?;
        debug!("Extracting grid array over {:?}", region);

        let mut rows: GridArray<S::Output> = (0..region.height)
            .map(|_| Vec::with_capacity(region.width as usize))
            .collect();
        self.for_each_pixel(region, |r, pixel| rows[r as usize].push(selector.select(pixel)));

        Ok(rows)
    }

    /// Raw bytes of the region, four per pixel
    pub fn flat_array(&self, region: RegionSpec) -> HeightmapResult<FlatArray<u8>> {
        let pixels = self.extract_flat(&RawSelector, region)?;
        Ok(pixels.into_iter().flatten().collect())
    }

    /// Averaged heights of the region as a flat array
    pub fn flat_average_array(&self, region: RegionSpec) -> HeightmapResult<FlatArray<u8>> {
        self.extract_flat(&AverageSelector, region)
    }

    /// One channel of the region as a flat array
    pub fn flat_channel_array<C: IntoChannel>(&self, channel: C,
                                              region: RegionSpec) -> HeightmapResult<FlatArray<u8>> {
        let selector = ChannelSelector::new(channel.into_channel()?);
        self.extract_flat(&selector, region)
    }

    /// RGBA tuples of the region as a flat array
    pub fn flat_rgba_array(&self, region: RegionSpec) -> HeightmapResult<FlatArray<RgbaTuple>> {
        self.extract_flat(&RgbaSelector, region)
    }

    /// Raw pixels of the region as rows
    pub fn array(&self, region: RegionSpec) -> HeightmapResult<GridArray<RgbaTuple>> {
        self.extract_grid(&RawSelector, region)
    }

    /// Averaged heights of the region as rows
    pub fn average_array(&self, region: RegionSpec) -> HeightmapResult<GridArray<u8>> {
        self.extract_grid(&AverageSelector, region)
    }

    /// One channel of the region as rows
    pub fn channel_array<C: IntoChannel>(&self, channel: C,
                                         region: RegionSpec) -> HeightmapResult<GridArray<u8>> {
        let selector = ChannelSelector::new(channel.into_channel()?);
        self.extract_grid(&selector, region)
    }

    /// RGBA tuples of the region as rows
    pub fn rgba_array(&self, region: RegionSpec) -> HeightmapResult<GridArray<RgbaTuple>> {
        self.extract_grid(&RgbaSelector, region)
    }

    /// Extract a region into an exportable array
    ///
    /// # Arguments
    /// * `mode` - Which view to extract
    /// * `region` - Crop rectangle, any field may be omitted
    pub fn array_data(&self, mode: ExtractionMode, region: RegionSpec) -> HeightmapResult<ArrayData> {
        let resolved = self.resolve(region)?;
        let data = match mode {
            ExtractionMode::Raw => self.flat_array(region)?,
            ExtractionMode::Average => self.flat_average_array(region)?,
            ExtractionMode::Channel(channel) => self.flat_channel_array(channel, region)?,
            ExtractionMode::Rgba => self.flat_rgba_array(region)?.into_iter().flatten().collect(),
        };

        ArrayData::new(resolved.width, resolved.height, mode.samples_per_pixel(), data)
    }
}
