use image::DynamicImage;
use log::{debug, info};

use crate::errors::{HeightmapError, HeightmapResult};
use crate::extractor::{
    ArrayData, ExtractionMode, FlatArray, GridArray, IntoChannel, RegionExtractor, RegionSpec,
    RgbaTuple,
};
use crate::source::{PixelSource, RasterBuffer, SourceInput};

/// Lifecycle stage of a heightmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightmapState {
    /// No source set
    Empty,
    /// Source set but not drawn
    Sourced,
    /// Raster buffer available
    Ready,
}

/// Main interface to the heightkit library
///
/// A heightmap moves from `Empty` to `Sourced` with [`Heightmap::use_source`]
/// and from `Sourced` to `Ready` with [`Heightmap::draw`]. Extraction is only
/// possible once it is `Ready`.
#[derive(Debug, Clone)]
pub struct Heightmap {
    /// Decoded source image
    source: Option<DynamicImage>,
    /// Raster drawn from `source`, never set without it
    raster: Option<RasterBuffer>,
}

impl Default for Heightmap {
    fn default() -> Self {
        Heightmap::new()
    }
}

impl Heightmap {
    /// Create an empty heightmap
    pub fn new() -> Self {
        Heightmap {
            source: None,
            raster: None,
        }
    }

    /// Load a source and return a heightmap ready for extraction
    ///
    /// # Arguments
    /// * `source` - Path, URL, decoded image or raster
    pub fn open<S: Into<SourceInput>>(source: S) -> HeightmapResult<Self> {
        let mut heightmap = Heightmap::new();
        heightmap.use_source(source)?;
        heightmap.draw()?;
        Ok(heightmap)
    }

    /// Current lifecycle stage
    pub fn state(&self) -> HeightmapState {
        match (&self.source, &self.raster) {
            (None, _) => HeightmapState::Empty,
            (Some(_), None) => HeightmapState::Sourced,
            (Some(_), Some(_)) => HeightmapState::Ready,
        }
    }

    /// Set the image source
    ///
    /// Any previously drawn raster is discarded, so the heightmap has to be
    /// drawn again before extraction.
    ///
    /// # Arguments
    /// * `source` - Path, URL, decoded image or raster
    ///
    /// # Returns
    /// The decoded source image, or `SourceAcquisition` on failure. On failure
    /// the previous state is kept.
    pub fn use_source<S: Into<SourceInput>>(&mut self, source: S) -> HeightmapResult<&DynamicImage> {
        let input: SourceInput = source.into();
        let image = input.acquire()?;
        info!("Using {}x{} source image", image.width(), image.height());

        self.raster = None;
        Ok(&*self.source.insert(image))
    }

    /// Rasterize the source into RGBA pixel memory
    ///
    /// # Returns
    /// The raster buffer, or `MissingSource` if no source was set
    pub fn draw(&mut self) -> HeightmapResult<&RasterBuffer> {
        let image = self.source.as_ref().ok_or(HeightmapError::MissingSource)?;

        let raster = RasterBuffer::from_image(image);
        debug!("Drew source to {}x{} raster", raster.width(), raster.height());

        Ok(&*self.raster.insert(raster))
    }

    /// The source image, once set
    pub fn source(&self) -> Option<&DynamicImage> {
        self.source.as_ref()
    }

    /// The raster buffer, once drawn
    pub fn raster(&self) -> Option<&RasterBuffer> {
        self.raster.as_ref()
    }

    /// Extractor over the drawn raster
    ///
    /// # Returns
    /// The extractor, or `NotReady` before [`Heightmap::draw`]
    pub fn extractor(&self) -> HeightmapResult<RegionExtractor<'_>> {
        RegionExtractor::new(self)
    }

    /// Raw bytes of the region, four per pixel
    pub fn flat_array<R: Into<RegionSpec>>(&self, region: R) -> HeightmapResult<FlatArray<u8>> {
        self.extractor()?.flat_array(region.into())
    }

    /// Averaged heights of the region as a flat array
    pub fn flat_average_array<R: Into<RegionSpec>>(&self, region: R) -> HeightmapResult<FlatArray<u8>> {
        self.extractor()?.flat_average_array(region.into())
    }

    /// One channel of the region as a flat array
    pub fn flat_channel_array<C: IntoChannel, R: Into<RegionSpec>>(&self, channel: C,
                                                                    region: R) -> HeightmapResult<FlatArray<u8>> {
        self.extractor()?.flat_channel_array(channel, region.into())
    }

    /// RGBA tuples of the region as a flat array
    pub fn flat_rgba_array<R: Into<RegionSpec>>(&self, region: R) -> HeightmapResult<FlatArray<RgbaTuple>> {
        self.extractor()?.flat_rgba_array(region.into())
    }

    /// Raw pixels of the region as rows
    pub fn array<R: Into<RegionSpec>>(&self, region: R) -> HeightmapResult<GridArray<RgbaTuple>> {
        self.extractor()?.array(region.into())
    }

    /// Averaged heights of the region as rows
    pub fn average_array<R: Into<RegionSpec>>(&self, region: R) -> HeightmapResult<GridArray<u8>> {
        self.extractor()?.average_array(region.into())
    }

    /// One channel of the region as rows
    pub fn channel_array<C: IntoChannel, R: Into<RegionSpec>>(&self, channel: C,
                                                               region: R) -> HeightmapResult<GridArray<u8>> {
        self.extractor()?.channel_array(channel, region.into())
    }

    /// RGBA tuples of the region as rows
    pub fn rgba_array<R: Into<RegionSpec>>(&self, region: R) -> HeightmapResult<GridArray<RgbaTuple>> {
        self.extractor()?.rgba_array(region.into())
    }

    /// Extract a region into an exportable array
    pub fn array_data<R: Into<RegionSpec>>(&self, mode: ExtractionMode, region: R) -> HeightmapResult<ArrayData> {
        self.extractor()?.array_data(mode, region.into())
    }
}

impl PixelSource for Heightmap {
    fn is_ready(&self) -> bool {
        self.raster.is_some()
    }

    fn dimensions(&self) -> (u32, u32) {
        match (&self.raster, &self.source) {
            (Some(raster), _) => (raster.width(), raster.height()),
            (None, Some(image)) => (image.width(), image.height()),
            (None, None) => (0, 0),
        }
    }

    fn rgba_buffer(&self) -> Option<&[u8]> {
        self.raster().map(RasterBuffer::as_bytes)
    }
}
