//! Region structures for defining the extraction area
//!
//! A `Region` is a resolved rectangle in pixel coordinates, with (0,0) at the
//! top-left corner of the raster. A `RegionSpec` is what callers pass in: any
//! of its four fields may be left out and is filled in against the raster
//! dimensions when the region is resolved.

use log::debug;

use crate::errors::{HeightmapError, HeightmapResult};

/// Region for extraction (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    ///
    /// Returns `None` if the sum overflows `u32`.
    pub fn end_x(&self) -> Option<u32> {
        self.x.checked_add(self.width)
    }

    /// Get the bottommost Y coordinate (exclusive)
    ///
    /// Returns `None` if the sum overflows `u32`.
    pub fn end_y(&self) -> Option<u32> {
        self.y.checked_add(self.height)
    }

    /// Number of pixels covered by the region
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that the region lies inside a raster of the given size
    ///
    /// # Returns
    /// The region itself, or `RegionOutOfBounds` if any edge falls outside
    pub fn validate(self, width: u32, height: u32) -> HeightmapResult<Self> {
        let fits_x = self.end_x().map_or(false, |end| end <= width);
        let fits_y = self.end_y().map_or(false, |end| end <= height);

        if fits_x && fits_y {
            Ok(self)
        } else {
            Err(HeightmapError::RegionOutOfBounds { region: self, width, height })
        }
    }
}

/// Partially specified crop rectangle
///
/// Each field is independent. Omitted fields default to `x = 0`, `y = 0`,
/// `width` = remaining width from `x`, `height` = remaining height from `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionSpec {
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl RegionSpec {
    /// Create a spec from four optional values
    pub fn new(x: Option<u32>, y: Option<u32>, width: Option<u32>, height: Option<u32>) -> Self {
        RegionSpec { x, y, width, height }
    }

    /// Spec selecting the full raster
    pub fn full() -> Self {
        RegionSpec::default()
    }

    /// Set the left edge
    pub fn x(mut self, x: u32) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the top edge
    pub fn y(mut self, y: u32) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the width
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Whether no field is set
    pub fn is_full(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.width.is_none() && self.height.is_none()
    }

    /// Resolve the spec against a raster and validate the result
    ///
    /// # Arguments
    /// * `raster_width` - Width of the raster in pixels
    /// * `raster_height` - Height of the raster in pixels
    ///
    /// # Returns
    /// The concrete region, or `RegionOutOfBounds` when it does not fit
    pub fn resolve(&self, raster_width: u32, raster_height: u32) -> HeightmapResult<Region> {
        let x = self.x.unwrap_or(0);
        let y = self.y.unwrap_or(0);

        let region = Region {
            x,
            y,
            width: self.width.unwrap_or_else(|| raster_width.saturating_sub(x)),
            height: self.height.unwrap_or_else(|| raster_height.saturating_sub(y)),
        };

        // An origin past the edge is out of bounds even when the defaulted size is zero
        if x > raster_width || y > raster_height {
            return Err(HeightmapError::RegionOutOfBounds {
                region,
                width: raster_width,
                height: raster_height,
            });
        }

        debug!("Resolved region {:?} against {}x{}", region, raster_width, raster_height);
        region.validate(raster_width, raster_height)
    }
}

impl From<Region> for RegionSpec {
    fn from(region: Region) -> Self {
        RegionSpec::new(Some(region.x), Some(region.y), Some(region.width), Some(region.height))
    }
}

impl From<(u32, u32, u32, u32)> for RegionSpec {
    fn from((x, y, width, height): (u32, u32, u32, u32)) -> Self {
        RegionSpec::new(Some(x), Some(y), Some(width), Some(height))
    }
}

impl From<Option<Region>> for RegionSpec {
    fn from(region: Option<Region>) -> Self {
        region.map(RegionSpec::from).unwrap_or_default()
    }
}
