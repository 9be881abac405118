//! Rasterized RGBA pixel memory

use image::{DynamicImage, Rgba, RgbaImage};
use log::debug;

use crate::errors::{HeightmapError, HeightmapResult};

use super::pixel_source::PixelSource;

/// Immutable RGBA raster
///
/// Produced once when a source is drawn and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    /// Row-major RGBA pixels
    pixels: RgbaImage,
}

impl RasterBuffer {
    /// Rasterize a decoded image
    ///
    /// Images that are not 8-bit RGBA are converted, so every source ends up
    /// with the same four-bytes-per-pixel layout.
    pub fn from_image(image: &DynamicImage) -> Self {
        let pixels = image.to_rgba8();
        debug!("Rasterized {}x{} image ({:?})", pixels.width(), pixels.height(), image.color());

        RasterBuffer { pixels }
    }

    /// Wrap an existing RGBA byte buffer
    ///
    /// # Arguments
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `data` - Row-major RGBA bytes
    ///
    /// # Returns
    /// The raster, or `InvalidBufferLength` if `data` is not `4 * width * height` bytes
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> HeightmapResult<Self> {
        let expected = 4 * width as usize * height as usize;
        let actual = data.len();
        if actual != expected {
            return Err(HeightmapError::InvalidBufferLength { expected, actual });
        }

        let pixels = RgbaImage::from_raw(width, height, data)
            .ok_or(HeightmapError::InvalidBufferLength { expected, actual })?;
        Ok(RasterBuffer { pixels })
    }

    /// Build a raster by evaluating `f(col, row)` for every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        RasterBuffer {
            pixels: RgbaImage::from_fn(width, height, |col, row| Rgba(f(col, row))),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Raw RGBA bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Convert back into an image
    pub fn into_image(self) -> DynamicImage {
        DynamicImage::ImageRgba8(self.pixels)
    }
}

impl PixelSource for RasterBuffer {
    fn is_ready(&self) -> bool {
        true
    }

    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn rgba_buffer(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_checks_length() {
        let result = RasterBuffer::from_raw(2, 2, vec![0; 15]);
        match result {
            Err(HeightmapError::InvalidBufferLength { expected, actual }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("expected InvalidBufferLength, got {:?}", other),
        }
    }

    #[test]
    fn test_from_image_converts_to_rgba() {
        let gray = image::GrayImage::from_fn(3, 2, |x, y| image::Luma([(x + 10 * y) as u8]));
        let raster = RasterBuffer::from_image(&DynamicImage::ImageLuma8(gray));

        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.as_bytes().len(), 24);
        assert_eq!(raster.read_pixel(1, 2), Some([12, 12, 12, 255]));
    }

    #[test]
    fn test_read_pixel_out_of_bounds() {
        let raster = RasterBuffer::from_fn(2, 2, |x, y| [x as u8, y as u8, 0, 255]);
        assert_eq!(raster.read_pixel(1, 0), Some([0, 1, 0, 255]));
        assert_eq!(raster.read_pixel(2, 0), None);
        assert_eq!(raster.read_pixel(0, 2), None);
    }

    #[test]
    fn test_into_image_keeps_pixels() {
        let raster = RasterBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 7, 255]);
        let image = raster.clone().into_image();

        assert_eq!((image.width(), image.height()), (3, 2));
        assert_eq!(image.to_rgba8().get_pixel(2, 1), &Rgba([2, 1, 7, 255]));
        assert_eq!(RasterBuffer::from_image(&image), raster);
    }
}
