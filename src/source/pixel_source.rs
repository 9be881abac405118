//! Boundary between pixel acquisition and extraction

use crate::extractor::RgbaTuple;

/// Anything that can hand out a rasterized RGBA buffer
///
/// The buffer is row-major, top-to-bottom, four bytes per pixel in
/// [R, G, B, A] order, and `4 * width * height` bytes long.
pub trait PixelSource {
    /// Whether a rasterized buffer is available
    fn is_ready(&self) -> bool;

    /// Raster dimensions as (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// The RGBA bytes, or `None` while the source is not ready
    fn rgba_buffer(&self) -> Option<&[u8]>;

    /// Read a single pixel
    ///
    /// # Returns
    /// The pixel at (`row`, `col`), or `None` if out of bounds or not ready
    fn read_pixel(&self, row: u32, col: u32) -> Option<RgbaTuple> {
        let (width, height) = self.dimensions();
        if row >= height || col >= width {
            return None;
        }

        let offset = 4 * (row as usize * width as usize + col as usize);
        let bytes = self.rgba_buffer()?.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}
