//! Per-pixel selectors
//!
//! Every extraction view runs the same crop-and-iterate loop; what differs is
//! the function applied to each RGBA pixel. Each such function is a
//! `PixelSelector`.

use std::fmt;
use std::str::FromStr;

use crate::errors::HeightmapError;

use super::channel::Channel;

/// Four raw bytes of a pixel in [R, G, B, A] order
pub type RgbaTuple = [u8; 4];

/// Strategy applied to every pixel of a region
pub trait PixelSelector {
    /// Value produced for a single pixel
    type Output;

    /// Map one pixel to its output value
    fn select(&self, pixel: &RgbaTuple) -> Self::Output;
}

/// Mean of the red, green and blue bytes, rounded to nearest
///
/// `(r + g + b) / 3` never has a fractional part of exactly one half,
/// so adding one before the integer division rounds correctly.
pub fn average_rgb(pixel: &RgbaTuple) -> u8 {
    let sum = pixel[0] as u16 + pixel[1] as u16 + pixel[2] as u16;
    ((sum + 1) / 3) as u8
}

/// Identity selector yielding the raw pixel bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSelector;

impl PixelSelector for RawSelector {
    type Output = RgbaTuple;

    fn select(&self, pixel: &RgbaTuple) -> RgbaTuple {
        *pixel
    }
}

/// Grayscale selector averaging the color channels
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageSelector;

impl PixelSelector for AverageSelector {
    type Output = u8;

    fn select(&self, pixel: &RgbaTuple) -> u8 {
        average_rgb(pixel)
    }
}

/// Selector picking a single channel byte
#[derive(Debug, Clone, Copy)]
pub struct ChannelSelector {
    offset: usize,
}

impl ChannelSelector {
    pub fn new(channel: Channel) -> Self {
        ChannelSelector { offset: channel.offset() }
    }
}

impl PixelSelector for ChannelSelector {
    type Output = u8;

    fn select(&self, pixel: &RgbaTuple) -> u8 {
        pixel[self.offset]
    }
}

/// Selector packing the pixel as an RGBA tuple
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbaSelector;

impl PixelSelector for RgbaSelector {
    type Output = RgbaTuple;

    fn select(&self, pixel: &RgbaTuple) -> RgbaTuple {
        [pixel[0], pixel[1], pixel[2], pixel[3]]
    }
}

/// Which view to extract when exporting arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Raw pixel bytes
    Raw,
    /// Averaged grayscale height
    Average,
    /// A single channel
    Channel(Channel),
    /// Packed RGBA tuples
    Rgba,
}

impl ExtractionMode {
    /// Number of values stored per pixel for this mode
    pub fn samples_per_pixel(self) -> usize {
        match self {
            ExtractionMode::Raw | ExtractionMode::Rgba => 4,
            ExtractionMode::Average | ExtractionMode::Channel(_) => 1,
        }
    }
}

impl Default for ExtractionMode {
    fn default() -> Self {
        ExtractionMode::Average
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMode::Raw => f.write_str("raw"),
            ExtractionMode::Average => f.write_str("average"),
            ExtractionMode::Channel(channel) => write!(f, "{}", channel),
            ExtractionMode::Rgba => f.write_str("rgba"),
        }
    }
}

impl FromStr for ExtractionMode {
    type Err = HeightmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(ExtractionMode::Raw),
            "average" | "avg" | "gray" | "grey" => Ok(ExtractionMode::Average),
            "rgba" => Ok(ExtractionMode::Rgba),
            other => other
                .parse::<Channel>()
                .map(ExtractionMode::Channel)
                .map_err(|_| HeightmapError::GenericError(format!("Unknown extraction mode: {}", s))),
        }
    }
}
