//! Custom error types for heightmap processing

use std::fmt;
use std::io;

use crate::extractor::Region;

/// Heightmap-specific error types
#[derive(Debug)]
pub enum HeightmapError {
    /// I/O error
    IoError(io::Error),
    /// Extraction attempted before the source was rasterized
    NotReady,
    /// Rasterization attempted before a source was set
    MissingSource,
    /// Channel tag outside of red, green, blue, alpha
    InvalidChannel(String),
    /// The image could not be loaded or decoded
    SourceAcquisition(String),
    /// Raw RGBA buffer does not match its declared dimensions
    InvalidBufferLength { expected: usize, actual: usize },
    /// Crop region reaches outside of the raster
    RegionOutOfBounds { region: Region, width: u32, height: u32 },
    /// Region text could not be parsed
    InvalidRegion(String),
    /// Configuration file problem
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for HeightmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeightmapError::IoError(e) => write!(f, "I/O error: {}", e),
            HeightmapError::NotReady => write!(f, "Raster is not ready, draw the source first"),
            HeightmapError::MissingSource => write!(f, "Source is not specified"),
            HeightmapError::InvalidChannel(c) => write!(f, "Unknown channel: {}", c),
            HeightmapError::SourceAcquisition(msg) => write!(f, "Failed to acquire source: {}", msg),
            HeightmapError::InvalidBufferLength { expected, actual } =>
                write!(f, "Invalid RGBA buffer length: expected {} bytes, got {}", expected, actual),
            HeightmapError::RegionOutOfBounds { region, width, height } =>
                write!(f, "Region ({},{} - {}x{}) exceeds raster dimensions ({}x{})",
                       region.x, region.y, region.width, region.height, width, height),
            HeightmapError::InvalidRegion(msg) => write!(f, "Invalid region: {}", msg),
            HeightmapError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            HeightmapError::GenericError(msg) => write!(f, "Heightmap error: {}", msg),
        }
    }
}

impl std::error::Error for HeightmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeightmapError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HeightmapError {
    fn from(error: io::Error) -> Self {
        HeightmapError::IoError(error)
    }
}

impl From<image::ImageError> for HeightmapError {
    fn from(error: image::ImageError) -> Self {
        HeightmapError::SourceAcquisition(error.to_string())
    }
}

impl From<String> for HeightmapError {
    fn from(msg: String) -> Self {
        HeightmapError::GenericError(msg)
    }
}

/// Result type for heightmap operations
pub type HeightmapResult<T> = Result<T, HeightmapError>;
