//! Source inputs and their acquisition

use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::{debug, info, warn};

use crate::errors::{HeightmapError, HeightmapResult};

use super::raster::RasterBuffer;

/// Everything a heightmap can be built from
#[derive(Debug, Clone)]
pub enum SourceInput {
    /// Filesystem path or `file://` URL of an encoded image
    Url(String),
    /// Image that has already been decoded
    DecodedImage(DynamicImage),
    /// Pixels that are already rasterized as RGBA
    Raster(RasterBuffer),
}

impl SourceInput {
    /// Resolve the input into a decoded image
    ///
    /// # Returns
    /// The decoded image, or `SourceAcquisition` if it cannot be loaded
    pub fn acquire(self) -> HeightmapResult<DynamicImage> {
        match self {
            SourceInput::Url(url) => {
                let path = Self::url_to_path(&url)?;
                info!("Loading image from {}", path.display());

                let image = image::open(&path).map_err(|e| {
                    warn!("Failed to load {}: {}", path.display(), e);
                    HeightmapError::SourceAcquisition(format!("{}: {}", path.display(), e))
                })?;

                debug!("Decoded {}x{} image", image.width(), image.height());
                Ok(image)
            },
            SourceInput::DecodedImage(image) => {
                debug!("Using decoded {}x{} image", image.width(), image.height());
                Ok(image)
            },
            SourceInput::Raster(raster) => {
                debug!("Using {}x{} raster", raster.width(), raster.height());
                Ok(raster.into_image())
            },
        }
    }

    /// Map a URL onto a local path
    ///
    /// Plain paths and `file://` URLs are accepted; any other scheme is
    /// rejected since no network access is performed.
    fn url_to_path(url: &str) -> HeightmapResult<PathBuf> {
        if let Some(path) = url.strip_prefix("file://") {
            return Ok(PathBuf::from(path));
        }

        if let Some((scheme, _)) = url.split_once("://") {
            return Err(HeightmapError::SourceAcquisition(
                format!("Unsupported URL scheme '{}' in {}", scheme, url)));
        }

        Ok(PathBuf::from(url))
    }
}

impl From<&str> for SourceInput {
    fn from(url: &str) -> Self {
        SourceInput::Url(url.to_string())
    }
}

impl From<String> for SourceInput {
    fn from(url: String) -> Self {
        SourceInput::Url(url)
    }
}

impl From<&Path> for SourceInput {
    fn from(path: &Path) -> Self {
        SourceInput::Url(path.to_string_lossy().into_owned())
    }
}

impl From<DynamicImage> for SourceInput {
    fn from(image: DynamicImage) -> Self {
        SourceInput::DecodedImage(image)
    }
}

impl From<RasterBuffer> for SourceInput {
    fn from(raster: RasterBuffer) -> Self {
        SourceInput::Raster(raster)
    }
}
