//! Configuration file support
//!
//! Settings are read from a TOML file (`heightkit.toml` by default) with a
//! `[logging]` and an `[extract]` table. Every key is optional; command-line
//! arguments take precedence over the file.

use std::fs;
use std::path::Path;

use log::{debug, info, LevelFilter};

use crate::errors::{HeightmapError, HeightmapResult};
use crate::extractor::{ArrayFormat, ArrayLayout, ExtractionMode, RegionSpec};
use crate::utils::region_parser::parse_region;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "heightkit.toml";

/// Logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Maximum level to record
    pub level: LevelFilter,
    /// Log file path; console logging when `None`
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

/// Extraction defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractConfig {
    pub mode: ExtractionMode,
    pub format: ArrayFormat,
    pub layout: ArrayLayout,
    pub region: RegionSpec,
}

/// Complete heightkit configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeightkitConfig {
    pub logging: LoggingConfig,
    pub extract: ExtractConfig,
}

impl HeightkitConfig {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> HeightmapResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| HeightmapError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = HeightkitConfig::default();

        if let Some(level) = Self::get_str(&toml_value, "logging", "level")? {
            config.logging.level = level
                .parse::<LevelFilter>()
                .map_err(|_| HeightmapError::ConfigError(format!("Unknown log level: {}", level)))?;
        }
        config.logging.file = Self::get_str(&toml_value, "logging", "file")?.map(str::to_string);

        if let Some(mode) = Self::get_str(&toml_value, "extract", "mode")? {
            config.extract.mode = mode.parse().map_err(Self::config_error)?;
        }
        if let Some(format) = Self::get_str(&toml_value, "extract", "format")? {
            config.extract.format = format.parse().map_err(Self::config_error)?;
        }
        if let Some(layout) = Self::get_str(&toml_value, "extract", "layout")? {
            config.extract.layout = layout.parse().map_err(Self::config_error)?;
        }
        if let Some(region) = Self::get_str(&toml_value, "extract", "region")? {
            config.extract.region = parse_region(region).map_err(Self::config_error)?;
        }

        debug!("Parsed configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> HeightmapResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Load configuration, falling back to defaults
    ///
    /// An explicitly requested file must exist. Without one, the default
    /// file is used when present.
    pub fn load(path: Option<&str>) -> HeightmapResult<Self> {
        match path {
            Some(path) => {
                info!("Loading configuration from {}", path);
                Self::from_file(path)
            },
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                info!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
                Self::from_file(DEFAULT_CONFIG_FILE)
            },
            None => Ok(HeightkitConfig::default()),
        }
    }

    /// Look up an optional string key in a table
    fn get_str<'v>(value: &'v toml::Value, table: &str, key: &str) -> HeightmapResult<Option<&'v str>> {
        match value.get(table).and_then(|t| t.get(key)) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(HeightmapError::ConfigError(
                format!("{}.{} must be a string, found {}", table, key, other.type_str()))),
        }
    }

    fn config_error(error: HeightmapError) -> HeightmapError {
        match error {
            HeightmapError::ConfigError(_) => error,
            other => HeightmapError::ConfigError(other.to_string()),
        }
    }
}
