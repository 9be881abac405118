//! Array extraction command
//!
//! This module implements the command for extracting heightmap arrays from
//! an image and saving them as CSV, JSON or NPY.

use clap::ArgMatches;
use log::{error, info};

use crate::api::Heightmap;
use crate::commands::command_traits::Command;
use crate::config::HeightkitConfig;
use crate::errors::{HeightmapError, HeightmapResult};
use crate::extractor::{ArrayFormat, ArrayLayout, ExtractionMode, RegionSpec};
use crate::utils::logger::Logger;

/// Command for extracting array data from an image
pub struct ExtractCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file
    output_file: String,
    /// View to extract
    mode: ExtractionMode,
    /// Output file format
    format: ArrayFormat,
    /// Grid or flat output
    layout: ArrayLayout,
    /// Crop region
    region: RegionSpec,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// Arguments override the values from the configuration file.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Settings loaded from the configuration file
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, config: &HeightkitConfig, logger: &'a Logger) -> HeightmapResult<Self> {
        info!("Creating new extract command from arguments");

        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| HeightmapError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| HeightmapError::GenericError("Missing output file path for extraction".to_string()))?
            .clone();
        info!("Output file: {}", output_file);

        let mode = match args.get_one::<String>("mode") {
            Some(mode) => mode.parse()?,
            None => config.extract.mode,
        };
        info!("Extraction mode: {}", mode);

        let format = match args.get_one::<String>("format") {
            Some(format) => format.parse()?,
            None => config.extract.format,
        };
        info!("Array format: {}", format);

        let layout = match args.get_one::<String>("layout") {
            Some(layout) => layout.parse()?,
            None => config.extract.layout,
        };
        info!("Array layout: {}", layout);

        let region = super::region_from_args(args, config)?;
        info!("Region: {:?}", region);

        Ok(ExtractCommand {
            input_file,
            output_file,
            mode,
            format,
            layout,
            region,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> HeightmapResult<()> {
        info!("Extracting {} array from {} to {}", self.mode, self.input_file, self.output_file);

        let heightmap = Heightmap::open(self.input_file.as_str())?;
        let data = heightmap.array_data(self.mode, self.region)?;
        info!("Extracted {}x{} array with {} value(s) per pixel", data.width, data.height, data.samples);

        if let Err(e) = data.save_to_file(&self.output_file, self.format, self.layout) {
            error!("Failed to save array to {}: {}", self.output_file, e);
            return Err(e);
        }

        let message = format!("Saved {}x{} {} array to {}", data.width, data.height, self.mode, self.output_file);
        info!("{}", message);
        self.logger.log(&message)?;

        Ok(())
    }
}
