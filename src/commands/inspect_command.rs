//! Image inspection command
//!
//! Prints the dimensions of a source image and height statistics for the
//! selected region.

use clap::ArgMatches;
use log::{debug, info};

use crate::api::Heightmap;
use crate::commands::command_traits::Command;
use crate::config::HeightkitConfig;
use crate::errors::{HeightmapError, HeightmapResult};
use crate::extractor::{ArrayData, Channel, ExtractionMode, RegionSpec};
use crate::source::PixelSource;
use crate::utils::logger::Logger;

/// Command for inspecting a source image
pub struct InspectCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Region to summarize
    region: RegionSpec,
    /// Whether to include per-channel statistics
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Settings loaded from the configuration file
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, config: &HeightkitConfig, logger: &'a Logger) -> HeightmapResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| HeightmapError::GenericError("Missing input file".to_string()))?
            .clone();

        let region = super::region_from_args(args, config)?;
        let verbose = args.get_flag("verbose");

        Ok(InspectCommand {
            input_file,
            region,
            verbose,
            logger,
        })
    }

    /// Format min/max/mean of an array as a report line
    fn describe(label: &str, data: &ArrayData) -> String {
        match data.statistics() {
            Some((min, max, mean)) => format!("  {}: min={}, max={}, mean={:.2}", label, min, max, mean),
            None => format!("  {}: empty region", label),
        }
    }

    /// Build the inspection report
    pub fn report(&self, heightmap: &Heightmap) -> HeightmapResult<String> {
        let (width, height) = heightmap.dimensions();
        let extractor = heightmap.extractor()?;
        let region = extractor.resolve(self.region)?;

        let mut lines = vec![
            format!("Image: {}", self.input_file),
            format!("  Dimensions: {}x{}", width, height),
        ];
        if let Some(source) = heightmap.source() {
            lines.push(format!("  Color type: {:?}", source.color()));
        }
        lines.push(format!("  Region: x={}, y={}, width={}, height={}",
                           region.x, region.y, region.width, region.height));

        let heights = extractor.array_data(ExtractionMode::Average, self.region)?;
        lines.push(Self::describe("Height", &heights));

        if self.verbose {
            for channel in Channel::ALL {
                debug!("Collecting statistics for {} channel", channel);
                let data = extractor.array_data(ExtractionMode::Channel(channel), self.region)?;
                lines.push(Self::describe(channel.name(), &data));
            }
        }

        Ok(lines.join("\n"))
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> HeightmapResult<()> {
        info!("Inspecting {}", self.input_file);

        let heightmap = Heightmap::open(self.input_file.as_str())?;
        let report = self.report(&heightmap)?;

        println!("{}", report);
        self.logger.log(&report)?;

        Ok(())
    }
}
