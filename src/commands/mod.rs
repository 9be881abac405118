//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod inspect_command;
pub mod extract_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use extract_command::ExtractCommand;

use clap::ArgMatches;
use crate::config::HeightkitConfig;
use crate::errors::HeightmapResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct HeightkitCommandFactory;

impl HeightkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        HeightkitCommandFactory
    }
}

impl Default for HeightkitCommandFactory {
    fn default() -> Self {
        HeightkitCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for HeightkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &HeightkitConfig,
                      logger: &'a Logger) -> HeightmapResult<Box<dyn Command + 'a>> {
        if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, config, logger)?))
        } else {
            // Default to inspect command
            Ok(Box::new(InspectCommand::new(args, config, logger)?))
        }
    }
}

/// Region from the `--region` argument, or the configured default
pub(crate) fn region_from_args(args: &ArgMatches, config: &HeightkitConfig) -> HeightmapResult<crate::extractor::RegionSpec> {
    match args.get_one::<String>("region") {
        Some(text) => crate::utils::region_parser::parse_region(text),
        None => Ok(config.extract.region),
    }
}
