use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use heightkit::config::HeightkitConfig;
use heightkit::utils::logger::Logger;
use heightkit::commands::{CommandFactory, HeightkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("heightkit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Extract heightmap arrays from images")
        .arg(
            Arg::new("input")
                .help("Input image file or file:// URL")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract array data instead of inspecting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output array file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .help("Values to extract (average, red, green, blue, alpha, rgba, raw)")
                .value_name("MODE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Format for array output (csv, json, npy)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("layout")
                .long("layout")
                .help("Array layout (grid or flat)")
                .value_name("LAYOUT")
                .required(false),
        )
        .arg(
            Arg::new("region")
                .short('r')
                .long("region")
                .help("Crop region as x,y,w,h; empty fields extend to the edge")
                .value_name("X,Y,W,H")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file (defaults to heightkit.toml if present)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Also write command results to this file")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let config = match HeightkitConfig::load(matches.get_one::<String>("config").map(String::as_str)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        config.logging.level
    };

    match &config.logging.file {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => Logger::init_console(level),
    }

    let logger = match matches.get_one::<String>("report") {
        Some(report_file) => match Logger::new(report_file) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing report file: {}", e);
                process::exit(1);
            }
        },
        None => Logger::disabled(),
    };

    let factory = HeightkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &config, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
