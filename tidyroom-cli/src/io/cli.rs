use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Catalog of room templates, the built-in rooms are used when omitted
    #[arg(short = 't', long, value_name = "FILE")]
    pub catalog_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate the room of a day and write it as JSON and SVG
    Generate {
        /// Day to generate (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<Date>,
        #[arg(short, long, value_name = "FOLDER", default_value = "rooms")]
        output_folder: PathBuf,
    },
    /// List the templates of the catalog
    Templates,
    /// Print a single template as JSON
    Show { id: String },
}
