use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use jiff::Zoned;
use jiff::civil::Date;
use log::{info, warn};
use tidyroom::generator::DailyRoomGenerator;
use tidyroom::io::export::{export_room, export_template};
use tidyroom::io::svg::room_to_svg;
use tidyroom_cli::config::CliConfig;
use tidyroom_cli::io;
use tidyroom_cli::io::cli::{Cli, Command};
use tidyroom_cli::io::output::RoomOutput;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed CliConfig: {config:?}");

    let catalog = io::read_catalog(args.catalog_file.as_deref())?;
    let generator = DailyRoomGenerator::new(catalog, config.generator)?;

    match args.command {
        Command::Generate {
            date,
            output_folder,
        } => {
            let date = date.unwrap_or_else(|| Zoned::now().date());
            main_generate(&generator, config, date, output_folder)
        }
        Command::Templates => {
            for summary in generator.list_templates() {
                println!("{:<16}{:<16}{}", summary.id, summary.name, summary.description);
            }
            Ok(())
        }
        Command::Show { id } => {
            let template = generator
                .template_by_id(&id)
                .with_context(|| format!("no template with id {id:?}"))?;
            println!("{}", serde_json::to_string_pretty(&export_template(template))?);
            Ok(())
        }
    }
}

fn main_generate(
    generator: &DailyRoomGenerator,
    config: CliConfig,
    date: Date,
    output_folder: PathBuf,
) -> Result<()> {
    if !output_folder.exists() {
        fs::create_dir_all(&output_folder)
            .with_context(|| format!("could not create output folder: {}", output_folder.display()))?;
    }

    let room = generator.room_for_date(date);

    {
        let output = RoomOutput {
            date: date.to_string(),
            room: export_room(&room),
            config,
        };
        let json_path = output_folder.join(format!("room_{date}.json"));
        io::write_json(&output, Path::new(&json_path))?;
    }

    {
        let svg_path = output_folder.join(format!("room_{date}.svg"));
        let svg = room_to_svg(&room, config.svg_draw_options);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
