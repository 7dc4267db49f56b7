use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use svg::Document;
use tidyroom::catalog::TemplateCatalog;
use tidyroom::io::ext_repr::ExtCatalog;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("could not open file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("could not parse file: {}", path.display()))
}

/// Reads a catalog file, or returns the built-in catalog when no path is given.
pub fn read_catalog(path: Option<&Path>) -> Result<TemplateCatalog> {
    match path {
        None => Ok(TemplateCatalog::builtin()),
        Some(path) => {
            let ext_catalog: ExtCatalog = read_json(path)?;
            let catalog = tidyroom::io::import::import_catalog(&ext_catalog)
                .with_context(|| format!("invalid catalog: {}", path.display()))?;
            info!("[CATALOG] loaded {} templates from {}", catalog.len(), path.display());
            Ok(catalog)
        }
    }
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not open file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write file: {}", path.display()))?;

    info!("[IO] room written to file://{}", fs::canonicalize(path)?.to_string_lossy());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg: {}", path.display()))?;
    info!("[IO] preview written to file://{}", fs::canonicalize(path)?.to_string_lossy());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<25}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
