//! mazegen: command line front end
//!
//! Lists the built-in catalog, builds single levels from the catalog or a
//! JSON config file, and renders them as JSON, ASCII or a one-line summary.

pub mod args;
pub mod error;
pub mod render;

use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use mz_core::{LevelConfig, LevelOutput};
use mz_data::{LEVELS, LevelDef};

pub use args::{Args, CatalogFormat, Command, OutputFormat};
pub use error::CliError;

/// Log filter for a `-v` count
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Read a level config from a JSON file
pub fn load_config(path: &Path) -> Result<LevelConfig, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn build(config: &LevelConfig) -> Result<LevelOutput, CliError> {
    info!("building level {} ({})", config.id, config.name);
    Ok(config.build()?)
}

/// Execute a parsed command, writing everything to `out`
pub fn run(command: &Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::List { difficulty } => {
            let levels: Vec<&LevelDef> = match difficulty {
                Some(difficulty) => mz_data::levels_with_difficulty(*difficulty).collect(),
                None => LEVELS.iter().collect(),
            };
            for level in levels {
                writeln!(out, "{}", render::catalog_line(level))?;
            }
        }
        Command::Generate {
            level,
            name,
            config,
            seed,
            format,
        } => {
            let mut cfg = match (level, name, config) {
                (Some(id), _, _) => mz_data::get_level(*id)?.to_config(),
                (None, Some(name), _) => mz_data::find_level(name)?.to_config(),
                (None, None, Some(path)) => load_config(path)?,
                (None, None, None) => return Err(CliError::NoSource),
            };
            if let Some(seed) = seed {
                cfg = cfg.with_seed(*seed);
            }
            let output = build(&cfg)?;
            match format {
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?,
                OutputFormat::Ascii => {
                    writeln!(out, "{}", render::summary_line(&output))?;
                    write!(out, "{}", output.preview())?;
                }
                OutputFormat::Summary => writeln!(out, "{}", render::summary_line(&output))?,
            }
        }
        Command::Catalog { format } => {
            let outputs = LEVELS
                .iter()
                .map(|level| build(&level.to_config()))
                .collect::<Result<Vec<_>, _>>()?;
            match format {
                CatalogFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&outputs)?)?
                }
                CatalogFormat::Summary => {
                    for output in &outputs {
                        writeln!(out, "{}", render::summary_line(output))?;
                    }
                }
            }
        }
    }
    Ok(())
}
