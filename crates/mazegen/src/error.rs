//! CLI error type

use std::io;
use std::path::PathBuf;

use mz_core::ConfigError;
use mz_data::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("pass one of --level <id>, --name <name> or --config <file>")]
    NoSource,

    #[error("cannot read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid level config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
