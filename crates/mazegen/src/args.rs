//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mz_core::Difficulty;

/// Deterministic maze level generator
#[derive(Parser, Debug)]
#[command(name = "mazegen")]
#[command(author, version, about = "Generate maze levels from the catalog or a config file", long_about = None)]
pub struct Args {
    /// Increase log detail (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the built-in levels
    List {
        /// Only levels of this difficulty (easy, medium, hard)
        #[arg(short = 'd', long = "difficulty")]
        difficulty: Option<Difficulty>,
    },

    /// Build one level
    Generate {
        /// Catalog level id
        #[arg(short = 'l', long = "level", conflicts_with = "config")]
        level: Option<u32>,

        /// Catalog level name, with or without the difficulty prefix
        #[arg(short = 'n', long = "name", conflicts_with_all = ["level", "config"])]
        name: Option<String>,

        /// JSON level config file
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,

        /// Replace the level's seed
        #[arg(short = 's', long = "seed")]
        seed: Option<u32>,

        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Summary)]
        format: OutputFormat,
    },

    /// Build every catalog level
    Catalog {
        #[arg(short = 'f', long = "format", value_enum, default_value_t = CatalogFormat::Summary)]
        format: CatalogFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Ascii,
    Summary,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Summary,
}
