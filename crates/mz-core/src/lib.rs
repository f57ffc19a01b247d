//! mz-core: Deterministic maze level generation
//!
//! This crate contains the whole generation pipeline with no I/O
//! dependencies. A validated [`LevelConfig`] is carved into a spanning-tree
//! maze, loosened with loops, shaped by its terrain profiles, sealed and
//! pruned to what the start can reach, and checked against difficulty
//! thresholds. The result is converted to pixel-space wall rectangles.

pub mod analysis;
pub mod carve;
pub mod consts;
pub mod errors;
pub mod generator;
pub mod grid;
pub mod level;
pub mod sculpt;
pub mod walls;

pub use errors::{ConfigError, PathError};
pub use generator::{GeneratedLayout, GenerationOutcome, GenerationReport, generate_layout};
pub use grid::{Cell, Direction, OpenGrid};
pub use level::{
    Difficulty, LevelConfig, LevelOutput, ProfileSpec, ValidatedConfig, generate_level,
    grid_side_for,
};
pub use sculpt::TerrainProfile;
pub use walls::WallRect;
