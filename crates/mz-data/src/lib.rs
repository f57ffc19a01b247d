//! mz-data: Built-in level catalog
//!
//! Tuning values for every shipped level, from the early easy boards to the
//! large hard ones. The generator itself never reads this crate; hosts turn
//! a [`LevelDef`] into a [`mz_core::LevelConfig`] and build it.

pub mod levels;
pub mod names;

pub use levels::{
    CatalogError, LEVELS, LevelDef, Weights, find_level, get_level, levels_with_difficulty,
    num_levels,
};
pub use names::display_name;
