//! Terrain sculptors
//!
//! Independent passes that add or remove open cells after base carving to
//! give each level its character. They draw from the same generator as the
//! carver, in the order the profile lists them.

mod chambers;
mod profile;
mod relics;
mod rune_cross;
mod serpent;

pub use chambers::{add_chambers, carve_room};
pub use profile::{TerrainProfile, apply_profiles};
pub use relics::add_circular_relics;
pub use rune_cross::add_rune_cross;
pub use serpent::add_serpent_cuts;

use mz_rng::SequenceRng;

use crate::grid::OpenGrid;

/// One sculpting pass with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sculptor {
    /// Rectangular rooms with sides in `min_size..=max_size`
    Chambers {
        amount: u32,
        min_size: usize,
        max_size: usize,
    },
    /// Broken horizontal and vertical corridor through the centre
    RuneCross,
    /// Wandering horizontal trenches
    SerpentCuts { bands: u32 },
    /// Circular arena with three broken rings
    CircularRelics,
}

impl Sculptor {
    /// Run this pass on `grid`
    pub fn apply(&self, grid: &mut OpenGrid, rng: &mut SequenceRng) {
        match *self {
            Sculptor::Chambers {
                amount,
                min_size,
                max_size,
            } => add_chambers(grid, rng, amount, min_size, max_size),
            Sculptor::RuneCross => add_rune_cross(grid, rng),
            Sculptor::SerpentCuts { bands } => add_serpent_cuts(grid, rng, bands),
            Sculptor::CircularRelics => add_circular_relics(grid, rng),
        }
    }
}
