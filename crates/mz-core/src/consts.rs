//! Generation constants
//!
//! Tuning values shared by the pipeline stages and the level assembly.

use crate::grid::Cell;

/// The fixed start cell, just inside the top-left corner
pub const START_CELL: Cell = Cell::new(1, 1);

/// Side of one fine grid cell in pixels
pub const CELL_SIZE: u32 = 20;

/// Radius of the start marker in pixels
pub const START_RADIUS: u32 = 8;

/// Smallest fine grid side that still has an interior to carve
pub const MIN_GRID_SIDE: usize = 5;

/// Number of qualified attempts before falling back
pub const MAX_ATTEMPTS: u32 = 280;

/// Seed stride between successive attempts
pub const ATTEMPT_SEED_STRIDE: u32 = 97;

/// Every this many attempts the loop budget grows by one
pub const LOOP_GROWTH_INTERVAL: u32 = 20;

/// Seed offset used by the fallback layout
pub const FALLBACK_SEED_OFFSET: u32 = 991;

/// Extra loop budget for the fallback layout
pub const FALLBACK_EXTRA_LOOPS: u32 = 8;

/// Penalty per row of distance from the vertical centre when picking a goal
pub const GOAL_CENTER_PENALTY: f64 = 0.35;
