//! Attempt loop with acceptance thresholds and a guaranteed fallback
//!
//! Each attempt carves a fresh grid from its own seed and runs the whole
//! pipeline: loops, sculptors, border, reachability pruning, goal selection
//! and path analysis. The first attempt whose path meets the thresholds is
//! kept. After [`MAX_ATTEMPTS`] rejections a plainer layout without
//! sculptors is built and always accepted.

use log::{debug, info, warn};
use mz_rng::SequenceRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::{
    DistanceMap, GoalCandidate, PathMetrics, analyze_path, bfs, find_goal_near_right,
    prune_unreachable, reconstruct_path,
};
use crate::carve::{CarveBias, add_loops, carve_perfect_maze, normalize_borders, open_exit};
use crate::consts::{
    ATTEMPT_SEED_STRIDE, FALLBACK_EXTRA_LOOPS, FALLBACK_SEED_OFFSET, LOOP_GROWTH_INTERVAL,
    MAX_ATTEMPTS, START_CELL,
};
use crate::errors::PathError;
use crate::grid::{Cell, OpenGrid};
use crate::sculpt::{TerrainProfile, apply_profiles};

/// Inputs to the attempt loop
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Fine grid side in cells
    pub grid_side: usize,
    pub seed: u32,
    pub loop_count: u32,
    pub min_path_length: usize,
    pub min_turns: usize,
    pub bias: CarveBias,
    pub profiles: Vec<TerrainProfile>,
}

/// How the final layout was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GenerationOutcome {
    /// Attempt number `attempt` (0-based) met every threshold
    Accepted { attempt: u32 },
    /// All attempts were rejected; `corridor` is set when the goal had to
    /// be tunnelled from the farthest reachable cell
    Fallback { corridor: bool },
}

/// Summary of the chosen layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub outcome: GenerationOutcome,
    pub path_length: usize,
    pub turns: usize,
    pub goal: Cell,
}

impl GenerationReport {
    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, GenerationOutcome::Fallback { .. })
    }
}

/// Final grid with start, goal and exit opened
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedLayout {
    pub grid: OpenGrid,
    pub start: Cell,
    pub goal: Cell,
    pub report: GenerationReport,
}

/// Why an attempt was thrown away
#[derive(Debug, Error)]
enum Rejection {
    #[error("no reachable cell next to the right border")]
    NoGoal,
    #[error("path of {length} cells is shorter than {min}")]
    TooShort { length: usize, min: usize },
    #[error("path has {turns} turns, need {min}")]
    TooFewTurns { turns: usize, min: usize },
    #[error("path only goes right and down with at most one turn")]
    Trivial,
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Grid after the shared carve, loop, border and prune stages
struct Shaped {
    grid: OpenGrid,
    search: DistanceMap,
}

/// Carve a grid, add loops, optionally sculpt, then seal and prune it.
fn shape_grid(
    params: &LayoutParams,
    seed: u32,
    loops: u32,
    profiles: &[TerrainProfile],
) -> Shaped {
    let side = params.grid_side;
    let carved = carve_perfect_maze(side, side, seed, &params.bias);
    let mut grid = carved.grid;
    let mut rng: SequenceRng = carved.rng;

    add_loops(&mut grid, &mut rng, loops);
    apply_profiles(&mut grid, &mut rng, profiles);
    normalize_borders(&mut grid);

    let first_scan = bfs(&grid, START_CELL);
    prune_unreachable(&mut grid, &first_scan);
    let search = bfs(&grid, START_CELL);

    Shaped { grid, search }
}

/// Check one shaped grid against the thresholds.
fn evaluate(
    params: &LayoutParams,
    shaped: &Shaped,
) -> Result<(GoalCandidate, PathMetrics), Rejection> {
    let goal = find_goal_near_right(&shaped.grid, &shaped.search).ok_or(Rejection::NoGoal)?;
    let path = reconstruct_path(&shaped.search, goal.cell)?;
    let metrics = analyze_path(&path)?;

    if metrics.length < params.min_path_length {
        return Err(Rejection::TooShort {
            length: metrics.length,
            min: params.min_path_length,
        });
    }
    if metrics.turns < params.min_turns {
        return Err(Rejection::TooFewTurns {
            turns: metrics.turns,
            min: params.min_turns,
        });
    }
    if metrics.right_down_one_turn {
        return Err(Rejection::Trivial);
    }

    Ok((goal, metrics))
}

/// Seed used by attempt number `attempt`
pub fn attempt_seed(base: u32, attempt: u32) -> u32 {
    base.wrapping_add(attempt.wrapping_mul(ATTEMPT_SEED_STRIDE))
}

/// Loop budget for attempt number `attempt`
pub fn attempt_loops(base: u32, attempt: u32) -> u32 {
    base.saturating_add(attempt / LOOP_GROWTH_INTERVAL)
}

/// Run the attempt loop and fall back if nothing qualifies.
pub fn generate_layout(params: &LayoutParams) -> GeneratedLayout {
    for attempt in 0..MAX_ATTEMPTS {
        let seed = attempt_seed(params.seed, attempt);
        let loops = attempt_loops(params.loop_count, attempt);
        let mut shaped = shape_grid(params, seed, loops, &params.profiles);

        match evaluate(params, &shaped) {
            Ok((goal, metrics)) => {
                open_exit(&mut shaped.grid, goal.cell.y);
                info!(
                    "accepted attempt {attempt} (seed {seed}): goal ({}, {}), path {} cells, {} turns",
                    goal.cell.x, goal.cell.y, metrics.length, metrics.turns
                );
                return GeneratedLayout {
                    grid: shaped.grid,
                    start: START_CELL,
                    goal: goal.cell,
                    report: GenerationReport {
                        outcome: GenerationOutcome::Accepted { attempt },
                        path_length: metrics.length,
                        turns: metrics.turns,
                        goal: goal.cell,
                    },
                };
            }
            Err(reason) => debug!("attempt {attempt} (seed {seed}) rejected: {reason}"),
        }
    }

    warn!(
        "no attempt met the thresholds after {MAX_ATTEMPTS} tries (seed {}), using fallback layout",
        params.seed
    );
    fallback_layout(params)
}

/// Plain maze without sculptors, with a goal forced onto the right column.
fn fallback_layout(params: &LayoutParams) -> GeneratedLayout {
    let seed = params.seed.wrapping_add(FALLBACK_SEED_OFFSET);
    let loops = params.loop_count.saturating_add(FALLBACK_EXTRA_LOOPS);
    let Shaped { mut grid, search } = shape_grid(params, seed, loops, &[]);

    let (goal, corridor) = match find_goal_near_right(&grid, &search) {
        Some(candidate) => (candidate.cell, false),
        None => (tunnel_from_farthest(&mut grid, &search), true),
    };
    open_exit(&mut grid, goal.y);

    let metrics = measure(&grid, goal);
    GeneratedLayout {
        grid,
        start: START_CELL,
        goal,
        report: GenerationReport {
            outcome: GenerationOutcome::Fallback { corridor },
            path_length: metrics.map_or(0, |m| m.length),
            turns: metrics.map_or(0, |m| m.turns),
            goal,
        },
    }
}

/// Open a straight row from the farthest reachable cell to the goal column.
fn tunnel_from_farthest(grid: &mut OpenGrid, search: &DistanceMap) -> Cell {
    let (farthest, distance) = search.farthest_interior();
    let goal_x = grid.width().saturating_sub(2);
    warn!(
        "fallback goal column unreachable, tunnelling row {} from x={} (distance {distance})",
        farthest.y, farthest.x
    );
    for x in farthest.x..=goal_x {
        grid.open(x, farthest.y);
    }
    Cell::new(goal_x, farthest.y)
}

/// Path metrics of the final grid, for the report
fn measure(grid: &OpenGrid, goal: Cell) -> Option<PathMetrics> {
    let search = bfs(grid, START_CELL);
    let path = reconstruct_path(&search, goal).ok()?;
    analyze_path(&path).ok()
}
