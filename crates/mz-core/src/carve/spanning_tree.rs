//! Randomized depth-first spanning tree over the node lattice
//!
//! Nodes sit at fine cells `(1 + 2x, 1 + 2y)`. Carving a step opens the cell
//! between two nodes and the destination node, so the result is a perfect
//! maze: every open cell is reachable and no cycles exist.

use mz_rng::{SequenceRng, Weighted, pick_weighted};
use serde::{Deserialize, Serialize};

use crate::grid::{Direction, OpenGrid};

/// Directional weighting of the carver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarveBias {
    /// Weight of horizontal steps
    pub bias_x: f64,
    /// Weight of vertical steps
    pub bias_y: f64,
    /// Multiplier applied when a step continues the incoming direction
    pub straightness: f64,
}

impl Default for CarveBias {
    fn default() -> Self {
        Self {
            bias_x: 1.0,
            bias_y: 1.0,
            straightness: 1.0,
        }
    }
}

/// A carved grid together with the generator that carved it.
///
/// Later stages keep drawing from `rng` so one seed covers the whole layout.
#[derive(Debug, Clone)]
pub struct CarvedMaze {
    pub grid: OpenGrid,
    pub rng: SequenceRng,
}

/// A stack entry: the node and the direction used to reach it
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: usize,
    y: usize,
    came_from: Option<Direction>,
}

/// Candidate step out of the current node
#[derive(Debug, Clone, Copy)]
struct Step {
    nx: usize,
    ny: usize,
    dir: Direction,
}

/// Carve a perfect maze into a fresh `width` x `height` grid.
pub fn carve_perfect_maze(width: usize, height: usize, seed: u32, bias: &CarveBias) -> CarvedMaze {
    let mut rng = SequenceRng::new(seed);
    let mut grid = OpenGrid::closed(width, height);

    let nodes_w = width.saturating_sub(1) / 2;
    let nodes_h = height.saturating_sub(1) / 2;
    if nodes_w == 0 || nodes_h == 0 {
        return CarvedMaze { grid, rng };
    }

    let mut visited = vec![false; nodes_w * nodes_h];
    let mut stack = Vec::with_capacity(nodes_w * nodes_h);
    let mut options: Vec<Weighted<Step>> = Vec::with_capacity(4);

    stack.push(Frame {
        x: 0,
        y: 0,
        came_from: None,
    });
    visited[0] = true;
    grid.open(1, 1);

    while let Some(&current) = stack.last() {
        options.clear();

        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let (Some(nx), Some(ny)) = (
                current.x.checked_add_signed(dx),
                current.y.checked_add_signed(dy),
            ) else {
                continue;
            };
            if nx >= nodes_w || ny >= nodes_h || visited[ny * nodes_w + nx] {
                continue;
            }

            let mut weight = if dir.is_horizontal() {
                bias.bias_x
            } else {
                bias.bias_y
            };
            if current.came_from == Some(dir) {
                weight *= bias.straightness;
            }
            options.push(Weighted::new(Step { nx, ny, dir }, weight));
        }

        let Some(&Weighted { item: chosen, .. }) = pick_weighted(&options, &mut rng) else {
            stack.pop();
            continue;
        };

        let (dx, dy) = chosen.dir.delta();
        let cx = 1 + current.x * 2;
        let cy = 1 + current.y * 2;
        // Connecting cell, then the destination node
        grid.open(cx.wrapping_add_signed(dx), cy.wrapping_add_signed(dy));
        grid.open(1 + chosen.nx * 2, 1 + chosen.ny * 2);

        visited[chosen.ny * nodes_w + chosen.nx] = true;
        stack.push(Frame {
            x: chosen.nx,
            y: chosen.ny,
            came_from: Some(chosen.dir),
        });
    }

    CarvedMaze { grid, rng }
}
