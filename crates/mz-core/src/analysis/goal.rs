//! Exit placement on the right edge

use super::DistanceMap;
use crate::consts::GOAL_CENTER_PENALTY;
use crate::grid::{Cell, OpenGrid};

/// A reachable cell next to the right border, with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalCandidate {
    pub cell: Cell,
    pub score: f64,
    pub distance: i32,
}

/// Pick the goal in column `width - 2`.
///
/// Far cells score higher and cells away from the vertical centre are
/// penalised. Rows are scanned top-down and only a strictly better score
/// replaces the current pick, so ties go to the upper row.
pub fn find_goal_near_right(grid: &OpenGrid, map: &DistanceMap) -> Option<GoalCandidate> {
    let width = grid.width();
    let height = grid.height();
    if width < 3 {
        return None;
    }
    let x = width - 2;
    let centre = height as f64 / 2.0;

    let mut best: Option<GoalCandidate> = None;
    for y in 1..height.saturating_sub(1) {
        let cell = Cell::new(x, y);
        if !grid.is_open_cell(cell) {
            continue;
        }
        let distance = map.distance(cell);
        if distance < 0 {
            continue;
        }

        let score = f64::from(distance) - (y as f64 - centre).abs() * GOAL_CENTER_PENALTY;
        if best.is_none_or(|b| score > b.score) {
            best = Some(GoalCandidate {
                cell,
                score,
                distance,
            });
        }
    }

    best
}
