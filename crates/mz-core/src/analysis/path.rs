//! Start-to-goal path reconstruction and shape metrics

use serde::{Deserialize, Serialize};

use super::DistanceMap;
use crate::errors::PathError;
use crate::grid::{Cell, Direction};

/// Shape of a start-to-goal path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathMetrics {
    /// Number of cells on the path, both ends included
    pub length: usize,
    /// Number of direction changes between consecutive steps
    pub turns: usize,
    /// Every step goes right or down
    pub right_down_only: bool,
    /// Right/down only with at most one turn
    pub right_down_one_turn: bool,
}

/// Follow predecessors from `goal` back to the map's start.
///
/// The returned path runs start first. A chain that stops or loops before
/// reaching the start is reported as [`PathError::Broken`].
pub fn reconstruct_path(map: &DistanceMap, goal: Cell) -> Result<Vec<Cell>, PathError> {
    let start = map.start();
    let limit = usize::try_from(map.distance(goal)).map_err(|_| PathError::Broken { goal })?;

    let mut path = Vec::with_capacity(limit + 1);
    let mut cursor = goal;
    loop {
        path.push(cursor);
        if cursor == start {
            break;
        }
        if path.len() > limit {
            return Err(PathError::Broken { goal });
        }
        cursor = map.predecessor(cursor).ok_or(PathError::Broken { goal })?;
    }

    path.reverse();
    Ok(path)
}

/// Measure length and turns of a path and classify trivial routes.
pub fn analyze_path(path: &[Cell]) -> Result<PathMetrics, PathError> {
    if path.len() < 2 {
        return Ok(PathMetrics {
            length: path.len(),
            turns: 0,
            right_down_only: true,
            right_down_one_turn: true,
        });
    }

    let dirs = path
        .windows(2)
        .map(|pair| {
            Direction::between(pair[0], pair[1]).ok_or(PathError::NonUnitStep {
                from: pair[0],
                to: pair[1],
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let turns = dirs.windows(2).filter(|d| d[0] != d[1]).count();
    let right_down_only = dirs
        .iter()
        .all(|d| matches!(d, Direction::Right | Direction::Down));

    Ok(PathMetrics {
        length: path.len(),
        turns,
        right_down_only,
        right_down_one_turn: right_down_only && turns <= 1,
    })
}
