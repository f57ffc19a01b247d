//! Removal of open cells the start cannot reach

use super::DistanceMap;
use crate::grid::{Cell, OpenGrid};

/// Close every open interior cell that `map` did not reach.
///
/// Returns the number of cells closed. The border ring is left as is.
pub fn prune_unreachable(grid: &mut OpenGrid, map: &DistanceMap) -> usize {
    let mut closed = 0;
    for y in 1..grid.height().saturating_sub(1) {
        for x in 1..grid.width().saturating_sub(1) {
            if grid.is_open(x, y) && !map.is_reached(Cell::new(x, y)) {
                grid.close(x, y);
                closed += 1;
            }
        }
    }
    closed
}
