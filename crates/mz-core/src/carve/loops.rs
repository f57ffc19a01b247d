//! Loop injection: open closed cells that bridge two open cells

use mz_rng::SequenceRng;

use crate::grid::OpenGrid;

/// Sample `amount` interior cells and open the ones that bridge a gap.
///
/// A closed cell is opened when both horizontal neighbours or both vertical
/// neighbours are open. Samples that hit an open cell or a non-bridge are
/// simply spent, so `amount` is a budget rather than a count.
pub fn add_loops(grid: &mut OpenGrid, rng: &mut SequenceRng, amount: u32) -> usize {
    let width = grid.width();
    let height = grid.height();
    if width < 3 || height < 3 {
        return 0;
    }

    let mut opened = 0;
    for _ in 0..amount {
        let x = 1 + rng.below(width - 2);
        let y = 1 + rng.below(height - 2);

        if grid.is_open(x, y) {
            continue;
        }

        let horizontal_bridge = grid.is_open(x - 1, y) && grid.is_open(x + 1, y);
        let vertical_bridge = grid.is_open(x, y - 1) && grid.is_open(x, y + 1);

        if horizontal_bridge || vertical_bridge {
            grid.open(x, y);
            opened += 1;
        }
    }
    opened
}
