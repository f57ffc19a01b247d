//! Cross-shaped corridor through the centre

use mz_rng::SequenceRng;

use crate::grid::OpenGrid;

/// Chance that a given cross cell is left closed
const GAP_CHANCE: f64 = 0.18;

/// Open a mostly solid cross through the grid centre.
///
/// The horizontal arm is drawn first, then the vertical arm; each cell keeps
/// its own draw, so roughly one cell in six stays closed.
pub fn add_rune_cross(grid: &mut OpenGrid, rng: &mut SequenceRng) {
    let width = grid.width();
    let height = grid.height();
    let mid_x = width / 2;
    let mid_y = height / 2;

    for x in 2..width.saturating_sub(2) {
        if rng.next_f64() > GAP_CHANCE {
            grid.open(x, mid_y);
        }
    }

    for y in 2..height.saturating_sub(2) {
        if rng.next_f64() > GAP_CHANCE {
            grid.open(mid_x, y);
        }
    }
}
