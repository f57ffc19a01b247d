//! Serpentine trench cutting

use mz_rng::SequenceRng;

use crate::grid::OpenGrid;

/// Chance that a trench cell is skipped
const SKIP_CHANCE: f64 = 0.22;

/// Threshold above which the trench drifts a row
const DRIFT_THRESHOLD: f64 = 0.66;

/// Cut `bands` left-to-right trenches whose row wanders by one at random.
///
/// Bands start evenly spaced down the board. The wandering row is kept
/// between `2` and `height - 3`.
pub fn add_serpent_cuts(grid: &mut OpenGrid, rng: &mut SequenceRng, bands: u32) {
    let width = grid.width() as isize;
    let height = grid.height() as isize;

    for band in 0..bands {
        let fraction = f64::from(band + 1) / f64::from(bands + 1);
        let base_y = 2 + ((height - 4) as f64 * fraction).floor() as isize;
        let mut y = base_y;

        for x in 2..width - 2 {
            if rng.next_f64() > SKIP_CHANCE && y >= 0 {
                grid.open(x as usize, y as usize);
            }

            if rng.next_f64() > DRIFT_THRESHOLD {
                y += if rng.next_f64() > 0.5 { 1 } else { -1 };
                y = 2.max((height - 3).min(y));
            }
        }
    }
}
