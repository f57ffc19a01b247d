//! Circular arena with broken concentric rings

use std::f64::consts::TAU;

use mz_rng::SequenceRng;

use crate::grid::OpenGrid;

/// Arena radius as a fraction of the shorter side
const ARENA_FRACTION: f64 = 0.42;

/// Angular step used when tracing a ring
const ANGLE_STEP: f64 = 0.03;

/// Chance that a traced ring point is left closed
const GAP_CHANCE: f64 = 0.08;

/// Ring radius factor and the open angular interval it skips
const RINGS: [(f64, f64, f64); 3] = [(0.72, 0.8, 1.7), (0.55, 3.3, 4.1), (0.37, 5.2, 5.8)];

/// Half-up rounding to the nearest grid coordinate
fn round_half_up(v: f64) -> isize {
    (v + 0.5).floor() as isize
}

/// Close everything outside a centred circle, then trace three rings.
///
/// Each ring skips one sector so rings stay passable. Only ring points
/// that land at least two cells inside the border draw from `rng`.
pub fn add_circular_relics(grid: &mut OpenGrid, rng: &mut SequenceRng) {
    let width = grid.width();
    let height = grid.height();
    let cx = (width / 2) as f64;
    let cy = (height / 2) as f64;
    let max_radius = width.min(height) as f64 * ARENA_FRACTION;

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if (dx * dx + dy * dy).sqrt() > max_radius {
                grid.close(x, y);
            }
        }
    }

    let (w, h) = (width as isize, height as isize);
    for (factor, gap_from, gap_to) in RINGS {
        let radius = max_radius * factor;
        let mut angle = 0.0_f64;
        while angle < TAU {
            if !(angle > gap_from && angle < gap_to) {
                let x = round_half_up(cx + angle.cos() * radius);
                let y = round_half_up(cy + angle.sin() * radius);
                if x > 1 && y > 1 && x < w - 2 && y < h - 2 && rng.next_f64() > GAP_CHANCE {
                    grid.open(x as usize, y as usize);
                }
            }
            angle += ANGLE_STEP;
        }
    }
}
