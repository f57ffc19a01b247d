//! Rectangular chamber carving

use mz_rng::SequenceRng;

use crate::grid::OpenGrid;

/// Open a `width` x `height` room at `(x, y)`, clipped to the interior.
pub fn carve_room(grid: &mut OpenGrid, x: usize, y: usize, width: usize, height: usize) {
    for yy in y..y + height {
        for xx in x..x + width {
            if grid.is_interior(xx, yy) {
                grid.open(xx, yy);
            }
        }
    }
}

/// Carve `amount` rooms with random sides in `min_size..=max_size`.
///
/// Each room draws its width, height, x and y in that order.
pub fn add_chambers(
    grid: &mut OpenGrid,
    rng: &mut SequenceRng,
    amount: u32,
    min_size: usize,
    max_size: usize,
) {
    let width = grid.width();
    let height = grid.height();
    let span = max_size.saturating_sub(min_size) + 1;

    for _ in 0..amount {
        let room_w = min_size + rng.below(span);
        let room_h = min_size + rng.below(span);
        let x = 2 + rng.below(width.saturating_sub(room_w + 3).max(1));
        let y = 2 + rng.below(height.saturating_sub(room_h + 3).max(1));
        carve_room(grid, x, y, room_w, room_h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_is_clipped_to_interior() {
        let mut grid = OpenGrid::closed(6, 6);
        carve_room(&mut grid, 3, 3, 10, 10);
        assert_eq!(grid.to_ascii(&[]), "######\n######\n######\n###..#\n###..#\n######\n");
    }

    #[test]
    fn test_chambers_stay_off_border() {
        for seed in 0..50 {
            let mut grid = OpenGrid::closed(19, 19);
            let mut rng = SequenceRng::new(seed);
            add_chambers(&mut grid, &mut rng, 5, 3, 5);
            assert!(grid.open_count() >= 9);
            for i in 0..19 {
                assert!(!grid.is_open(i, 0) && !grid.is_open(i, 18));
                assert!(!grid.is_open(0, i) && !grid.is_open(18, i));
                assert!(!grid.is_open(1, i) && !grid.is_open(i, 1));
            }
        }
    }

    #[test]
    fn test_four_draws_per_room() {
        let mut grid = OpenGrid::closed(19, 19);
        let mut rng = SequenceRng::new(1);
        add_chambers(&mut grid, &mut rng, 3, 3, 4);
        assert_eq!(rng.draws(), 12);
    }

    #[test]
    fn test_room_larger_than_board() {
        let mut grid = OpenGrid::closed(7, 7);
        let mut rng = SequenceRng::new(2);
        add_chambers(&mut grid, &mut rng, 1, 9, 9);
        // x = y = 2, clipped to the 4 x 4 block inside the ring
        assert_eq!(grid.open_count(), 16);
    }
}
