//! Border sealing and exit opening

use crate::consts::START_CELL;
use crate::grid::OpenGrid;

/// Close the outer ring and force the start cell open.
///
/// Sculptors are free to touch the border; this runs after all of them and
/// before any connectivity analysis.
pub fn normalize_borders(grid: &mut OpenGrid) {
    let width = grid.width();
    let height = grid.height();
    if width == 0 || height == 0 {
        return;
    }

    for x in 0..width {
        grid.close(x, 0);
        grid.close(x, height - 1);
    }
    for y in 0..height {
        grid.close(0, y);
        grid.close(width - 1, y);
    }

    grid.open(START_CELL.x, START_CELL.y);
}

/// Open the border cell to the right of the goal row.
pub fn open_exit(grid: &mut OpenGrid, goal_y: usize) {
    let width = grid.width();
    if width > 0 {
        grid.open(width - 1, goal_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_closed_start_open() {
        let mut grid = OpenGrid::from_rows(&[".....", ".....", ".....", "....."]);
        normalize_borders(&mut grid);
        assert_eq!(grid.to_ascii(&[]), "#####\n#...#\n#...#\n#####\n");
    }

    #[test]
    fn test_start_forced_open() {
        let mut grid = OpenGrid::closed(5, 5);
        normalize_borders(&mut grid);
        assert!(grid.is_open(1, 1));
        assert_eq!(grid.open_count(), 1);
    }

    #[test]
    fn test_open_exit() {
        let mut grid = OpenGrid::closed(7, 7);
        open_exit(&mut grid, 3);
        assert!(grid.is_open(6, 3));
        assert_eq!(grid.open_count(), 1);
    }
}
