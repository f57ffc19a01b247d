//! Closed-cell run-length compaction into wall rectangles

use serde::{Deserialize, Serialize};

use crate::grid::OpenGrid;

/// Axis-aligned wall rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Merge each row's runs of closed cells into one rectangle per run.
///
/// Covers the whole grid, border included. Every closed cell lies in
/// exactly one rectangle and every rectangle is one cell tall.
pub fn compact_walls(grid: &OpenGrid, cell_size: u32) -> Vec<WallRect> {
    let mut walls = Vec::new();

    for (y, row) in grid.rows().enumerate() {
        let mut x = 0;
        while x < row.len() {
            if row[x] {
                x += 1;
                continue;
            }
            let run_start = x;
            while x < row.len() && !row[x] {
                x += 1;
            }
            walls.push(WallRect {
                x: run_start as u32 * cell_size,
                y: y as u32 * cell_size,
                width: (x - run_start) as u32 * cell_size,
                height: cell_size,
            });
        }
    }

    walls
}
