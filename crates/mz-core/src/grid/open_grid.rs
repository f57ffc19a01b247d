//! Open/closed cell grid

use serde::{Deserialize, Serialize};

use super::Cell;

/// Rectangular grid of walkable (`true`) and closed (`false`) cells.
///
/// Stored row-major. Out-of-range reads are closed and out-of-range writes
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl OpenGrid {
    /// Create a fully closed grid
    pub fn closed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a grid from text rows, `.` is open and anything else closed.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::closed(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate().take(width) {
                grid.set(x, y, ch == '.');
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    #[inline]
    pub fn is_open_cell(&self, cell: Cell) -> bool {
        self.is_open(cell.x, cell.y)
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, open: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = open;
        }
    }

    #[inline]
    pub fn open(&mut self, x: usize, y: usize) {
        self.set(x, y, true);
    }

    #[inline]
    pub fn close(&mut self, x: usize, y: usize) {
        self.set(x, y, false);
    }

    /// True when the cell is strictly inside the border ring
    pub fn is_interior(&self, x: usize, y: usize) -> bool {
        x >= 1 && y >= 1 && x + 1 < self.width && y + 1 < self.height
    }

    /// Number of open cells
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Iterate all open cells in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, open)| **open)
            .map(|(i, _)| Cell::new(i % self.width, i / self.width))
    }

    /// Render as text: `#` closed, `.` open, with optional marker cells.
    pub fn to_ascii(&self, markers: &[(Cell, char)]) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (y, row) in self.rows().enumerate() {
            for (x, open) in row.iter().enumerate() {
                let marker = markers
                    .iter()
                    .find(|(c, _)| c.x == x && c.y == y)
                    .map(|(_, ch)| *ch);
                out.push(match marker {
                    Some(ch) => ch,
                    None if *open => '.',
                    None => '#',
                });
            }
            out.push('\n');
        }
        out
    }
}
