//! Grid coordinates and the four movement directions

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A fine grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`, if it does not underflow.
    pub fn step(self, dir: Direction) -> Option<Cell> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Cell { x, y })
    }
}

/// Unit movement direction.
///
/// Declaration order is the scan order used by the carver and the BFS.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    #[strum(serialize = "R")]
    Right,
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "D")]
    Down,
    #[strum(serialize = "U")]
    Up,
}

impl Direction {
    /// All directions in scan order
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    /// Direction of a single step from `from` to `to`, if it is one.
    pub fn between(from: Cell, to: Cell) -> Option<Direction> {
        let dx = to.x as isize - from.x as isize;
        let dy = to.y as isize - from.y as isize;
        Direction::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }

    pub const fn code(self) -> char {
        match self {
            Direction::Right => 'R',
            Direction::Left => 'L',
            Direction::Down => 'D',
            Direction::Up => 'U',
        }
    }
}
