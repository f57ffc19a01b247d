//! Fine cell grid, coordinates and directions

mod cell;
mod open_grid;

pub use cell::{Cell, Direction};
pub use open_grid::OpenGrid;
