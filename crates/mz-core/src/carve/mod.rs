//! Base maze carving: spanning tree, loop injection and border sealing

mod border;
mod loops;
mod spanning_tree;

pub use border::{normalize_borders, open_exit};
pub use loops::add_loops;
pub use spanning_tree::{CarveBias, CarvedMaze, carve_perfect_maze};
