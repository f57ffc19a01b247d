//! Connectivity and path analysis over an open grid

mod bfs;
mod goal;
mod path;
mod prune;

pub use bfs::{DistanceMap, bfs};
pub use goal::{GoalCandidate, find_goal_near_right};
pub use path::{PathMetrics, analyze_path, reconstruct_path};
pub use prune::prune_unreachable;
