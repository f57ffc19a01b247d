//! Error types for configuration and path analysis

use thiserror::Error;

use crate::grid::Cell;

/// Level configuration rejected at validation time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("board size {size}px gives a {cells}-cell grid, need at least {min} cells per side")]
    BoardTooSmall { size: u32, cells: usize, min: usize },

    #[error("{field} must be a finite number greater than zero, got {value}")]
    NonPositiveWeight { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("level {id} has no terrain profile")]
    EmptyProfileList { id: u32 },

    #[error("unknown terrain profile '{name}'")]
    UnknownProfile { name: String },
}

/// Predecessor chain that cannot describe a start-to-goal path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("cell ({}, {}) follows ({}, {}) but is not a unit step", to.x, to.y, from.x, from.y)]
    NonUnitStep { from: Cell, to: Cell },

    #[error("predecessor chain from ({}, {}) ends before reaching the start", goal.x, goal.y)]
    Broken { goal: Cell },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnknownProfile {
            name: "swamp".to_string(),
        };
        assert!(err.to_string().contains("swamp"));

        let err = ConfigError::BoardTooSmall {
            size: 60,
            cells: 3,
            min: 5,
        };
        assert!(err.to_string().contains("60px"));
    }

    #[test]
    fn test_path_error_display() {
        let err = PathError::NonUnitStep {
            from: Cell::new(1, 1),
            to: Cell::new(3, 1),
        };
        assert_eq!(err.to_string(), "cell (3, 1) follows (1, 1) but is not a unit step");
    }
}
