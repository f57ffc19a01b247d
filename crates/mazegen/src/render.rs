//! Text rendering of catalog entries and built levels

use mz_core::{GenerationOutcome, LevelOutput};
use mz_data::{LevelDef, display_name};

/// One `list` line: id, tier, name, board size and profiles
pub fn catalog_line(level: &LevelDef) -> String {
    let profiles: Vec<String> = level.profiles.iter().map(ToString::to_string).collect();
    format!(
        "{:>3}  {:<6} {:<24} {:>4}px  seed {:<6} {}",
        level.id,
        level.difficulty,
        level.display_name(),
        level.size,
        level.seed,
        profiles.join("+")
    )
}

/// One-line description of a built level
pub fn summary_line(output: &LevelOutput) -> String {
    let report = &output.report;
    let outcome = match report.outcome {
        GenerationOutcome::Accepted { attempt } => format!("accepted on attempt {attempt}"),
        GenerationOutcome::Fallback { corridor: false } => "fallback".to_string(),
        GenerationOutcome::Fallback { corridor: true } => "fallback with corridor".to_string(),
    };
    format!(
        "#{} {} [{}] {}x{} cells: {}, path {} cells, {} turns, goal ({}, {}), {} walls",
        output.id,
        display_name(&output.name),
        output.difficulty,
        output.grid_width,
        output.grid_height,
        outcome,
        report.path_length,
        report.turns,
        report.goal.x,
        report.goal.y,
        output.walls.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_line() {
        let line = catalog_line(&mz_data::LEVELS[6]);
        assert!(line.contains("Dragon Necropolis"));
        assert!(line.contains("Hard"));
        assert!(line.contains("900px"));
        assert!(line.ends_with("fortress"));
    }

    #[test]
    fn test_summary_line() {
        let output = mz_data::LEVELS[0].to_config().build().unwrap();
        let line = summary_line(&output);
        assert!(line.starts_with("#1 Ember Keep [Easy] 19x19 cells: accepted"));
    }
}
