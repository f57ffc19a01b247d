use mz_core::{
    Difficulty, GenerationOutcome, LevelConfig, ProfileSpec, TerrainProfile, generate_level,
};

#[allow(clippy::too_many_arguments)]
fn level(
    id: u32,
    size: u32,
    seed: u32,
    loop_count: i64,
    min_path_length: i64,
    min_turns: i64,
    bias: (f64, f64, f64),
    profile: &[TerrainProfile],
) -> LevelConfig {
    LevelConfig {
        id,
        name: format!("Level {id}"),
        difficulty: Difficulty::Easy,
        size,
        seed,
        loop_count,
        min_path_length,
        min_turns,
        bias_x: bias.0,
        bias_y: bias.1,
        straightness: bias.2,
        profile: ProfileSpec::from(profile),
    }
}

fn closed_cells(output: &mz_core::LevelOutput) -> usize {
    output.grid_width * output.grid_height - output.grid.open_count()
}

#[test]
fn test_ember_keep_layout() {
    let cfg = level(1, 400, 1401, 22, 62, 9, (1.2, 1.08, 1.1), &[TerrainProfile::Citadel]);
    let output = cfg.build().unwrap();

    assert_eq!(output.grid_width, 19);
    assert_eq!(output.report.outcome, GenerationOutcome::Accepted { attempt: 2 });
    assert_eq!((output.report.goal.x, output.report.goal.y), (17, 1));
    assert_eq!(output.report.path_length, 69);
    assert_eq!(output.report.turns, 11);
    assert!(output.grid.is_open(18, 1));
    assert_eq!(output.walls.len(), 95);
    assert_eq!(closed_cells(&output), 179);
}

#[test]
fn test_twin_crypts_layout() {
    let cfg = level(5, 600, 3137, 60, 122, 19, (1.36, 1.0, 1.15), &[TerrainProfile::Citadel]);
    let output = generate_level(&cfg.validate().unwrap());

    assert_eq!(output.grid_width, 29);
    assert_eq!(output.report.outcome, GenerationOutcome::Accepted { attempt: 35 });
    assert_eq!((output.report.goal.x, output.report.goal.y), (27, 21));
    assert_eq!(output.report.path_length, 143);
    assert_eq!(output.report.turns, 38);
    assert_eq!(output.walls.len(), 196);
    assert_eq!(closed_cells(&output), 409);
}

#[test]
fn test_seed_override_changes_layout() {
    let cfg = level(1, 400, 1401, 22, 62, 9, (1.2, 1.08, 1.1), &[TerrainProfile::Citadel]);
    let original = cfg.build().unwrap();
    let reseeded = cfg.with_seed(99).build().unwrap();
    assert_ne!(original.grid, reseeded.grid);
}

#[test]
fn test_unreachable_threshold_uses_fallback() {
    let cfg = level(
        40,
        200,
        12,
        3,
        10_000,
        0,
        (1.0, 1.0, 1.0),
        &[TerrainProfile::Rings],
    );
    let output = cfg.build().unwrap();
    let width = output.grid_width;
    let height = output.grid_height;
    let goal = output.report.goal;

    assert!(output.report.is_fallback());
    assert_eq!(goal.x, width - 2);
    assert!(output.grid.is_open_cell(goal));
    assert!(output.grid.is_open(width - 1, goal.y));
    assert!(output.report.path_length >= 2);

    for y in 0..height {
        for x in 0..width {
            let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            if on_border && (x, y) != (width - 1, goal.y) {
                assert!(!output.grid.is_open(x, y), "border ({x}, {y}) open");
            }
        }
    }
}
