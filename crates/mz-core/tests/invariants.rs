use mz_core::analysis::{analyze_path, bfs, reconstruct_path};
use mz_core::consts::{CELL_SIZE, START_CELL};
use mz_core::{
    Cell, Difficulty, GenerationOutcome, LevelConfig, LevelOutput, ProfileSpec, TerrainProfile,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn profile_strategy() -> impl Strategy<Value = Vec<TerrainProfile>> {
    let all: Vec<TerrainProfile> = TerrainProfile::iter().collect();
    prop::collection::vec(prop::sample::select(all), 1..3)
}

prop_compose! {
    fn config_strategy()(
        size in 100u32..=320,
        seed in any::<u32>(),
        loop_count in 0i64..24,
        min_path_length in 0i64..40,
        min_turns in 0i64..8,
        bias_x in 0.5f64..2.0,
        bias_y in 0.5f64..2.0,
        straightness in 0.5f64..2.0,
        profiles in profile_strategy(),
    ) -> LevelConfig {
        LevelConfig {
            id: 1,
            name: "prop".to_string(),
            difficulty: Difficulty::Medium,
            size,
            seed,
            loop_count,
            min_path_length,
            min_turns,
            bias_x,
            bias_y,
            straightness,
            profile: ProfileSpec::from(profiles.as_slice()),
        }
    }
}

fn check_layout(cfg: &LevelConfig, output: &LevelOutput) -> Result<(), TestCaseError> {
    let grid = &output.grid;
    let width = grid.width();
    let height = grid.height();
    let goal = output.report.goal;

    prop_assert_eq!(goal.x, width - 2);
    prop_assert!(grid.is_open_cell(goal));
    prop_assert!(grid.is_open(width - 1, goal.y));

    // Sealed except for the exit
    for y in 0..height {
        for x in 0..width {
            let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
            if on_border && (x, y) != (width - 1, goal.y) {
                prop_assert!(!grid.is_open(x, y));
            }
        }
    }

    // Every open interior cell is reachable
    let map = bfs(grid, START_CELL);
    for cell in grid.open_cells().filter(|c| grid.is_interior(c.x, c.y)) {
        prop_assert!(map.is_reached(cell), "({}, {}) unreachable", cell.x, cell.y);
    }

    if let GenerationOutcome::Accepted { .. } = output.report.outcome {
        prop_assert!(output.report.path_length as i64 >= cfg.min_path_length);
        prop_assert!(output.report.turns as i64 >= cfg.min_turns);

        let path = reconstruct_path(&map, goal).unwrap();
        let metrics = analyze_path(&path).unwrap();
        prop_assert_eq!(metrics.length, output.report.path_length);
        prop_assert!(!metrics.right_down_one_turn);
    }

    // Walls cover each closed cell exactly once
    let mut covered = vec![0u8; width * height];
    for wall in &output.walls {
        prop_assert_eq!(wall.height, CELL_SIZE);
        let y = (wall.y / CELL_SIZE) as usize;
        let x0 = (wall.x / CELL_SIZE) as usize;
        for x in x0..x0 + (wall.width / CELL_SIZE) as usize {
            covered[y * width + x] += 1;
        }
    }
    for y in 0..height {
        for x in 0..width {
            let expected = u8::from(!grid.is_open(x, y));
            prop_assert_eq!(covered[y * width + x], expected, "cell ({}, {})", x, y);
        }
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_generated_levels_hold_invariants(cfg in config_strategy()) {
        let output = cfg.build().unwrap();
        check_layout(&cfg, &output)?;
    }

    #[test]
    fn prop_generation_is_deterministic(cfg in config_strategy()) {
        let a = cfg.build().unwrap();
        let b = cfg.build().unwrap();
        prop_assert_eq!(&a, &b);
    }

    #[test]
    fn prop_fallback_holds_invariants(seed in any::<u32>(), size in 100u32..=260) {
        let cfg = LevelConfig {
            min_path_length: 100_000,
            ..config_fixture(seed, size)
        };
        let output = cfg.build().unwrap();
        prop_assert!(output.report.is_fallback());
        check_layout(&cfg, &output)?;
    }
}

fn config_fixture(seed: u32, size: u32) -> LevelConfig {
    LevelConfig {
        id: 2,
        name: "fixture".to_string(),
        difficulty: Difficulty::Hard,
        size,
        seed,
        loop_count: 2,
        min_path_length: 0,
        min_turns: 0,
        bias_x: 1.0,
        bias_y: 1.0,
        straightness: 1.0,
        profile: ProfileSpec::One("crypt".to_string()),
    }
}

#[test]
fn test_start_cell_is_open() {
    let output = config_fixture(5, 200).build().unwrap();
    assert!(output.grid.is_open_cell(Cell::new(1, 1)));
    assert_eq!(output.start_cell, START_CELL);
}
