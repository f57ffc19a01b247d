use mz_data::{LEVELS, get_level};

#[test]
fn test_every_catalog_level_builds() {
    for level in LEVELS {
        let output = level.to_config().build().unwrap();
        let goal = output.report.goal;

        assert_eq!(output.id, level.id);
        assert_eq!(goal.x, output.grid_width - 2, "level {}", level.id);
        assert!(output.grid.is_open(output.grid_width - 1, goal.y));
        assert!(!output.walls.is_empty());
    }
}

#[test]
fn test_first_level_is_accepted() {
    let output = get_level(1).unwrap().to_config().build().unwrap();
    assert!(!output.report.is_fallback());
    assert!(output.report.path_length >= 62);
    assert!(output.report.turns >= 9);
}

mod reseeded {
    use mz_data::{LEVELS, num_levels};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_reseeded_level_keeps_goal_on_right(
            index in 0..num_levels(),
            seed in any::<u32>(),
        ) {
            let level = &LEVELS[index];
            let output = level.to_config().with_seed(seed).build().unwrap();
            let goal = output.report.goal;

            prop_assert_eq!(output.id, level.id);
            prop_assert_eq!(goal.x, output.grid_width - 2);
            prop_assert!(output.grid.is_open_cell(goal));
            prop_assert!(output.grid.is_open(output.grid_width - 1, goal.y));
        }
    }
}
