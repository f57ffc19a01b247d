//! Named terrain profiles

use mz_rng::SequenceRng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::Sculptor;
use crate::grid::OpenGrid;

/// Terrain style of a level, each a fixed sculptor sequence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TerrainProfile {
    /// A few mid-sized rooms
    Citadel,
    /// Centre cross plus small rooms
    Crypt,
    /// Three wandering trenches
    Serpent,
    /// Large halls and a centre cross
    Fortress,
    /// Circular arena with two trenches
    Rings,
}

const CITADEL: &[Sculptor] = &[Sculptor::Chambers {
    amount: 3,
    min_size: 3,
    max_size: 4,
}];

const CRYPT: &[Sculptor] = &[
    Sculptor::RuneCross,
    Sculptor::Chambers {
        amount: 2,
        min_size: 2,
        max_size: 3,
    },
];

const SERPENT: &[Sculptor] = &[Sculptor::SerpentCuts { bands: 3 }];

const FORTRESS: &[Sculptor] = &[
    Sculptor::Chambers {
        amount: 5,
        min_size: 3,
        max_size: 5,
    },
    Sculptor::RuneCross,
];

const RINGS: &[Sculptor] = &[Sculptor::CircularRelics, Sculptor::SerpentCuts { bands: 2 }];

impl TerrainProfile {
    /// Sculptor passes in the order they run
    pub fn sculptors(self) -> &'static [Sculptor] {
        match self {
            TerrainProfile::Citadel => CITADEL,
            TerrainProfile::Crypt => CRYPT,
            TerrainProfile::Serpent => SERPENT,
            TerrainProfile::Fortress => FORTRESS,
            TerrainProfile::Rings => RINGS,
        }
    }
}

/// Apply every profile in order, each running its sculptors in order.
pub fn apply_profiles(grid: &mut OpenGrid, rng: &mut SequenceRng, profiles: &[TerrainProfile]) {
    for profile in profiles {
        for sculptor in profile.sculptors() {
            sculptor.apply(grid, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_round_trip() {
        for profile in TerrainProfile::iter() {
            let name = profile.to_string();
            assert_eq!(TerrainProfile::from_str(&name).unwrap(), profile);
        }
        assert_eq!(TerrainProfile::Fortress.to_string(), "fortress");
        assert!(TerrainProfile::from_str("swamp").is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&TerrainProfile::Rings).unwrap();
        assert_eq!(json, "\"rings\"");
        let parsed: TerrainProfile = serde_json::from_str("\"crypt\"").unwrap();
        assert_eq!(parsed, TerrainProfile::Crypt);
    }

    #[test]
    fn test_every_profile_has_passes() {
        for profile in TerrainProfile::iter() {
            assert!(!profile.sculptors().is_empty());
        }
    }

    #[test]
    fn test_citadel_matches_chambers_pass() {
        let mut a = OpenGrid::closed(19, 19);
        let mut rng_a = SequenceRng::new(77);
        apply_profiles(&mut a, &mut rng_a, &[TerrainProfile::Citadel]);

        let mut b = OpenGrid::closed(19, 19);
        let mut rng_b = SequenceRng::new(77);
        crate::sculpt::add_chambers(&mut b, &mut rng_b, 3, 3, 4);

        assert_eq!(a, b);
        assert_eq!(rng_a.draws(), rng_b.draws());
    }

    #[test]
    fn test_profiles_apply_in_order() {
        let run = |profiles: &[TerrainProfile]| {
            let mut grid = OpenGrid::closed(21, 21);
            let mut rng = SequenceRng::new(5);
            apply_profiles(&mut grid, &mut rng, profiles);
            grid
        };
        let both = run(&[TerrainProfile::Citadel, TerrainProfile::Crypt]);
        assert_eq!(both, run(&[TerrainProfile::Citadel, TerrainProfile::Crypt]));
        assert_ne!(both, run(&[TerrainProfile::Crypt, TerrainProfile::Citadel]));
    }
}
