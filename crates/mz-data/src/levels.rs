//! Level definitions
//!
//! Ids 1 to 9 are the base campaign; the rest continue from 10 in the
//! same difficulty bands.

use mz_core::{Difficulty, LevelConfig, ProfileSpec, TerrainProfile};
use thiserror::Error;

/// Catalog lookup failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no level with id {id} (catalog has ids 1 to {max})")]
    UnknownLevel { id: u32, max: usize },

    #[error("no level named '{name}'")]
    UnknownName { name: String },
}

/// Carver weights of a level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub bias_x: f64,
    pub bias_y: f64,
    pub straightness: f64,
}

impl Weights {
    pub const fn new(bias_x: f64, bias_y: f64, straightness: f64) -> Self {
        Self {
            bias_x,
            bias_y,
            straightness,
        }
    }
}

/// A shipped level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelDef {
    pub id: u32,
    /// Full name including the difficulty prefix
    pub name: &'static str,
    pub difficulty: Difficulty,
    /// Board side in pixels
    pub size: u32,
    pub seed: u32,
    pub loop_count: u32,
    pub min_path_length: u32,
    pub min_turns: u32,
    pub weights: Weights,
    pub profiles: &'static [TerrainProfile],
}

impl LevelDef {
    /// Generator configuration for this level
    pub fn to_config(&self) -> LevelConfig {
        LevelConfig {
            id: self.id,
            name: self.name.to_string(),
            difficulty: self.difficulty,
            size: self.size,
            seed: self.seed,
            loop_count: i64::from(self.loop_count),
            min_path_length: i64::from(self.min_path_length),
            min_turns: i64::from(self.min_turns),
            bias_x: self.weights.bias_x,
            bias_y: self.weights.bias_y,
            straightness: self.weights.straightness,
            profile: ProfileSpec::from(self.profiles),
        }
    }

    /// Name without the difficulty prefix
    pub fn display_name(&self) -> &'static str {
        crate::names::display_name(self.name)
    }
}

pub static LEVELS: &[LevelDef] = &[
    LevelDef {
        id: 1,
        name: "Easy I - Ember Keep",
        difficulty: Difficulty::Easy,
        size: 400,
        seed: 1401,
        loop_count: 22,
        min_path_length: 62,
        min_turns: 9,
        weights: Weights::new(1.2, 1.08, 1.1),
        profiles: &[TerrainProfile::Citadel],
    },
    LevelDef {
        id: 2,
        name: "Easy II - Frost Gallery",
        difficulty: Difficulty::Easy,
        size: 400,
        seed: 1429,
        loop_count: 24,
        min_path_length: 66,
        min_turns: 10,
        weights: Weights::new(1.0, 1.3, 1.08),
        profiles: &[TerrainProfile::Crypt],
    },
    LevelDef {
        id: 3,
        name: "Easy III - Ashen Bastion",
        difficulty: Difficulty::Easy,
        size: 400,
        seed: 1457,
        loop_count: 26,
        min_path_length: 70,
        min_turns: 11,
        weights: Weights::new(1.28, 1.02, 1.2),
        profiles: &[TerrainProfile::Serpent],
    },
    LevelDef {
        id: 4,
        name: "Medium I - Iron Cathedral",
        difficulty: Difficulty::Medium,
        size: 600,
        seed: 3103,
        loop_count: 56,
        min_path_length: 116,
        min_turns: 18,
        weights: Weights::new(1.18, 1.2, 1.12),
        profiles: &[TerrainProfile::Crypt],
    },
    LevelDef {
        id: 5,
        name: "Medium II - Twin Crypts",
        difficulty: Difficulty::Medium,
        size: 600,
        seed: 3137,
        loop_count: 60,
        min_path_length: 122,
        min_turns: 19,
        weights: Weights::new(1.36, 1.0, 1.15),
        profiles: &[TerrainProfile::Citadel],
    },
    LevelDef {
        id: 6,
        name: "Medium III - Serpent Depths",
        difficulty: Difficulty::Medium,
        size: 600,
        seed: 3181,
        loop_count: 64,
        min_path_length: 130,
        min_turns: 21,
        weights: Weights::new(1.0, 1.36, 1.1),
        profiles: &[TerrainProfile::Serpent],
    },
    LevelDef {
        id: 7,
        name: "Hard I - Dragon Necropolis",
        difficulty: Difficulty::Hard,
        size: 900,
        seed: 7109,
        loop_count: 132,
        min_path_length: 190,
        min_turns: 33,
        weights: Weights::new(1.23, 1.22, 1.12),
        profiles: &[TerrainProfile::Fortress],
    },
    LevelDef {
        id: 8,
        name: "Hard II - Dread Fortress",
        difficulty: Difficulty::Hard,
        size: 900,
        seed: 7151,
        loop_count: 138,
        min_path_length: 200,
        min_turns: 35,
        weights: Weights::new(1.38, 1.03, 1.2),
        profiles: &[TerrainProfile::Fortress],
    },
    LevelDef {
        id: 9,
        name: "Hard III - Crown of Relics",
        difficulty: Difficulty::Hard,
        size: 900,
        seed: 7207,
        loop_count: 144,
        min_path_length: 210,
        min_turns: 37,
        weights: Weights::new(1.1, 1.18, 1.15),
        profiles: &[TerrainProfile::Rings],
    },
    LevelDef {
        id: 10,
        name: "Easy IV - Azure Atrium",
        difficulty: Difficulty::Easy,
        size: 400,
        seed: 9101,
        loop_count: 30,
        min_path_length: 76,
        min_turns: 13,
        weights: Weights::new(1.08, 1.16, 1.11),
        profiles: &[TerrainProfile::Citadel],
    },
    LevelDef {
        id: 11,
        name: "Easy V - Rune Library",
        difficulty: Difficulty::Easy,
        size: 400,
        seed: 9177,
        loop_count: 32,
        min_path_length: 82,
        min_turns: 14,
        weights: Weights::new(1.02, 1.22, 1.16),
        profiles: &[TerrainProfile::Crypt],
    },
    LevelDef {
        id: 12,
        name: "Easy VI - Moonwell Crossing",
        difficulty: Difficulty::Easy,
        size: 400,
        seed: 9253,
        loop_count: 34,
        min_path_length: 86,
        min_turns: 15,
        weights: Weights::new(1.24, 1.02, 1.2),
        profiles: &[TerrainProfile::Serpent],
    },
    LevelDef {
        id: 13,
        name: "Easy VII - Gilded Watch",
        difficulty: Difficulty::Easy,
        size: 400,
        seed: 9329,
        loop_count: 36,
        min_path_length: 90,
        min_turns: 16,
        weights: Weights::new(1.18, 1.12, 1.18),
        profiles: &[TerrainProfile::Citadel, TerrainProfile::Crypt],
    },
    LevelDef {
        id: 14,
        name: "Easy VIII - Harbor Annex",
        difficulty: Difficulty::Easy,
        size: 400,
        seed: 9405,
        loop_count: 37,
        min_path_length: 92,
        min_turns: 16,
        weights: Weights::new(1.12, 1.2, 1.15),
        profiles: &[TerrainProfile::Crypt, TerrainProfile::Serpent],
    },
    LevelDef {
        id: 15,
        name: "Easy IX - Sunken Lantern Hall",
        difficulty: Difficulty::Easy,
        size: 400,
        seed: 9481,
        loop_count: 38,
        min_path_length: 95,
        min_turns: 17,
        weights: Weights::new(1.28, 1.0, 1.21),
        profiles: &[TerrainProfile::Serpent, TerrainProfile::Citadel],
    },
    LevelDef {
        id: 16,
        name: "Easy X - Ivy Rampart",
        difficulty: Difficulty::Easy,
        size: 400,
        seed: 9557,
        loop_count: 40,
        min_path_length: 98,
        min_turns: 18,
        weights: Weights::new(1.14, 1.18, 1.18),
        profiles: &[TerrainProfile::Rings],
    },
    LevelDef {
        id: 17,
        name: "Medium IV - Obsidian Archives",
        difficulty: Difficulty::Medium,
        size: 600,
        seed: 9633,
        loop_count: 78,
        min_path_length: 144,
        min_turns: 25,
        weights: Weights::new(1.08, 1.28, 1.14),
        profiles: &[TerrainProfile::Crypt, TerrainProfile::Fortress],
    },
    LevelDef {
        id: 18,
        name: "Medium V - Tidal Monastery",
        difficulty: Difficulty::Medium,
        size: 600,
        seed: 9709,
        loop_count: 82,
        min_path_length: 152,
        min_turns: 26,
        weights: Weights::new(1.22, 1.1, 1.19),
        profiles: &[TerrainProfile::Citadel, TerrainProfile::Serpent],
    },
    LevelDef {
        id: 19,
        name: "Medium VI - Vault of Feathers",
        difficulty: Difficulty::Medium,
        size: 600,
        seed: 9785,
        loop_count: 86,
        min_path_length: 160,
        min_turns: 27,
        weights: Weights::new(1.18, 1.16, 1.16),
        profiles: &[TerrainProfile::Rings, TerrainProfile::Crypt],
    },
    LevelDef {
        id: 20,
        name: "Medium VII - Cathedral Annex",
        difficulty: Difficulty::Medium,
        size: 600,
        seed: 9861,
        loop_count: 90,
        min_path_length: 168,
        min_turns: 28,
        weights: Weights::new(1.32, 1.04, 1.21),
        profiles: &[TerrainProfile::Fortress],
    },
    LevelDef {
        id: 21,
        name: "Medium VIII - Lab of Mirrors",
        difficulty: Difficulty::Medium,
        size: 600,
        seed: 9937,
        loop_count: 94,
        min_path_length: 174,
        min_turns: 30,
        weights: Weights::new(1.0, 1.34, 1.1),
        profiles: &[TerrainProfile::Serpent, TerrainProfile::Rings],
    },
    LevelDef {
        id: 22,
        name: "Medium IX - Storm Relay",
        difficulty: Difficulty::Medium,
        size: 600,
        seed: 10013,
        loop_count: 97,
        min_path_length: 182,
        min_turns: 31,
        weights: Weights::new(1.26, 1.08, 1.18),
        profiles: &[TerrainProfile::Citadel, TerrainProfile::Fortress],
    },
    LevelDef {
        id: 23,
        name: "Medium X - Celestial Trench",
        difficulty: Difficulty::Medium,
        size: 600,
        seed: 10089,
        loop_count: 102,
        min_path_length: 188,
        min_turns: 32,
        weights: Weights::new(1.12, 1.26, 1.17),
        profiles: &[TerrainProfile::Rings, TerrainProfile::Serpent, TerrainProfile::Crypt],
    },
    LevelDef {
        id: 24,
        name: "Hard IV - Warden Causeway",
        difficulty: Difficulty::Hard,
        size: 900,
        seed: 10165,
        loop_count: 166,
        min_path_length: 232,
        min_turns: 42,
        weights: Weights::new(1.2, 1.2, 1.16),
        profiles: &[TerrainProfile::Fortress, TerrainProfile::Crypt],
    },
    LevelDef {
        id: 25,
        name: "Hard V - Astral Engine",
        difficulty: Difficulty::Hard,
        size: 900,
        seed: 10241,
        loop_count: 172,
        min_path_length: 244,
        min_turns: 44,
        weights: Weights::new(1.34, 1.06, 1.21),
        profiles: &[TerrainProfile::Rings, TerrainProfile::Fortress],
    },
    LevelDef {
        id: 26,
        name: "Hard VI - Citadel Core",
        difficulty: Difficulty::Hard,
        size: 900,
        seed: 10317,
        loop_count: 178,
        min_path_length: 256,
        min_turns: 46,
        weights: Weights::new(1.06, 1.34, 1.12),
        profiles: &[TerrainProfile::Serpent, TerrainProfile::Crypt, TerrainProfile::Citadel],
    },
    LevelDef {
        id: 27,
        name: "Hard VII - Dragon Relay Nexus",
        difficulty: Difficulty::Hard,
        size: 900,
        seed: 10393,
        loop_count: 184,
        min_path_length: 268,
        min_turns: 48,
        weights: Weights::new(1.24, 1.24, 1.18),
        profiles: &[TerrainProfile::Fortress, TerrainProfile::Serpent],
    },
    LevelDef {
        id: 28,
        name: "Hard VIII - Imperial Spiral",
        difficulty: Difficulty::Hard,
        size: 900,
        seed: 10469,
        loop_count: 191,
        min_path_length: 278,
        min_turns: 50,
        weights: Weights::new(1.3, 1.14, 1.2),
        profiles: &[TerrainProfile::Rings, TerrainProfile::Citadel, TerrainProfile::Crypt],
    },
    LevelDef {
        id: 29,
        name: "Hard IX - Final Rune Circuit",
        difficulty: Difficulty::Hard,
        size: 900,
        seed: 10545,
        loop_count: 198,
        min_path_length: 290,
        min_turns: 53,
        weights: Weights::new(1.16, 1.3, 1.22),
        profiles: &[TerrainProfile::Fortress, TerrainProfile::Rings, TerrainProfile::Serpent],
    },
];

/// Number of levels in the catalog
pub fn num_levels() -> usize {
    LEVELS.len()
}

/// Get a level by id
pub fn get_level(id: u32) -> Result<&'static LevelDef, CatalogError> {
    LEVELS
        .iter()
        .find(|l| l.id == id)
        .ok_or(CatalogError::UnknownLevel {
            id,
            max: LEVELS.len(),
        })
}

/// Find a level by full or display name, ignoring case
pub fn find_level(name: &str) -> Result<&'static LevelDef, CatalogError> {
    LEVELS
        .iter()
        .find(|l| l.name.eq_ignore_ascii_case(name) || l.display_name().eq_ignore_ascii_case(name))
        .ok_or_else(|| CatalogError::UnknownName {
            name: name.to_string(),
        })
}

/// All levels of one difficulty, in id order
pub fn levels_with_difficulty(difficulty: Difficulty) -> impl Iterator<Item = &'static LevelDef> {
    LEVELS.iter().filter(move |l| l.difficulty == difficulty)
}
