//! Level configuration, validation and pixel-space output

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::carve::CarveBias;
use crate::consts::{CELL_SIZE, MIN_GRID_SIDE, START_RADIUS};
use crate::errors::ConfigError;
use crate::generator::{GenerationReport, LayoutParams, generate_layout};
use crate::grid::{Cell, OpenGrid};
use crate::sculpt::TerrainProfile;
use crate::walls::{WallRect, compact_walls};

/// Difficulty tier shown to the player
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
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Profile field that accepts a single name or a list of names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileSpec {
    One(String),
    Many(Vec<String>),
}

impl ProfileSpec {
    pub fn names(&self) -> &[String] {
        match self {
            ProfileSpec::One(name) => std::slice::from_ref(name),
            ProfileSpec::Many(names) => names,
        }
    }
}

impl From<&[TerrainProfile]> for ProfileSpec {
    fn from(profiles: &[TerrainProfile]) -> Self {
        match profiles {
            [single] => ProfileSpec::One(single.to_string()),
            many => ProfileSpec::Many(many.iter().map(ToString::to_string).collect()),
        }
    }
}

/// Tuning values for one level, as stored in the catalog or a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub id: u32,
    pub name: String,
    pub difficulty: Difficulty,
    /// Board side in pixels
    pub size: u32,
    pub seed: u32,
    pub loop_count: i64,
    pub min_path_length: i64,
    pub min_turns: i64,
    pub bias_x: f64,
    pub bias_y: f64,
    pub straightness: f64,
    pub profile: ProfileSpec,
}

/// A configuration that passed [`LevelConfig::validate`]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    id: u32,
    name: String,
    difficulty: Difficulty,
    size: u32,
    layout: LayoutParams,
}

impl ValidatedConfig {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn layout(&self) -> &LayoutParams {
        &self.layout
    }

    pub fn profiles(&self) -> &[TerrainProfile] {
        &self.layout.profiles
    }
}

/// Largest odd number of cells that fits on a `size` pixel board.
///
/// An odd side keeps the coarse carving lattice aligned with the right
/// border, so column `side - 2` is always reachable.
pub fn grid_side_for(size: u32) -> usize {
    let raw = (size / CELL_SIZE) as usize;
    if raw == 0 {
        return 0;
    }
    2 * ((raw - 1) / 2) + 1
}

fn positive_weight(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositiveWeight { field, value })
    }
}

fn count(field: &'static str, value: i64) -> Result<u64, ConfigError> {
    u64::try_from(value).map_err(|_| ConfigError::NegativeCount { field, value })
}

impl LevelConfig {
    /// Check every field and resolve profile names.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let grid_side = grid_side_for(self.size);
        if grid_side < MIN_GRID_SIDE {
            return Err(ConfigError::BoardTooSmall {
                size: self.size,
                cells: grid_side,
                min: MIN_GRID_SIDE,
            });
        }

        let bias = CarveBias {
            bias_x: positive_weight("biasX", self.bias_x)?,
            bias_y: positive_weight("biasY", self.bias_y)?,
            straightness: positive_weight("straightness", self.straightness)?,
        };

        let loop_count = count("loopCount", self.loop_count)?;
        let min_path_length = count("minPathLength", self.min_path_length)?;
        let min_turns = count("minTurns", self.min_turns)?;

        let names = self.profile.names();
        if names.is_empty() {
            return Err(ConfigError::EmptyProfileList { id: self.id });
        }
        let profiles = names
            .iter()
            .map(|name| {
                TerrainProfile::from_str(name)
                    .map_err(|_| ConfigError::UnknownProfile { name: name.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedConfig {
            id: self.id,
            name: self.name.clone(),
            difficulty: self.difficulty,
            size: self.size,
            layout: LayoutParams {
                grid_side,
                seed: self.seed,
                loop_count: u32::try_from(loop_count).unwrap_or(u32::MAX),
                min_path_length: usize::try_from(min_path_length).unwrap_or(usize::MAX),
                min_turns: usize::try_from(min_turns).unwrap_or(usize::MAX),
                bias,
                profiles,
            },
        })
    }

    /// Same level with a different seed
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Validate and generate in one step
    pub fn build(&self) -> Result<LevelOutput, ConfigError> {
        Ok(generate_level(&self.validate()?))
    }
}

/// Start marker centre and radius in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartPoint {
    pub x: u32,
    pub y: u32,
    pub radius: u32,
}

/// Goal rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Finished level ready for a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelOutput {
    pub id: u32,
    pub name: String,
    pub difficulty: Difficulty,
    pub size: u32,
    pub cell_size: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    pub walls: Vec<WallRect>,
    pub start: StartPoint,
    pub goal: GoalRect,
    pub report: GenerationReport,
    #[serde(skip)]
    pub grid: OpenGrid,
    #[serde(skip)]
    pub start_cell: Cell,
}

impl LevelOutput {
    /// Text rendering with `S` at the start and `G` at the goal
    pub fn preview(&self) -> String {
        self.grid
            .to_ascii(&[(self.start_cell, 'S'), (self.report.goal, 'G')])
    }
}

/// Generate the layout for `config` and convert it to pixels.
pub fn generate_level(config: &ValidatedConfig) -> LevelOutput {
    let layout = generate_layout(&config.layout);
    let walls = compact_walls(&layout.grid, CELL_SIZE);

    let start = StartPoint {
        x: layout.start.x as u32 * CELL_SIZE + CELL_SIZE / 2,
        y: layout.start.y as u32 * CELL_SIZE + CELL_SIZE / 2,
        radius: START_RADIUS,
    };
    let goal = GoalRect {
        x: layout.goal.x as u32 * CELL_SIZE,
        y: layout.goal.y as u32 * CELL_SIZE,
        width: CELL_SIZE,
        height: CELL_SIZE,
    };

    LevelOutput {
        id: config.id,
        name: config.name.clone(),
        difficulty: config.difficulty,
        size: config.size,
        cell_size: CELL_SIZE,
        grid_width: layout.grid.width(),
        grid_height: layout.grid.height(),
        walls,
        start,
        goal,
        report: layout.report,
        grid: layout.grid,
        start_cell: layout.start,
    }
}
