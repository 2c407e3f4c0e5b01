//! Options for solving and for the command line application
use crate::grid::builder::DEFAULT_MAX_DIMENSION;
use crate::grid::standard_mazes::StandardMaze;
use crate::strategy::StrategyChoice;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options for [`MazeSolver`](crate::solver::MazeSolver)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Give up after this many steps; `None` runs until the end is reached
    pub max_steps: Option<usize>,
}

/// Where the maze comes from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MazeSource {
    /// A text file in the maze notation
    File(PathBuf),
    /// One of the built-in mazes
    Standard(StandardMaze),
}

impl Default for MazeSource {
    fn default() -> Self {
        Self::Standard(StandardMaze::default())
    }
}

/// Options for the `maze-solver` application
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Which maze to solve
    pub maze: MazeSource,
    /// Strategies to run, in order, on the same actor
    pub strategies: Vec<StrategyChoice>,
    /// Seed for the random source; fresh entropy is used when absent
    pub seed: Option<u64>,
    /// Largest accepted number of rows or columns
    pub max_dimension: usize,
    /// Options for each solve
    pub solver: SolverSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            maze: MazeSource::default(),
            strategies: StrategyChoice::get_all().to_vec(),
            seed: None,
            max_dimension: DEFAULT_MAX_DIMENSION,
            solver: SolverSettings::default(),
        }
    }
}

impl AppSettings {
    /// Read settings from a JSON file; missing fields take their default values
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read settings file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }
}
