use anyhow::Context;
use clap::Parser;
use log::{error, info};
use maze_solver::actor::Actor;
use maze_solver::grid::builder::MazeBuilder;
use maze_solver::grid::standard_mazes::StandardMaze;
use maze_solver::grid::Maze;
use maze_solver::settings::{AppSettings, MazeSource};
use maze_solver::solver::MazeSolver;
use maze_solver::strategy::StrategyChoice;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Solve a maze with one or more strategies and log the paths taken
#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
struct Cli {
    /// JSON settings file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maze file, one character per cell: `_` open, `X` wall, `S` start, `G` end
    #[arg(long, conflicts_with = "standard")]
    maze: Option<PathBuf>,
    /// Built-in maze: simple, branching or large
    #[arg(long, value_parser = parse_standard_maze)]
    standard: Option<StandardMaze>,
    /// Strategy to run; repeat to run several in order
    #[arg(long = "strategy")]
    strategies: Vec<StrategyChoice>,
    /// Seed for reproducible randomized runs
    #[arg(long)]
    seed: Option<u64>,
    /// Give up on a strategy after this many steps
    #[arg(long)]
    max_steps: Option<usize>,
}

fn parse_standard_maze(s: &str) -> Result<StandardMaze, String> {
    StandardMaze::get_all()
        .into_iter()
        .find(|maze| format!("{maze:?}").eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown standard maze {s:?}"))
}

impl Cli {
    fn into_settings(self) -> anyhow::Result<AppSettings> {
        let mut settings = match &self.config {
            Some(path) => AppSettings::load(path)?,
            None => AppSettings::default(),
        };
        if let Some(path) = self.maze {
            settings.maze = MazeSource::File(path);
        }
        if let Some(standard) = self.standard {
            settings.maze = MazeSource::Standard(standard);
        }
        if !self.strategies.is_empty() {
            settings.strategies = self.strategies;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.max_steps.is_some() {
            settings.solver.max_steps = self.max_steps;
        }
        Ok(settings)
    }
}

fn load_maze(settings: &AppSettings) -> anyhow::Result<Maze> {
    let builder = MazeBuilder::default().with_max_dimension(settings.max_dimension);
    let maze = match &settings.maze {
        MazeSource::File(path) => builder
            .build_file(path)
            .with_context(|| format!("could not build maze from {}", path.display()))?,
        MazeSource::Standard(standard) => builder
            .build_named(standard.text(), format!("{standard:?}"))
            .context("could not build standard maze")?,
    };
    Ok(maze)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Cli::parse().into_settings()?;
    let maze = load_maze(&settings)?;

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut solver = MazeSolver::with_rng(&maze, rng).with_settings(settings.solver.clone());
    let mut actor = Actor::new();

    info!("Solving {} ({}x{})", maze.name(), maze.height(), maze.width());
    for choice in &settings.strategies {
        info!("Starting {choice}");
        match solver.solve(&mut actor, *choice) {
            Ok(solution) => {
                info!("{choice} finished in {} steps", solution.steps());
                info!("{solution}");
            }
            Err(e) => error!("{choice} failed: {e}"),
        }
    }

    Ok(())
}
