//! Drives an [`Actor`] through a [`Maze`] with a [`Strategy`] until it reaches the end
use crate::actor::Actor;
use crate::grid::{Cell, Coordinate, Direction, Maze};
use crate::settings::SolverSettings;
use crate::strategy::{create_strategy, Strategy, StrategyChoice, TieBreak};
use rand::rngs::ThreadRng;
use rand::RngCore;
use std::collections::HashMap;
use std::fmt;

/// Reasons a run stops before reaching the end
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// Every run must begin with the actor on the start cell
    #[error("actor should start from {expected}, but is at {found:?}")]
    ActorNotAtStart {
        /// The maze's start
        expected: Coordinate,
        /// Where the actor was, if anywhere
        found: Option<Coordinate>,
    },

    /// The actor is walled in
    #[error("no possible moves from {at}")]
    NoPossibleMoves {
        /// Where the actor is stuck
        at: Coordinate,
    },

    /// A strategy picked a direction that can't be entered
    #[error("cannot move {direction:?} from {at}")]
    IllegalMove {
        /// Where the actor is
        at: Coordinate,
        /// The direction that was picked
        direction: Direction,
    },

    /// The configured step limit ran out
    #[error("end not reached within {limit} steps")]
    StepLimitExceeded {
        /// [`SolverSettings::max_steps`]
        limit: usize,
    },
}

/// The enterable neighbors of one position, indexed by [`Direction`]
///
/// # Examples
///
/// ```
/// use maze_solver::grid::{Coordinate, Direction, Maze};
/// use maze_solver::solver::PossibleMoves;
///
/// let maze: Maze = "S_\nXG".parse().unwrap();
/// let moves = PossibleMoves::compute(&maze, Coordinate::new(1, 1));
/// assert_eq!(moves.len(), 1);
/// assert_eq!(moves.get(Direction::East).unwrap().location, Coordinate::new(1, 2));
/// assert_eq!(moves.get(Direction::South), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PossibleMoves {
    moves: [Option<Cell>; 4],
}

impl PossibleMoves {
    /// Find every direction the actor could move from `position`
    pub fn compute(maze: &Maze, position: Coordinate) -> Self {
        let mut moves = [None; 4];
        for direction in Direction::get_all() {
            let next = position.neighbor(direction);
            if maze.is_accessible(&next) {
                moves[u8::from(direction) as usize] = maze.cell(&next);
            }
        }
        Self { moves }
    }

    /// The cell reached by moving in `direction`, if it can be entered
    pub fn get(&self, direction: Direction) -> Option<Cell> {
        self.moves[u8::from(direction) as usize]
    }

    /// Whether `direction` can be taken
    pub fn contains(&self, direction: Direction) -> bool {
        self.get(direction).is_some()
    }

    /// The possible directions, in canonical order
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.iter().map(|(direction, _)| direction)
    }

    /// The possible directions and where they lead, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Cell)> + '_ {
        Direction::get_all()
            .into_iter()
            .filter_map(|direction| self.get(direction).map(|cell| (direction, cell)))
    }

    /// Number of possible directions
    pub fn len(&self) -> usize {
        self.moves.iter().flatten().count()
    }

    /// Whether the position is walled in
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the position is a junction (more than one way to go)
    pub fn is_junction(&self) -> bool {
        self.len() > 1
    }
}

/// Everything one run accumulates: visit counts, the path so far and the last direction taken
///
/// Created fresh at the start of every run, so nothing carries over between runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunContext {
    visits: HashMap<Coordinate, u32>,
    path: Vec<Cell>,
    previous_direction: Option<Direction>,
}

impl RunContext {
    /// A run standing on the start, which counts as visited once
    pub fn new(maze: &Maze) -> Self {
        let start = maze.start();
        Self {
            visits: HashMap::from([(start.location, 1)]),
            path: vec![start],
            previous_direction: None,
        }
    }

    /// How many times the run has entered `p`
    pub fn visits(&self, p: &Coordinate) -> u32 {
        self.visits.get(p).copied().unwrap_or(0)
    }

    /// The cells visited so far, in order
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// The direction of the last step
    pub fn previous_direction(&self) -> Option<Direction> {
        self.previous_direction
    }

    /// Overwrite the direction of the last step
    pub fn set_previous_direction(&mut self, direction: Option<Direction>) {
        self.previous_direction = direction;
    }

    /// The fewest visits among the destinations of `moves`, or `None` if there are no moves
    ///
    /// An unvisited destination counts as 0.
    pub fn min_visits(&self, moves: &PossibleMoves) -> Option<u32> {
        moves
            .iter()
            .map(|(_, cell)| self.visits(&cell.location))
            .min()
    }

    /// The directions whose destination has [`RunContext::min_visits`] visits, in canonical order
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_solver::grid::{Direction, Maze};
    /// use maze_solver::solver::{PossibleMoves, RunContext};
    ///
    /// let maze: Maze = "S__\n_X_\n__G".parse().unwrap();
    /// let run = RunContext::new(&maze);
    /// let moves = PossibleMoves::compute(&maze, maze.start().location);
    /// assert_eq!(
    ///     run.min_visit_candidates(&moves),
    ///     vec![Direction::South, Direction::East]
    /// );
    /// ```
    pub fn min_visit_candidates(&self, moves: &PossibleMoves) -> Vec<Direction> {
        let Some(min) = self.min_visits(moves) else {
            return vec![];
        };
        moves
            .iter()
            .filter(|(_, cell)| self.visits(&cell.location) == min)
            .map(|(direction, _)| direction)
            .collect()
    }

    /// Record a step in `direction` onto `destination`
    pub(crate) fn record_move(&mut self, direction: Direction, destination: Cell) {
        *self.visits.entry(destination.location).or_insert(0) += 1;
        self.path.push(destination);
        self.previous_direction = Some(direction);
    }

    fn into_solution(self, strategy: StrategyChoice) -> Solution {
        Solution {
            strategy,
            path: self.path,
            visits: self.visits,
        }
    }
}

/// The outcome of a finished run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    strategy: StrategyChoice,
    path: Vec<Cell>,
    visits: HashMap<Coordinate, u32>,
}

impl Solution {
    /// The strategy that produced this solution
    pub fn strategy(&self) -> StrategyChoice {
        self.strategy
    }

    /// Every cell the actor stood on, from the start to the end
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Number of moves made
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// How many times each cell was entered
    pub fn visits(&self) -> &HashMap<Coordinate, u32> {
        &self.visits
    }

    /// How many times `p` was entered
    pub fn visits_at(&self, p: &Coordinate) -> u32 {
        self.visits.get(p).copied().unwrap_or(0)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

/// Solves one [`Maze`] any number of times, with any strategy
///
/// The maze is only read; each solve gets its own [`RunContext`]. The random source is shared
/// by every solve made through this solver.
///
/// # Examples
///
/// ```
/// use maze_solver::actor::Actor;
/// use maze_solver::grid::Maze;
/// use maze_solver::solver::MazeSolver;
/// use maze_solver::strategy::TieBreak;
///
/// let maze: Maze = "S__\nXX_\nG__".parse().unwrap();
/// let mut actor = Actor::new();
/// let solution = MazeSolver::new(&maze)
///     .mark_the_path(&mut actor, TieBreak::Deterministic)
///     .unwrap();
///
/// assert_eq!(
///     solution.to_string(),
///     "(1:1 START), (1:2), (1:3), (2:3), (3:3), (3:2), (3:1 END)"
/// );
/// ```
pub struct MazeSolver<'m, R = ThreadRng> {
    maze: &'m Maze,
    rng: R,
    settings: SolverSettings,
}

impl<'m> MazeSolver<'m, ThreadRng> {
    /// Create a solver drawing randomness from the thread-local generator
    pub fn new(maze: &'m Maze) -> Self {
        Self::with_rng(maze, rand::thread_rng())
    }
}

impl<'m, R: RngCore> MazeSolver<'m, R> {
    /// Create a solver drawing randomness from `rng`
    pub fn with_rng(maze: &'m Maze, rng: R) -> Self {
        Self {
            maze,
            rng,
            settings: SolverSettings::default(),
        }
    }

    /// Replace the [`SolverSettings`]
    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The maze being solved
    pub fn maze(&self) -> &Maze {
        self.maze
    }

    /// The settings in use
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Solve with the random mouse algorithm
    pub fn random_mouse(&mut self, actor: &mut Actor) -> Result<Solution, SolveError> {
        self.solve(actor, StrategyChoice::RandomMouse)
    }

    /// Solve with the mark the path algorithm
    pub fn mark_the_path(
        &mut self,
        actor: &mut Actor,
        tie_break: TieBreak,
    ) -> Result<Solution, SolveError> {
        let choice = match tie_break {
            TieBreak::Deterministic => StrategyChoice::MarkThePathDeterministic,
            TieBreak::Randomized => StrategyChoice::MarkThePathRandomized,
        };
        self.solve(actor, choice)
    }

    /// Solve with the chosen strategy
    pub fn solve(
        &mut self,
        actor: &mut Actor,
        choice: StrategyChoice,
    ) -> Result<Solution, SolveError> {
        let mut strategy = create_strategy(&choice);
        self.solve_with(actor, strategy.as_mut())
    }

    /// Move the actor to the start, then [`MazeSolver::run`]
    pub fn solve_with(
        &mut self,
        actor: &mut Actor,
        strategy: &mut dyn Strategy,
    ) -> Result<Solution, SolveError> {
        actor.set_position(self.maze.start().location);
        self.run(actor, strategy)
    }

    /// Walk the actor from the start to the end.
    ///
    /// Fails immediately if the actor is not standing on the start. Without
    /// [`SolverSettings::max_steps`], this never returns on mazes whose end is unreachable.
    pub fn run(
        &mut self,
        actor: &mut Actor,
        strategy: &mut dyn Strategy,
    ) -> Result<Solution, SolveError> {
        let start = self.maze.start().location;
        let end = self.maze.end().location;
        let mut position = match actor.position() {
            Some(p) if p == start => p,
            found => {
                return Err(SolveError::ActorNotAtStart {
                    expected: start,
                    found,
                })
            }
        };

        let mut run = RunContext::new(self.maze);
        if position != end {
            let moves = PossibleMoves::compute(self.maze, position);
            strategy.prepare(&mut run, &moves, &mut self.rng);
        }

        let mut steps = 0;
        while position != end {
            if let Some(limit) = self.settings.max_steps {
                if steps >= limit {
                    return Err(SolveError::StepLimitExceeded { limit });
                }
            }

            let moves = PossibleMoves::compute(self.maze, position);
            let direction = strategy
                .next_direction(&run, &moves, &mut self.rng)
                .ok_or(SolveError::NoPossibleMoves { at: position })?;
            let destination = moves
                .get(direction)
                .ok_or(SolveError::IllegalMove {
                    at: position,
                    direction,
                })?;

            // the actor was checked to be placed above
            position = actor.step(direction).ok_or(SolveError::ActorNotAtStart {
                expected: start,
                found: None,
            })?;
            run.record_move(direction, destination);
            steps += 1;
        }

        Ok(run.into_solution(strategy.choice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::standard_mazes::StandardMaze;
    use crate::grid::CellType;
    use crate::strategy::{MarkThePath, RandomMouse};
    use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn path_coords(solution: &Solution) -> Vec<(i32, i32)> {
        solution
            .path()
            .iter()
            .map(|cell| (cell.location.row, cell.location.col))
            .collect()
    }

    fn seeded(maze: &Maze, seed: u64) -> MazeSolver<'_, StdRng> {
        MazeSolver::with_rng(maze, StdRng::seed_from_u64(seed))
    }

    const SIMPLE_PATH: [(i32, i32); 7] = [(1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (3, 2), (3, 1)];

    #[test]
    fn simple_maze_all_strategies() {
        let maze = StandardMaze::Simple.build();
        let mut actor = Actor::new();
        for seed in 0..20 {
            let mut solver = seeded(&maze, seed);
            for choice in StrategyChoice::get_all() {
                let solution = solver.solve(&mut actor, choice).unwrap();
                assert_eq!(path_coords(&solution), SIMPLE_PATH.to_vec(), "{choice}");
                assert_eq!(solution.strategy(), choice);
                assert_eq!(solution.path()[0].cell_type, CellType::Start);
                assert_eq!(solution.path()[6].cell_type, CellType::End);
                assert_eq!(actor.position(), Some(maze.end().location));
            }
        }
    }

    #[test]
    fn simple_maze_display() {
        let maze = StandardMaze::Simple.build();
        let solution = MazeSolver::new(&maze)
            .random_mouse(&mut Actor::new())
            .unwrap();
        assert_eq!(
            solution.to_string(),
            "(1:1 START), (1:2), (1:3), (2:3), (3:3), (3:2), (3:1 END)"
        );
        assert_eq!(solution.steps(), 6);
    }

    #[test]
    fn deterministic_branching_goes_south_first() {
        let maze = StandardMaze::Branching.build();
        let solution = MazeSolver::new(&maze)
            .mark_the_path(&mut Actor::new(), TieBreak::Deterministic)
            .unwrap();
        assert_eq!(
            path_coords(&solution),
            vec![(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]
        );
    }

    #[test]
    fn deterministic_large_maze() {
        let maze = StandardMaze::Large.build();
        let mut actor = Actor::new();
        let mut solver = MazeSolver::new(&maze);
        let first = solver
            .mark_the_path(&mut actor, TieBreak::Deterministic)
            .unwrap();
        let second = solver
            .mark_the_path(&mut actor, TieBreak::Deterministic)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first.path().len(), 39);
        assert_eq!(first.path().last(), Some(&maze.end()));
        // the dead end at (1, 15) is entered once and left the way it came
        assert_eq!(first.visits_at(&Coordinate::new(1, 15)), 1);
        assert_eq!(first.visits_at(&Coordinate::new(1, 14)), 2);
        assert_eq!(first.visits_at(&Coordinate::new(1, 1)), 1);
    }

    #[test]
    fn solve_resets_the_actor() {
        let maze = StandardMaze::Large.build();
        let mut actor = Actor::at(Coordinate::new(9, 1));
        let solution = seeded(&maze, 1).random_mouse(&mut actor).unwrap();
        assert_eq!(solution.path()[0], maze.start());
    }

    #[test]
    fn run_fails_fast_when_not_at_start() {
        let maze = StandardMaze::Simple.build();
        let mut solver = MazeSolver::new(&maze);

        let mut actor = Actor::at(Coordinate::new(1, 2));
        let v = solver.run(&mut actor, &mut RandomMouse);
        assert_eq!(
            v,
            Err(SolveError::ActorNotAtStart {
                expected: Coordinate::new(1, 1),
                found: Some(Coordinate::new(1, 2)),
            })
        );
        // the actor is left where it was
        assert_eq!(actor.position(), Some(Coordinate::new(1, 2)));

        let v = solver.run(&mut Actor::new(), &mut RandomMouse);
        assert!(matches!(
            v,
            Err(SolveError::ActorNotAtStart { found: None, .. })
        ));
    }

    #[test]
    fn run_from_start() {
        let maze = StandardMaze::Simple.build();
        let mut actor = Actor::at(maze.start().location);
        let solution = MazeSolver::new(&maze)
            .run(&mut actor, &mut MarkThePath::default())
            .unwrap();
        assert_eq!(path_coords(&solution), SIMPLE_PATH.to_vec());
    }

    #[test]
    fn walled_in_start() {
        let maze: Maze = "SX_\nX__\n__G".parse().unwrap();
        for choice in StrategyChoice::get_all() {
            let v = seeded(&maze, 0).solve(&mut Actor::new(), choice);
            assert_eq!(
                v,
                Err(SolveError::NoPossibleMoves {
                    at: Coordinate::new(1, 1)
                })
            );
        }
    }

    #[test]
    fn step_limit_stops_unreachable_end() {
        let maze: Maze = "S__X\n___X\nXXXX\nXXXG".parse().unwrap();
        let settings = SolverSettings {
            max_steps: Some(50),
        };
        for choice in StrategyChoice::get_all() {
            let v = seeded(&maze, 3)
                .with_settings(settings.clone())
                .solve(&mut Actor::new(), choice);
            assert_eq!(v, Err(SolveError::StepLimitExceeded { limit: 50 }));
        }
    }

    #[test]
    fn step_limit_does_not_change_result() {
        let maze = StandardMaze::Large.build();
        let unbounded = seeded(&maze, 9).random_mouse(&mut Actor::new()).unwrap();
        let bounded = seeded(&maze, 9)
            .with_settings(SolverSettings {
                max_steps: Some(unbounded.steps()),
            })
            .random_mouse(&mut Actor::new())
            .unwrap();
        assert_eq!(unbounded, bounded);
    }

    #[test]
    fn strategy_with_illegal_move() {
        struct AlwaysNorth;
        impl Strategy for AlwaysNorth {
            fn choice(&self) -> StrategyChoice {
                StrategyChoice::RandomMouse
            }
            fn next_direction(
                &mut self,
                _run: &RunContext,
                _moves: &PossibleMoves,
                _rng: &mut dyn RngCore,
            ) -> Option<Direction> {
                Some(Direction::North)
            }
        }

        let maze = StandardMaze::Simple.build();
        let v = MazeSolver::new(&maze).solve_with(&mut Actor::new(), &mut AlwaysNorth);
        assert_eq!(
            v,
            Err(SolveError::IllegalMove {
                at: Coordinate::new(1, 1),
                direction: Direction::North
            })
        );
    }

    /// Delegates to another strategy, checking on every step that no visit count went down
    struct VisitRecorder {
        inner: Box<dyn Strategy>,
        cells: Vec<Coordinate>,
        last: HashMap<Coordinate, u32>,
        calls: usize,
    }

    impl VisitRecorder {
        fn new(maze: &Maze, choice: StrategyChoice) -> Self {
            let width = maze.width() as i32;
            let cells = (1..=maze.height() as i32)
                .flat_map(|row| (1..=width).map(move |col| Coordinate::new(row, col)))
                .collect();
            Self {
                inner: create_strategy(&choice),
                cells,
                last: HashMap::new(),
                calls: 0,
            }
        }

        fn check(&mut self, run: &RunContext) {
            for p in &self.cells {
                let now = run.visits(p);
                let before = self.last.get(p).copied().unwrap_or(0);
                assert!(now >= before, "visits at {p} went from {before} to {now}");
                self.last.insert(*p, now);
            }
            self.calls += 1;
        }
    }

    impl Strategy for VisitRecorder {
        fn choice(&self) -> StrategyChoice {
            self.inner.choice()
        }

        fn prepare(&mut self, run: &mut RunContext, moves: &PossibleMoves, rng: &mut dyn RngCore) {
            self.check(run);
            self.inner.prepare(run, moves, rng);
            self.check(run);
        }

        fn next_direction(
            &mut self,
            run: &RunContext,
            moves: &PossibleMoves,
            rng: &mut dyn RngCore,
        ) -> Option<Direction> {
            self.check(run);
            self.inner.next_direction(run, moves, rng)
        }
    }

    #[test]
    fn visit_counts_never_decrease() {
        let maze = StandardMaze::Large.build();
        for choice in StrategyChoice::get_all() {
            for seed in 0..10 {
                let mut recorder = VisitRecorder::new(&maze, choice);
                let solution = seeded(&maze, seed)
                    .solve_with(&mut Actor::new(), &mut recorder)
                    .unwrap();
                assert_eq!(solution.strategy(), choice);
                // prepare checks twice, then once per step
                assert_eq!(recorder.calls, solution.steps() + 2);
                for (p, before) in &recorder.last {
                    assert!(solution.visits_at(p) >= *before);
                }
            }
        }
    }

    #[test]
    fn possible_moves_canonical_order() {
        let maze = StandardMaze::Large.build();
        // (3, 12): north (2, 12), south is a wall, east (3, 13), west is a wall
        let moves = PossibleMoves::compute(&maze, Coordinate::new(3, 12));
        let directions: Vec<_> = moves.directions().collect();
        assert_eq!(directions, vec![Direction::North, Direction::East]);
        assert!(moves.is_junction());
        assert!(!moves.is_empty());
    }

    #[test]
    fn possible_moves_skip_walls_and_edges() {
        let maze = StandardMaze::Branching.build();
        let moves = PossibleMoves::compute(&maze, Coordinate::new(1, 1));
        let directions: Vec<_> = moves.directions().collect();
        assert_eq!(directions, vec![Direction::South, Direction::East]);
        assert_eq!(
            moves.get(Direction::South).map(|cell| cell.location),
            Some(Coordinate::new(2, 1))
        );
        assert_eq!(moves.get(Direction::North), None);

        // (1, 2) has a wall to the south and the edge to the north
        let moves = PossibleMoves::compute(&maze, Coordinate::new(1, 2));
        let directions: Vec<_> = moves.directions().collect();
        assert_eq!(directions, vec![Direction::East, Direction::West]);
        assert_eq!(
            moves.get(Direction::West).map(|cell| cell.location),
            Some(Coordinate::new(1, 1))
        );
    }

    #[test]
    fn min_visits_prefers_unvisited() {
        let maze = StandardMaze::Branching.build();
        let mut run = RunContext::new(&maze);
        let moves = PossibleMoves::compute(&maze, maze.start().location);
        assert_eq!(run.min_visits(&moves), Some(0));

        run.record_move(Direction::South, maze.cell(&Coordinate::new(2, 1)).unwrap());
        run.record_move(Direction::East, maze.cell(&Coordinate::new(1, 2)).unwrap());
        run.record_move(Direction::East, maze.cell(&Coordinate::new(1, 2)).unwrap());
        assert_eq!(run.min_visits(&moves), Some(1));
        assert_eq!(run.min_visit_candidates(&moves), vec![Direction::South]);
        assert_eq!(run.previous_direction(), Some(Direction::East));
        assert_eq!(run.path().len(), 4);

        assert_eq!(run.min_visits(&PossibleMoves::default()), None);
        assert!(run.min_visit_candidates(&PossibleMoves::default()).is_empty());
    }

    #[test]
    fn seeded_runs_reproduce() {
        let maze = StandardMaze::Large.build();
        for choice in [StrategyChoice::RandomMouse, StrategyChoice::MarkThePathRandomized] {
            let a = seeded(&maze, 1234).solve(&mut Actor::new(), choice).unwrap();
            let b = seeded(&maze, 1234).solve(&mut Actor::new(), choice).unwrap();
            assert_eq!(a, b);
        }
    }

    proptest! {
        #[test]
        fn randomized_runs_reach_the_end(seed in any::<u64>()) {
            let maze = StandardMaze::Large.build();
            let start = maze.start();
            let mut solver = seeded(&maze, seed);
            let mut actor = Actor::new();
            for choice in StrategyChoice::get_all() {
                let solution = solver.solve(&mut actor, choice).unwrap();
                let path = solution.path();
                prop_assert_eq!(path.first(), Some(&start));
                prop_assert_eq!(path.last().map(|cell| cell.cell_type), Some(CellType::End));
                // the end is only ever entered once, as the final step
                prop_assert_eq!(solution.visits_at(&maze.end().location), 1);
                for cell in path {
                    prop_assert!(solution.visits_at(&cell.location) >= 1);
                    prop_assert!(maze.is_accessible(&cell.location));
                }
                for pair in path.windows(2) {
                    let (a, b) = (pair[0].location, pair[1].location);
                    prop_assert_eq!((a.row - b.row).abs() + (a.col - b.col).abs(), 1);
                }
                let total: u32 = solution.visits().values().sum();
                prop_assert_eq!(total as usize, path.len());
            }
        }
    }
}
