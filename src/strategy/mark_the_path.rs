use crate::grid::Direction;
use crate::solver::{PossibleMoves, RunContext};
use crate::strategy::{choose_avoiding_reverse, Strategy, StrategyChoice};
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// How [`MarkThePath`] picks between equally least visited neighbors
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// The first in canonical direction order; runs are reproducible without a seed
    #[default]
    Deterministic,
    /// Uniformly at random
    Randomized,
}

/// Trémaux-style marking: each step goes to the neighbor entered the fewest times so far
///
/// Unvisited neighbors always win over visited ones, so the actor follows new ground until it
/// runs out and only then retraces its steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkThePath {
    tie_break: TieBreak,
}

impl MarkThePath {
    /// Create a new MarkThePath
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// The tie-break policy in use
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

impl Strategy for MarkThePath {
    fn choice(&self) -> StrategyChoice {
        match self.tie_break {
            TieBreak::Deterministic => StrategyChoice::MarkThePathDeterministic,
            TieBreak::Randomized => StrategyChoice::MarkThePathRandomized,
        }
    }

    fn prepare(&mut self, run: &mut RunContext, moves: &PossibleMoves, rng: &mut dyn RngCore) {
        if self.tie_break == TieBreak::Randomized {
            let directions: Vec<Direction> = moves.directions().collect();
            let seed = choose_avoiding_reverse(&directions, run.previous_direction(), rng);
            run.set_previous_direction(seed);
        }
    }

    fn next_direction(
        &mut self,
        run: &RunContext,
        moves: &PossibleMoves,
        rng: &mut dyn RngCore,
    ) -> Option<Direction> {
        let candidates = run.min_visit_candidates(moves);
        match self.tie_break {
            TieBreak::Deterministic => candidates.first().copied(),
            TieBreak::Randomized => candidates.choose(rng).copied(),
        }
    }
}
