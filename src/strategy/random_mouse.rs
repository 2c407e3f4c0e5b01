use crate::grid::Direction;
use crate::solver::{PossibleMoves, RunContext};
use crate::strategy::{choose_avoiding_reverse, Strategy, StrategyChoice};
use rand::RngCore;

/// Follows corridors and turns randomly at junctions, never reversing unless at a dead end
///
/// Does not terminate on mazes where the end can't be reached from the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomMouse;

impl Strategy for RandomMouse {
    fn choice(&self) -> StrategyChoice {
        StrategyChoice::RandomMouse
    }

    fn next_direction(
        &mut self,
        run: &RunContext,
        moves: &PossibleMoves,
        rng: &mut dyn RngCore,
    ) -> Option<Direction> {
        let directions: Vec<Direction> = moves.directions().collect();
        if directions.len() == 1 {
            // corridor or dead end; go the only way there is
            return directions.first().copied();
        }
        choose_avoiding_reverse(&directions, run.previous_direction(), rng)
    }
}
