//! Policies that decide which way the actor goes next
mod mark_the_path;
mod random_mouse;

pub use crate::strategy::mark_the_path::{MarkThePath, TieBreak};
pub use crate::strategy::random_mouse::RandomMouse;

use crate::grid::Direction;
use crate::solver::{PossibleMoves, RunContext};
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every strategy the solver knows how to run
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Hash, Ord, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyChoice {
    /// Wander randomly, never turning back at a junction
    RandomMouse,
    /// Prefer the least visited neighbor, ties go to the first in canonical direction order
    #[default]
    MarkThePathDeterministic,
    /// Prefer the least visited neighbor, ties are broken uniformly at random
    MarkThePathRandomized,
}

impl StrategyChoice {
    /// Get a list of all available strategies
    pub fn get_all() -> [Self; 3] {
        [
            Self::RandomMouse,
            Self::MarkThePathDeterministic,
            Self::MarkThePathRandomized,
        ]
    }

    /// The name used for this strategy in settings files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::RandomMouse => "random-mouse",
            Self::MarkThePathDeterministic => "mark-the-path-deterministic",
            Self::MarkThePathRandomized => "mark-the-path-randomized",
        }
    }
}

impl fmt::Display for StrategyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy name that isn't one of [`StrategyChoice::get_all`]
#[derive(Debug, thiserror::Error)]
#[error("unknown strategy {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for StrategyChoice {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::get_all()
            .into_iter()
            .find(|choice| choice.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Build the strategy object for a [`StrategyChoice`]
pub fn create_strategy(choice: &StrategyChoice) -> Box<dyn Strategy> {
    match choice {
        StrategyChoice::RandomMouse => Box::new(RandomMouse),
        StrategyChoice::MarkThePathDeterministic => {
            Box::new(MarkThePath::new(TieBreak::Deterministic))
        }
        StrategyChoice::MarkThePathRandomized => Box::new(MarkThePath::new(TieBreak::Randomized)),
    }
}

/// Decides one step at a time where the actor goes
///
/// Strategies keep no per-run data of their own; everything a run accumulates lives in the
/// [`RunContext`], so one strategy object may be reused for any number of runs.
pub trait Strategy {
    /// Which [`StrategyChoice`] this is
    fn choice(&self) -> StrategyChoice;

    /// Called once per run, before the first step, with the moves available at the start
    fn prepare(&mut self, _run: &mut RunContext, _moves: &PossibleMoves, _rng: &mut dyn RngCore) {}

    /// Pick the direction of the next step, or `None` if there is nowhere to go
    ///
    /// The returned direction must be one of `moves`
    fn next_direction(
        &mut self,
        run: &RunContext,
        moves: &PossibleMoves,
        rng: &mut dyn RngCore,
    ) -> Option<Direction>;
}

/// Choose uniformly among `candidates`, leaving out the reverse of `previous`
///
/// The reverse is only left out while something else remains, so a dead end can always be
/// escaped.
pub(crate) fn choose_avoiding_reverse(
    candidates: &[Direction],
    previous: Option<Direction>,
    rng: &mut dyn RngCore,
) -> Option<Direction> {
    let forward: Vec<Direction> = match previous {
        Some(previous) => candidates
            .iter()
            .copied()
            .filter(|d| *d != previous.opposite())
            .collect(),
        None => candidates.to_vec(),
    };
    if forward.is_empty() {
        candidates.choose(rng).copied()
    } else {
        forward.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn names_round_trip() {
        for choice in StrategyChoice::get_all() {
            assert_eq!(choice.name().parse::<StrategyChoice>().unwrap(), choice);
            assert_eq!(create_strategy(&choice).choice(), choice);
        }
        assert!("left-hand".parse::<StrategyChoice>().is_err());
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&StrategyChoice::RandomMouse).unwrap();
        assert_eq!(json, "\"random-mouse\"");
        let choice: StrategyChoice = serde_json::from_str("\"mark-the-path-randomized\"").unwrap();
        assert_eq!(choice, StrategyChoice::MarkThePathRandomized);
    }

    #[test]
    fn avoids_reverse_at_junction() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = [Direction::North, Direction::South, Direction::East];
        for _ in 0..200 {
            let d = choose_avoiding_reverse(&candidates, Some(Direction::North), &mut rng);
            assert!(matches!(d, Some(Direction::North) | Some(Direction::East)));
        }
    }

    #[test]
    fn reverse_allowed_when_nothing_else() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose_avoiding_reverse(&[Direction::West], Some(Direction::East), &mut rng),
            Some(Direction::West)
        );
        assert_eq!(choose_avoiding_reverse(&[], None, &mut rng), None);
    }

    #[test]
    fn without_previous_all_candidates_are_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        let candidates = Direction::get_all();
        let mut seen = [false; 4];
        for _ in 0..400 {
            if let Some(d) = choose_avoiding_reverse(&candidates, None, &mut rng) {
                seen[u8::from(d) as usize] = true;
            }
        }
        assert_eq!(seen, [true; 4]);
    }
}
