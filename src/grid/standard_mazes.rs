#![cfg_attr(rustfmt, rustfmt_skip)]
//! A set of pre-made mazes

use crate::grid::builder::MazeBuilder;
use crate::grid::Maze;
use serde::{Deserialize, Serialize};

/// The pre-made mazes
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub enum StandardMaze {
    /// A single corridor with no junctions
    #[default]
    Simple,
    /// Two unvisited ways out of the start
    Branching,
    /// Loops and dead ends
    Large,
}

impl StandardMaze {
    /// Get a list of all available mazes
    pub fn get_all() -> [Self; 3] {
        [Self::Simple, Self::Branching, Self::Large]
    }

    /// Get the text notation associated with this enum
    pub fn text(&self) -> &'static str {
        match self {
            Self::Simple => MAZE_SIMPLE,
            Self::Branching => MAZE_BRANCHING,
            Self::Large => MAZE_LARGE,
        }
    }

    /// Get the [`Maze`] associated with this enum
    pub fn build(&self) -> Maze {
        match MazeBuilder::default().build_named(self.text(), format!("{self:?}")) {
            Ok(maze) => maze,
            Err(e) => unreachable!("standard maze {self:?} is invalid: {e}"),
        }
    }
}

/// A corridor that winds from the top left to the bottom left
///
/// ```
/// use maze_solver::grid::standard_mazes::MAZE_SIMPLE;
/// use maze_solver::grid::Maze;
///
/// let maze: Maze = MAZE_SIMPLE.parse().unwrap();
/// ```
pub const MAZE_SIMPLE: &str = "\
S__
XX_
G__";

/// The start has an open cell both to the south and to the east
pub const MAZE_BRANCHING: &str = "\
S__
_X_
__G";

/// A 9x15 maze with loops and dead ends
pub const MAZE_LARGE: &str = "\
S___X_______X__
XX_XX_XXXXX_X_X
___X__X___X____
_X_X_XX_X_XXXX_
_X___X__X______
_XXX_X_XXXX_XX_
___X___X____X__
XX_XXX_X_XX_X_X
_____X___X____G";
