//! Logical maze structs and utilities.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub mod builder;
pub mod standard_mazes;

use builder::{BuildError, MazeBuilder};

/// An integer location in a [`Maze`]
///
/// Mazes built from text are 1-indexed: the top left cell is `(1, 1)`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row - increases downwards
    pub row: i32,
    /// Column - increases to the right
    pub col: i32,
}

impl Coordinate {
    /// Create a new Coordinate
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the [`Coordinate`] one step away in the given direction.
    ///
    /// No bounds checking is done; see [`Maze::is_accessible`].
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_solver::grid::{Coordinate, Direction};
    ///
    /// let p = Coordinate::new(1, 1);
    /// assert_eq!(p.neighbor(Direction::North), Coordinate::new(0, 1));
    /// assert_eq!(p.neighbor(Direction::South), Coordinate::new(2, 1));
    /// assert_eq!(p.neighbor(Direction::East), Coordinate::new(1, 2));
    /// assert_eq!(p.neighbor(Direction::West), Coordinate::new(1, 0));
    /// ```
    pub fn neighbor(&self, direction: Direction) -> Coordinate {
        match direction {
            Direction::North => Coordinate::new(self.row - 1, self.col),
            Direction::South => Coordinate::new(self.row + 1, self.col),
            Direction::East => Coordinate::new(self.row, self.col + 1),
            Direction::West => Coordinate::new(self.row, self.col - 1),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.row, self.col)
    }
}

/// Enum for direction values.
///
/// The declaration order is the canonical order used to break ties deterministically.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, IntoPrimitive)]
#[repr(u8)]
pub enum Direction {
    /// -row
    North = 0,
    /// +row
    South = 1,
    /// +col
    East = 2,
    /// -col
    West = 3,
}

impl Direction {
    /// All directions, in canonical order
    pub fn get_all() -> [Self; 4] {
        [Self::North, Self::South, Self::East, Self::West]
    }

    /// The direction that undoes this one
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_solver::grid::Direction;
    ///
    /// assert_eq!(Direction::North.opposite(), Direction::South);
    /// assert_eq!(Direction::East.opposite(), Direction::West);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// Enum for [`Maze`] cell values.
///
/// Each variant's discriminant is the character used for it in the text notation.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum CellType {
    /// Empty space
    Open = b'_',
    /// Wall
    Wall = b'X',
    /// Where every solve begins
    Start = b'S',
    /// The goal
    End = b'G',
}

impl CellType {
    /// Returns whether this [`CellType`] can be entered.
    pub fn walkable(self) -> bool {
        self != CellType::Wall
    }

    /// The character for this cell in the text notation
    pub fn symbol(self) -> char {
        u8::from(self) as char
    }
}

/// One position in a [`Maze`] together with its classification
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Where the cell is
    pub location: Coordinate,
    /// What the cell is
    pub cell_type: CellType,
}

impl Cell {
    /// Create a new Cell
    pub fn new(location: Coordinate, cell_type: CellType) -> Self {
        Self {
            location,
            cell_type,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Coordinate { row, col } = self.location;
        match self.cell_type {
            CellType::Start => write!(f, "({row}:{col} START)"),
            CellType::End => write!(f, "({row}:{col} END)"),
            _ => write!(f, "({row}:{col})"),
        }
    }
}

/// A rectangular maze with exactly one start and one end.
///
/// Mazes are read-only once built and may be shared between any number of solves.
///
/// # Examples
///
/// ```
/// use maze_solver::grid::{CellType, Coordinate, Maze};
///
/// let maze: Maze = "S_\nXG".parse().unwrap();
///
/// assert_eq!(maze.height(), 2);
/// assert_eq!(maze.width(), 2);
/// assert_eq!(maze.at(&Coordinate::new(2, 1)), Some(CellType::Wall));
/// assert_eq!(maze.start().location, Coordinate::new(1, 1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    name: String,
    height: usize,
    width: usize,
    cells: HashMap<Coordinate, CellType>,
    start: Coordinate,
    end: Coordinate,
}

impl Maze {
    /// Assemble a maze from parts that have already been validated.
    ///
    /// Only [`MazeBuilder`] creates mazes; it guarantees that `start` and `end` are the only
    /// cells of their kind.
    pub(crate) fn from_parts(
        name: String,
        height: usize,
        width: usize,
        cells: HashMap<Coordinate, CellType>,
        start: Coordinate,
        end: Coordinate,
    ) -> Self {
        Self {
            name,
            height,
            width,
            cells,
            start,
            end,
        }
    }

    /// A human readable name for where the maze came from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The start cell
    pub fn start(&self) -> Cell {
        Cell::new(self.start, CellType::Start)
    }

    /// The end cell
    pub fn end(&self) -> Cell {
        Cell::new(self.end, CellType::End)
    }

    /// Returns the [`CellType`] at the given position, or `None` if it is outside the maze.
    pub fn at(&self, p: &Coordinate) -> Option<CellType> {
        self.cells.get(p).copied()
    }

    /// Returns the [`Cell`] at the given position, or `None` if it is outside the maze.
    pub fn cell(&self, p: &Coordinate) -> Option<Cell> {
        self.at(p).map(|cell_type| Cell::new(*p, cell_type))
    }

    /// Returns whether the given position can be entered.
    ///
    /// Positions outside the maze are treated exactly like walls.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_solver::grid::{Coordinate, Maze};
    ///
    /// let maze: Maze = "S_\nXG".parse().unwrap();
    /// assert!(maze.is_accessible(&Coordinate::new(1, 2)));
    /// assert!(!maze.is_accessible(&Coordinate::new(2, 1)));
    /// assert!(!maze.is_accessible(&Coordinate::new(0, 1)));
    /// assert!(!maze.is_accessible(&Coordinate::new(3, 3)));
    /// ```
    pub fn is_accessible(&self, p: &Coordinate) -> bool {
        self.at(p).is_some_and(CellType::walkable)
    }
}

impl FromStr for Maze {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MazeBuilder::default().build(s)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=self.height as i32 {
            for col in 1..=self.width as i32 {
                let symbol = self
                    .at(&Coordinate::new(row, col))
                    .map(CellType::symbol)
                    .unwrap_or(' ');
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
