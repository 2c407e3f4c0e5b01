//! Builds a [`Maze`] from its text notation, validating it along the way.

use crate::grid::{CellType, Coordinate, Maze};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Largest number of rows or columns accepted by default
pub const DEFAULT_MAX_DIMENSION: usize = i32::MAX as usize;

/// Reasons a maze description is rejected
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The text has no cells
    #[error("maze is empty")]
    Empty,

    /// A character other than `_`, `X`, `S` or `G`
    #[error("illegal character {character:?} at ({row}:{col})")]
    IllegalCharacter {
        /// The offending character
        character: char,
        /// 1-indexed row
        row: usize,
        /// 1-indexed column
        col: usize,
    },

    /// No `S`
    #[error("maze should always have 1 start point")]
    MissingStart,

    /// No `G`
    #[error("maze should always have 1 end point")]
    MissingEnd,

    /// More than one `S`
    #[error("second start point at {second}, first was at {first}")]
    DuplicateStart {
        /// The first `S`
        first: Coordinate,
        /// The `S` that was rejected
        second: Coordinate,
    },

    /// More than one `G`
    #[error("second end point at {second}, first was at {first}")]
    DuplicateEnd {
        /// The first `G`
        first: Coordinate,
        /// The `G` that was rejected
        second: Coordinate,
    },

    /// More rows or columns than [`MazeBuilder::with_max_dimension`] allows
    #[error("maze of {height}x{width} exceeds the maximum dimension {max}")]
    TooLarge {
        /// Rows found
        height: usize,
        /// Columns found, going by the first row
        width: usize,
        /// The limit
        max: usize,
    },

    /// A row whose length differs from the first row's
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// 1-indexed row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of this row
        found: usize,
    },

    /// The maze file couldn't be read
    #[error("could not read maze file: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads mazes written one character per cell, one line per row.
///
/// `_` is open, `X` is a wall, `S` is the start and `G` is the end.
///
/// # Examples
///
/// ```
/// use maze_solver::grid::builder::{BuildError, MazeBuilder};
///
/// let maze = MazeBuilder::default().build("S__\nXX_\nG__").unwrap();
/// assert_eq!(maze.height(), 3);
///
/// let err = MazeBuilder::default().build("S__\nXX_").unwrap_err();
/// assert!(matches!(err, BuildError::MissingEnd));
/// ```
#[derive(Clone, Debug)]
pub struct MazeBuilder {
    max_dimension: usize,
}

impl Default for MazeBuilder {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl MazeBuilder {
    /// Reject mazes with more than `max_dimension` rows or columns
    pub fn with_max_dimension(mut self, max_dimension: usize) -> Self {
        self.max_dimension = max_dimension.min(DEFAULT_MAX_DIMENSION);
        self
    }

    /// Read and build the maze stored at `path`
    pub fn build_file(&self, path: impl AsRef<Path>) -> Result<Maze, BuildError> {
        let path = path.as_ref();
        info!("Reading maze from file: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        self.build_named(&text, path.display().to_string())
    }

    /// Build a maze from text
    pub fn build(&self, text: &str) -> Result<Maze, BuildError> {
        self.build_named(text, "inline".to_string())
    }

    /// Build a maze from text, reporting it under the given name
    pub fn build_named(&self, text: &str, name: String) -> Result<Maze, BuildError> {
        info!("Maze build started: {name}");
        let result = self.parse(text, name);
        match &result {
            Ok(maze) => info!(
                "Maze build completed: {} ({}x{})",
                maze.name(),
                maze.height(),
                maze.width()
            ),
            Err(e) => warn!("Maze rejected: {e}"),
        }
        result
    }

    fn parse(&self, text: &str, name: String) -> Result<Maze, BuildError> {
        let mut rows: Vec<&str> = text.lines().collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(BuildError::Empty);
        }

        let height = rows.len();
        let width = rows[0].chars().count();
        if height > self.max_dimension || width > self.max_dimension {
            return Err(BuildError::TooLarge {
                height,
                width,
                max: self.max_dimension,
            });
        }

        // height * width is only trustworthy once every row has been checked
        let mut cells = HashMap::with_capacity(text.len());
        let mut start: Option<Coordinate> = None;
        let mut end: Option<Coordinate> = None;

        for (r, line) in rows.iter().enumerate() {
            let row = r + 1;
            let found = line.chars().count();
            if found != width {
                return Err(BuildError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (c, character) in line.chars().enumerate() {
                let col = c + 1;
                let cell_type = u8::try_from(character)
                    .ok()
                    .and_then(|byte| CellType::try_from(byte).ok())
                    .ok_or(BuildError::IllegalCharacter {
                        character,
                        row,
                        col,
                    })?;
                // dimensions are bounded by i32::MAX above
                let p = Coordinate::new(row as i32, col as i32);
                match cell_type {
                    CellType::Start => {
                        if let Some(first) = start {
                            return Err(BuildError::DuplicateStart { first, second: p });
                        }
                        start = Some(p);
                    }
                    CellType::End => {
                        if let Some(first) = end {
                            return Err(BuildError::DuplicateEnd { first, second: p });
                        }
                        end = Some(p);
                    }
                    _ => {}
                }
                cells.insert(p, cell_type);
            }
        }

        let start = start.ok_or(BuildError::MissingStart)?;
        let end = end.ok_or(BuildError::MissingEnd)?;

        Ok(Maze::from_parts(name, height, width, cells, start, end))
    }
}
