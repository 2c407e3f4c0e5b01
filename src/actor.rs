//! The entity that walks through a maze
use crate::grid::{Coordinate, Direction};

/// Something that occupies one cell of a maze at a time
///
/// An actor outlives a single solve; every solve moves it back to the maze's start.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Actor {
    position: Option<Coordinate>,
}

impl Actor {
    /// Create an actor that has not been placed anywhere yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an actor standing at the given position
    pub fn at(position: Coordinate) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// Where the actor currently is, if it has been placed
    pub fn position(&self) -> Option<Coordinate> {
        self.position
    }

    /// Place the actor
    pub fn set_position(&mut self, position: Coordinate) {
        self.position = Some(position);
    }

    /// Move one cell in the given direction and return the new position.
    ///
    /// Returns `None` and stays unplaced if the actor has not been placed.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_solver::actor::Actor;
    /// use maze_solver::grid::{Coordinate, Direction};
    ///
    /// let mut actor = Actor::at(Coordinate::new(2, 2));
    /// assert_eq!(actor.step(Direction::East), Some(Coordinate::new(2, 3)));
    /// assert_eq!(actor.position(), Some(Coordinate::new(2, 3)));
    ///
    /// assert_eq!(Actor::new().step(Direction::East), None);
    /// ```
    pub fn step(&mut self, direction: Direction) -> Option<Coordinate> {
        let next = self.position?.neighbor(direction);
        self.position = Some(next);
        Some(next)
    }
}
