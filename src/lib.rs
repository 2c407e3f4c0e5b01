#![warn(missing_docs)]
//! Walks an actor through a grid maze, from its start to its end, using the random mouse or
//! mark the path (Trémaux-style) algorithms

pub mod actor;
pub mod grid;
pub mod settings;
pub mod solver;
pub mod strategy;
