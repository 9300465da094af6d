//! A generalized NxNxN facelet cube model.
//!
//! Each face is an owned n×n grid of sticker colors, and the only way to
//! change a cube is to apply one of the twelve primitive face turns (six
//! faces, clockwise or counter-clockwise). On top of that the crate offers
//! the solved-state predicate, a hashable canonical snapshot for memoizing
//! visited states, and a flattened sticker-string format for exchanging
//! states with hosts. Search and solving strategy live elsewhere; this crate
//! is only the mechanics of turning faces.

#![warn(clippy::pedantic)]

pub mod cube;
pub mod grid;
pub mod notation;

pub use cube::{CubeError, CubeState, Direction, Face, Move, StateKey};
pub use grid::{Color, FaceGrid, UnknownColor};
pub use notation::{
    NotationError, apply_algorithm, invert_algorithm, parse_algorithm, parse_move,
};
