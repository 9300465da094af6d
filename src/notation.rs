//! Parsing of face-turn tokens into primitive moves.
//!
//! The cube core only knows quarter turns; this module is the boundary where
//! textual notation gets lowered onto them. `U` and `U'` map to one primitive
//! turn, `U2` to two. Wide turns, slice turns, and whole-cube rotations are
//! not recognized.

use std::str::FromStr;

use thiserror::Error;

use crate::cube::{CubeState, Direction, Face, Move};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotationError {
    #[error("unrecognized move token {0:?}")]
    BadMove(String),
}

impl FromStr for Move {
    type Err = NotationError;

    /// Parses a single primitive token: a face letter with an optional `'`.
    fn from_str(token: &str) -> Result<Move, NotationError> {
        let bad = || NotationError::BadMove(token.to_owned());

        let mut chars = token.chars();
        let face = match chars.next() {
            Some('U') => Face::Up,
            Some('D') => Face::Down,
            Some('L') => Face::Left,
            Some('R') => Face::Right,
            Some('F') => Face::Front,
            Some('B') => Face::Back,
            _ => return Err(bad()),
        };
        let direction = match chars.as_str() {
            "" => Direction::Clockwise,
            "'" => Direction::CounterClockwise,
            _ => return Err(bad()),
        };
        Ok(Move::new(face, direction))
    }
}

/// Lowers one token into primitive turns; a trailing `2` doubles the turn.
pub fn parse_move(token: &str) -> Result<Vec<Move>, NotationError> {
    if let Some(base) = token.strip_suffix('2') {
        let mv: Move = base
            .parse()
            .map_err(|_| NotationError::BadMove(token.to_owned()))?;
        return Ok(vec![mv, mv]);
    }
    Ok(vec![token.parse()?])
}

/// Parses a whitespace-separated move sequence. All-or-nothing: the first
/// bad token fails the whole parse and nothing is returned.
pub fn parse_algorithm(algorithm: &str) -> Result<Vec<Move>, NotationError> {
    let mut moves = Vec::new();
    for token in algorithm.split_whitespace() {
        moves.extend(parse_move(token)?);
    }
    Ok(moves)
}

/// The sequence undoing `moves`: each turn inverted, in reverse order.
#[must_use]
pub fn invert_algorithm(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

/// Parses `algorithm` and applies it to `cube`. The parse happens up front,
/// so a bad token leaves the cube untouched.
pub fn apply_algorithm(cube: &mut CubeState, algorithm: &str) -> Result<(), NotationError> {
    let moves = parse_algorithm(algorithm)?;
    cube.apply_moves(&moves);
    Ok(())
}
