//! The full cube state and its twelve primitive face turns.

use std::fmt;

use log::debug;
use thiserror::Error;

use crate::grid::{Border, Color, FaceGrid, UnknownColor};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CubeError {
    #[error("cube size must be at least 2, got {0}")]
    SizeTooSmall(usize),
    #[error("expected {expected} stickers for a {n}x{n}x{n} cube, got {got}")]
    BadStickerCount {
        n: usize,
        expected: usize,
        got: usize,
    },
    #[error(transparent)]
    UnknownColor(#[from] UnknownColor),
}

/// One of the six faces of the cube.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Fixed face order of the flattened sticker-string format.
    pub const STICKER_ORDER: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    /// The color every sticker of this face holds on a solved cube.
    #[must_use]
    pub fn home_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Green,
            Face::Right => Color::Blue,
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
        }
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// This face's block position within [`Face::STICKER_ORDER`].
    fn sticker_block(self) -> usize {
        match self {
            Face::Up => 0,
            Face::Right => 1,
            Face::Front => 2,
            Face::Down => 3,
            Face::Left => 4,
            Face::Back => 5,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The sense of a quarter turn, as seen looking at the turned face directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A primitive quarter turn of one face. Double turns, wide turns, and whole
/// cube rotations are not moves here; callers compose them from these.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    /// The turn undoing this one.
    #[must_use]
    pub fn inverse(self) -> Move {
        Move {
            face: self.face,
            direction: self.direction.inverse(),
        }
    }

    /// All twelve primitive turns.
    pub fn all() -> impl Iterator<Item = Move> {
        Face::ALL.into_iter().flat_map(|face| {
            [
                Move::new(face, Direction::Clockwise),
                Move::new(face, Direction::CounterClockwise),
            ]
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

/// One slot of the border ring around a turned face: which strip of which
/// adjacent face, and whether that strip runs against the ring's traversal
/// direction once the face is unfolded into its own 2-D frame.
type RingSlot = (Face, Border, bool);

/// The four border strips displaced by turning `face`, listed so that a
/// clockwise turn moves slot k+1's stickers into slot k. Each slot's flip
/// flag orients its strip consistently with the ring, which makes the
/// clockwise and counter-clockwise cycles exact inverses strip-for-strip.
///
/// Flips fall where a strip crosses onto the back face (L and R rings) or
/// where a row strip meets a column strip (F and B rings); the placement is
/// fixed by the physical unfolding of the cube into six independent grids.
fn border_ring(face: Face) -> [RingSlot; 4] {
    match face {
        Face::Up => [
            (Face::Front, Border::Top, false),
            (Face::Right, Border::Top, false),
            (Face::Back, Border::Top, false),
            (Face::Left, Border::Top, false),
        ],
        Face::Down => [
            (Face::Front, Border::Bottom, false),
            (Face::Left, Border::Bottom, false),
            (Face::Back, Border::Bottom, false),
            (Face::Right, Border::Bottom, false),
        ],
        Face::Left => [
            (Face::Up, Border::Left, false),
            (Face::Back, Border::Right, true),
            (Face::Down, Border::Left, false),
            (Face::Front, Border::Left, false),
        ],
        Face::Right => [
            (Face::Up, Border::Right, false),
            (Face::Back, Border::Left, true),
            (Face::Down, Border::Right, false),
            (Face::Front, Border::Right, false),
        ],
        Face::Front => [
            (Face::Up, Border::Bottom, false),
            (Face::Left, Border::Right, true),
            (Face::Down, Border::Top, true),
            (Face::Right, Border::Left, false),
        ],
        Face::Back => [
            (Face::Up, Border::Top, false),
            (Face::Right, Border::Right, true),
            (Face::Down, Border::Bottom, true),
            (Face::Left, Border::Left, false),
        ],
    }
}

/// A deterministic, hashable encoding of a full cube state: all six faces in
/// sticker-string order, each face's rows top to bottom. Two states with
/// equal snapshots are indistinguishable by any operation on [`CubeState`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StateKey(Box<[Color]>);

/// The sticker configuration of one NxNxN cube: six owned [`FaceGrid`]s of
/// the same edge length. Mutated only through [`CubeState::apply_move`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CubeState {
    n: usize,
    faces: [FaceGrid; 6],
}

impl CubeState {
    /// A solved cube of edge length `n`, every face solid in its home color.
    pub fn solved(n: usize) -> Result<CubeState, CubeError> {
        if n < 2 {
            return Err(CubeError::SizeTooSmall(n));
        }
        debug!("creating solved {n}x{n}x{n} cube");
        Ok(CubeState {
            n,
            faces: Face::ALL.map(|face| FaceGrid::solid(n, face.home_color())),
        })
    }

    /// Builds a cube from a flattened sticker string: one letter per sticker,
    /// faces in `URFDLB` order, each face row major. Whitespace is ignored.
    /// Fails without constructing anything on a wrong sticker count or an
    /// unknown color letter.
    pub fn from_stickers(n: usize, stickers: &str) -> Result<CubeState, CubeError> {
        if n < 2 {
            return Err(CubeError::SizeTooSmall(n));
        }

        let colors = stickers
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Color::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let expected = 6 * n * n;
        if colors.len() != expected {
            return Err(CubeError::BadStickerCount {
                n,
                expected,
                got: colors.len(),
            });
        }

        let block_of = |face: Face| {
            let at = face.sticker_block();
            &colors[at * n * n..(at + 1) * n * n]
        };

        debug!("creating {n}x{n}x{n} cube from sticker string");
        Ok(CubeState {
            n,
            faces: Face::ALL.map(|face| FaceGrid::from_cells(n, block_of(face).to_vec())),
        })
    }

    /// Serializes back to the flattened sticker-string format accepted by
    /// [`CubeState::from_stickers`].
    #[must_use]
    pub fn to_stickers(&self) -> String {
        Face::STICKER_ORDER
            .into_iter()
            .flat_map(|face| self.face(face).cells().iter().map(|c| c.letter()))
            .collect()
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face.index()]
    }

    fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face.index()]
    }

    /// Whether every face is uniformly colored. Distinct faces may share a
    /// color; solvedness is per-face uniformity, not a global color count.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(FaceGrid::is_uniform)
    }

    /// The canonical snapshot of this state, usable as a memoization key.
    #[must_use]
    pub fn canonical_snapshot(&self) -> StateKey {
        StateKey(
            Face::STICKER_ORDER
                .into_iter()
                .flat_map(|face| self.face(face).cells().iter().copied())
                .collect(),
        )
    }

    /// Applies one primitive quarter turn: rotates the turned face's own grid
    /// and 4-cycles the border strips of the four adjacent faces. The whole
    /// update is atomic; every strip is read before any is written.
    pub fn apply_move(&mut self, mv: Move) {
        match mv.direction {
            Direction::Clockwise => self.face_mut(mv.face).rotate_cw(),
            Direction::CounterClockwise => self.face_mut(mv.face).rotate_ccw(),
        }

        let ring = border_ring(mv.face);
        let strips = ring.map(|(face, border, flipped)| self.face(face).strip(border, flipped));
        for (slot, &(face, border, flipped)) in ring.iter().enumerate() {
            let source = match mv.direction {
                Direction::Clockwise => (slot + 1) % 4,
                Direction::CounterClockwise => (slot + 3) % 4,
            };
            self.face_mut(face)
                .set_strip(border, flipped, strips[source].clone());
        }
    }

    /// Applies a sequence of turns in order.
    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply_move(mv);
        }
    }
}

impl fmt::Display for CubeState {
    /// Prints the cube unfolded into a cross: Up on top, then the
    /// Left/Front/Right/Back band, then Down.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.n;
        let write_row = |f: &mut fmt::Formatter<'_>, face: Face, row: usize| {
            (0..n).try_for_each(|col| write!(f, "{}", self.face(face).get(row, col)))
        };

        for row in 0..n {
            write!(f, "{:width$}", "", width = n + 1)?;
            write_row(f, Face::Up, row)?;
            writeln!(f)?;
        }
        for row in 0..n {
            for face in [Face::Left, Face::Front, Face::Right, Face::Back] {
                write_row(f, face, row)?;
                if face != Face::Back {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        for row in 0..n {
            write!(f, "{:width$}", "", width = n + 1)?;
            write_row(f, Face::Down, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CubeError, CubeState, Direction, Face, Move};
    use crate::grid::{Color, UnknownColor};

    #[test]
    fn fresh_cubes_are_solved() {
        for n in 2..=7 {
            let cube = CubeState::solved(n).unwrap();
            assert!(cube.is_solved());
            assert_eq!(cube.n(), n);
        }
    }

    #[test]
    fn undersized_cubes_are_rejected() {
        assert_eq!(CubeState::solved(0), Err(CubeError::SizeTooSmall(0)));
        assert_eq!(CubeState::solved(1), Err(CubeError::SizeTooSmall(1)));
        assert_eq!(
            CubeState::from_stickers(1, "WWWWWW"),
            Err(CubeError::SizeTooSmall(1))
        );
    }

    #[test]
    fn u_turn_cycles_top_rows() {
        // On a solved 3x3x3 with U=W, D=Y, L=G, R=B, F=R, B=O, a clockwise U
        // turn pulls each adjacent face's top row from the face on its right.
        let mut cube = CubeState::solved(3).unwrap();
        cube.apply_move(Move::new(Face::Up, Direction::Clockwise));

        let top_row =
            |face: Face| -> Vec<Color> { (0..3).map(|c| cube.face(face).get(0, c)).collect() };
        assert_eq!(top_row(Face::Front), vec![Color::Blue; 3]);
        assert_eq!(top_row(Face::Right), vec![Color::Orange; 3]);
        assert_eq!(top_row(Face::Back), vec![Color::Green; 3]);
        assert_eq!(top_row(Face::Left), vec![Color::Red; 3]);

        // The turned face itself only rotated
        assert!(cube.face(Face::Up).is_uniform());
        assert!(!cube.is_solved());
    }

    #[test]
    fn every_single_turn_unsolves() {
        for n in [2, 3, 4] {
            for mv in Move::all() {
                let mut cube = CubeState::solved(n).unwrap();
                cube.apply_move(mv);
                assert!(!cube.is_solved(), "{mv} left a {n}x{n}x{n} cube solved");
            }
        }
    }

    #[test]
    fn move_preserves_sticker_counts() {
        let mut cube = CubeState::solved(3).unwrap();
        cube.apply_move(Move::new(Face::Front, Direction::Clockwise));
        cube.apply_move(Move::new(Face::Right, Direction::CounterClockwise));

        let stickers = cube.to_stickers();
        for color in ['W', 'Y', 'G', 'B', 'R', 'O'] {
            assert_eq!(stickers.chars().filter(|&c| c == color).count(), 9);
        }
    }

    #[test]
    fn sticker_string_round_trip() {
        let mut cube = CubeState::solved(3).unwrap();
        cube.apply_moves(&[
            Move::new(Face::Right, Direction::Clockwise),
            Move::new(Face::Up, Direction::Clockwise),
            Move::new(Face::Front, Direction::CounterClockwise),
        ]);

        let stickers = cube.to_stickers();
        let rebuilt = CubeState::from_stickers(3, &stickers).unwrap();
        assert_eq!(rebuilt, cube);
        assert_eq!(rebuilt.canonical_snapshot(), cube.canonical_snapshot());
    }

    #[test]
    fn solved_sticker_string_layout() {
        let cube = CubeState::solved(2).unwrap();
        // URFDLB face order, four stickers per face
        assert_eq!(cube.to_stickers(), "WWWWBBBBRRRRYYYYGGGGOOOO");
    }

    #[test]
    fn malformed_sticker_strings_are_rejected() {
        let err = CubeState::from_stickers(3, "WWWWWW").unwrap_err();
        assert_eq!(
            err,
            CubeError::BadStickerCount {
                n: 3,
                expected: 54,
                got: 6
            }
        );

        let err = CubeState::from_stickers(2, &"WX".repeat(12)).unwrap_err();
        assert_eq!(err, CubeError::UnknownColor(UnknownColor('X')));
    }

    #[test]
    fn snapshot_distinguishes_states() {
        let solved = CubeState::solved(3).unwrap();
        let mut turned = solved.clone();
        turned.apply_move(Move::new(Face::Down, Direction::CounterClockwise));
        assert_ne!(solved.canonical_snapshot(), turned.canonical_snapshot());
    }

    #[test]
    fn display_unfolds_the_cube() {
        let cube = CubeState::solved(2).unwrap();
        let net = cube.to_string();
        assert_eq!(net, "   WW\n   WW\nGG RR BB OO\nGG RR BB OO\n   YY\n   YY\n");
    }
}
