//! The square sticker grid making up one face of a cube.

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

/// One of the six sticker labels a facelet can carry.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unrecognized sticker color {0:?}")]
pub struct UnknownColor(pub char);

impl Color {
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

impl TryFrom<char> for Color {
    type Error = UnknownColor;

    fn try_from(letter: char) -> Result<Color, UnknownColor> {
        match letter {
            'W' => Ok(Color::White),
            'Y' => Ok(Color::Yellow),
            'G' => Ok(Color::Green),
            'B' => Ok(Color::Blue),
            'R' => Ok(Color::Red),
            'O' => Ok(Color::Orange),
            _ => Err(UnknownColor(letter)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the four border strips of a face grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Border {
    Top,
    Bottom,
    Left,
    Right,
}

/// The n×n stickers of one face, row major, with `(0, 0)` the top left
/// sticker as viewed facing the face directly.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FaceGrid {
    n: usize,
    cells: Vec<Color>,
}

impl FaceGrid {
    /// A face whose every sticker is `color`.
    #[must_use]
    pub fn solid(n: usize, color: Color) -> FaceGrid {
        FaceGrid {
            n,
            cells: vec![color; n * n],
        }
    }

    pub(crate) fn from_cells(n: usize, cells: Vec<Color>) -> FaceGrid {
        debug_assert_eq!(cells.len(), n * n);
        FaceGrid { n, cells }
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[row * self.n + col]
    }

    pub(crate) fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Whether every sticker on this face holds the same color.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.cells.iter().all_equal()
    }

    /// Rotates the face 90° clockwise in place: the cell at `(r, c)` ends up
    /// holding what was at `(n - 1 - c, r)`. A pure permutation of the cells.
    pub fn rotate_cw(&mut self) {
        let n = self.n;
        self.cells = (0..n)
            .cartesian_product(0..n)
            .map(|(r, c)| self.get(n - 1 - c, r))
            .collect();
    }

    /// Rotates the face 90° counter-clockwise in place, the exact inverse of
    /// [`FaceGrid::rotate_cw`].
    pub fn rotate_ccw(&mut self) {
        let n = self.n;
        self.cells = (0..n)
            .cartesian_product(0..n)
            .map(|(r, c)| self.get(c, n - 1 - r))
            .collect();
    }

    /// Reads one border strip top-to-bottom or left-to-right, flipped end to
    /// end when `flipped` is set.
    pub(crate) fn strip(&self, border: Border, flipped: bool) -> Vec<Color> {
        let n = self.n;
        let mut strip: Vec<Color> = match border {
            Border::Top => self.cells[..n].to_vec(),
            Border::Bottom => self.cells[n * (n - 1)..].to_vec(),
            Border::Left => (0..n).map(|r| self.get(r, 0)).collect(),
            Border::Right => (0..n).map(|r| self.get(r, n - 1)).collect(),
        };
        if flipped {
            strip.reverse();
        }
        strip
    }

    /// Writes one border strip, the mirror of [`FaceGrid::strip`].
    pub(crate) fn set_strip(&mut self, border: Border, flipped: bool, mut strip: Vec<Color>) {
        let n = self.n;
        debug_assert_eq!(strip.len(), n);
        if flipped {
            strip.reverse();
        }
        match border {
            Border::Top => self.cells[..n].copy_from_slice(&strip),
            Border::Bottom => self.cells[n * (n - 1)..].copy_from_slice(&strip),
            Border::Left => {
                for (r, color) in strip.into_iter().enumerate() {
                    self.cells[r * n] = color;
                }
            }
            Border::Right => {
                for (r, color) in strip.into_iter().enumerate() {
                    self.cells[r * n + n - 1] = color;
                }
            }
        }
    }
}
