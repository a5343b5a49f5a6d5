//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const N: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// Content of a single board cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Nobody has played here yet.
    #[default]
    #[display("_")]
    Empty,
    /// Player using X.
    #[display("X")]
    X,
    /// Player using O.
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the opposing marker, or `None` for [`Marker::Empty`].
    pub fn complement(self) -> Option<Self> {
        match self {
            Marker::X => Some(Marker::O),
            Marker::O => Some(Marker::X),
            Marker::Empty => None,
        }
    }

    /// True for X and O.
    pub fn is_filled(self) -> bool {
        self != Marker::Empty
    }
}

/// Returned when a marker choice is anything but `X` or `O`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid marker choice {:?}, expected X or O", input)]
pub struct ParseMarkerError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Marker {
    type Err = ParseMarkerError;

    /// Accepts exactly `X` or `O`. Lowercase is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Marker::X),
            "O" => Ok(Marker::O),
            other => Err(ParseMarkerError {
                input: other.to_string(),
            }),
        }
    }
}

/// A (row, column) coordinate on the board, both in `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[display("({row}, {col})")]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// Creates a cell, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < N && col < N).then_some(Self { row, col })
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps a linear, row-major index to a cell.
    ///
    /// Signed so that negative input coming straight from a prompt is
    /// rejected here rather than wrapping.
    #[instrument]
    pub fn from_index(index: i64) -> Option<Self> {
        let index = usize::try_from(index).ok()?;
        (index < CELLS).then(|| Self::at(index / N, index % N))
    }

    /// Linear, row-major index of this cell.
    pub fn index(self) -> usize {
        self.row * N + self.col
    }

    /// Row coordinate.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column coordinate.
    pub fn col(self) -> usize {
        self.col
    }
}

/// Fixed 3x3 grid of markers, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Marker; N]; N],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker at the given cell.
    pub fn get(&self, cell: Cell) -> Marker {
        self.grid[cell.row][cell.col]
    }

    /// Whether the cell can still be marked.
    pub fn is_free(&self, cell: Cell) -> bool {
        !self.get(cell).is_filled()
    }

    /// Writes a marker into a free cell.
    ///
    /// Callers must check [`Board::is_free`] first; cells never go back to
    /// empty once filled.
    pub(crate) fn fill(&mut self, cell: Cell, marker: Marker) {
        debug_assert!(self.is_free(cell), "cell {cell} already filled");
        debug_assert!(marker.is_filled(), "cannot fill with Empty");
        self.grid[cell.row][cell.col] = marker;
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Marker; N]; N] {
        &self.grid
    }

    /// All cells holding `marker`, in row-major order.
    pub fn cells_of(&self, marker: Marker) -> Vec<Cell> {
        self.cells()
            .filter(|(_, m)| *m == marker)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells().filter(|(_, m)| m.is_filled()).count()
    }

    fn cells(&self) -> impl Iterator<Item = (Cell, Marker)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, marker)| (Cell::at(row, col), *marker))
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "-------------")?;
        for line in &self.grid {
            write!(f, "|")?;
            for marker in line {
                write!(f, " {marker} |")?;
            }
            writeln!(f)?;
            writeln!(f, "-------------")?;
        }
        Ok(())
    }
}

/// Which of the two session players is meant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Seat {
    /// Player 1, always moves first.
    First,
    /// Player 2.
    Second,
}

impl Seat {
    /// The other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}
