//! Error type shared by the board, the parser and the binaries.

use crate::engine::Coord;
use thiserror::Error;

/// Everything that can go wrong when building or manipulating a [`Board`](crate::engine::Board).
///
/// Note that an unsolvable board is not an error: the solver reports it as
/// [`SolveOutcome::NoSolution`](crate::solver::SolveOutcome::NoSolution).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PegError {
    /// A board needs at least one row.
    #[error("Invalid depth {0}: a board needs at least one row")]
    InvalidDepth(usize),

    /// The move is not one of the legal jumps of the board it was applied to.
    #[error("Illegal move from {from} to {to}")]
    IllegalMove { from: Coord, to: Coord },

    /// Row `row` of a textual board does not hold `row + 1` positions.
    #[error("Row {row} has {found} positions (expected {expected})")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A textual board contains something other than `*` or `o`.
    #[error("Unrecognized character '{glyph}' in row {row} col {col}")]
    UnrecognizedGlyph { glyph: char, row: usize, col: usize },
}
