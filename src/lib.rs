//! # Peg Solver Library
//!
//! This library provides the core game logic for the triangular peg
//! solitaire puzzle (the "Cracker Barrel" board) and a Depth First Search
//! (DFS) solver that finds a sequence of jumps leaving a single peg.
//!
//! It is used by two binaries:
//! - `peg_solver`: Takes a board depth and prints a solution, or reports
//!   that none exists.
//! - `human_player`: Allows interactive play via the command line.
//!
//! ## Modules
//! - `engine`: Coordinates (`Coord`), jumps (`Move`) and the board itself
//!   (`Board`): move generation, move application, peg labels and rendering.
//! - `solver`: Provides `solve` and `solve_with_stats`.
//! - `utils`: Parsing boards from strings and formatting solutions.
//! - `error`: The `PegError` type returned by fallible operations.

pub mod engine;
pub mod error;
pub mod solver;
pub mod utils;

pub use error::PegError;
