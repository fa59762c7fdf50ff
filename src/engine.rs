//! Core game engine for triangular peg solitaire.
//!
//! This module defines the game's fundamental components:
//! - `Coord`: A `(row, col)` position on the left-aligned triangular lattice.
//! - `Move`: A jump from one position to another, two lattice steps away.
//! - `Board`: Peg occupancy for a board of a given depth, together with the
//!   history of moves that produced it. Boards are never mutated once built;
//!   applying a move returns a fresh `Board`.
use crate::error::PegError;
use std::fmt;

/// Destination offsets `(d_row, d_col)` of the six jump directions, in the
/// order `Board::legal_moves` tries them.
///
/// Rows are stored left-aligned, so there is no `(-2, +2)` entry.
pub const JUMP_OFFSETS: [(isize, isize); 6] =
    [(0, 2), (0, -2), (2, 0), (-2, 0), (2, -2), (-2, -2)];

/// Returns the `n`-th triangular number, `n * (n + 1) / 2`.
///
/// # Examples
/// ```
/// use peg_solver::engine::triangle_number;
/// assert_eq!(triangle_number(0), 0);
/// assert_eq!(triangle_number(5), 15);
/// ```
pub fn triangle_number(n: usize) -> usize {
    n * (n + 1) / 2
}

/// `triangle_number` returning `None` instead of overflowing.
fn checked_triangle_number(n: usize) -> Option<usize> {
    let next = n.checked_add(1)?;
    if n % 2 == 0 {
        (n / 2).checked_mul(next)
    } else {
        n.checked_mul(next / 2)
    }
}

/// Maps a coordinate to the 1-based peg number shown to humans.
///
/// Positions are numbered row by row, left to right:
///
/// ```text
///        1
///       2 3
///      4 5 6
///     7 8 9 10
/// ```
pub fn peg_label(coord: Coord) -> usize {
    triangle_number(coord.row) + coord.col + 1
}

/// A position on the board. Row 0 is the apex; row `r` has columns `0..=r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// The peg number of this position. See [`peg_label`].
    pub fn label(self) -> usize {
        peg_label(self)
    }

    /// Inverse of [`peg_label`]. Returns `None` for label 0, which no position carries.
    ///
    /// The result is not checked against any board depth; use
    /// [`Board::contains`] for that.
    ///
    /// # Examples
    /// ```
    /// use peg_solver::engine::Coord;
    /// assert_eq!(Coord::from_label(1), Some(Coord::new(0, 0)));
    /// assert_eq!(Coord::from_label(5), Some(Coord::new(2, 1)));
    /// assert_eq!(Coord::from_label(0), None);
    /// ```
    pub fn from_label(label: usize) -> Option<Coord> {
        let index = label.checked_sub(1)?;

        // Closed-form estimate of the row, then nudged to absorb f64 rounding.
        let estimate = (((8.0 * index as f64 + 1.0).sqrt() - 1.0) / 2.0) as usize;
        let mut row = estimate;
        while checked_triangle_number(row).map_or(true, |start| start > index) {
            row = row.checked_sub(1)?;
        }
        while matches!(checked_triangle_number(row + 1), Some(end) if end <= index) {
            row += 1;
        }

        Some(Coord::new(row, index - checked_triangle_number(row)?))
    }

    /// Shifts by a signed offset, failing on negative results.
    fn offset(self, d_row: isize, d_col: isize) -> Option<Coord> {
        Some(Coord::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        ))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A jump from `from` to `to`, removing the peg in between.
///
/// A move on its own says nothing about legality; it is only meaningful
/// relative to the board whose `legal_moves` produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }

    /// The jumped-over position.
    ///
    /// Origin and destination of every jump differ by 0 or 2 in each
    /// coordinate, so the integer mean is exact.
    pub fn midpoint(&self) -> Coord {
        Coord::new(
            (self.from.row + self.to.row) / 2,
            (self.from.col + self.to.col) / 2,
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from.label(), self.to.label())
    }
}

/// Peg occupancy of a triangular board plus the moves that led to it.
///
/// `grid[r]` holds `r + 1` flags, `true` meaning a peg is present. The peg
/// count is cached; constructors and legal jumps keep it equal to the
/// number of `true` flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    depth: usize,
    grid: Vec<Vec<bool>>,
    remaining: usize,
    history: Vec<Move>,
}

impl Board {
    /// Creates the starting board: every position filled except the apex.
    ///
    /// `depth` is the number of rows, so a depth of 5 gives the classic
    /// 15-hole board with 14 pegs.
    ///
    /// # Errors
    /// Returns `PegError::InvalidDepth` if `depth` is 0.
    ///
    /// # Examples
    /// ```
    /// use peg_solver::engine::Board;
    /// let board = Board::new(5).unwrap();
    /// assert_eq!(board.remaining_peg_count(), 14);
    /// assert_eq!(board.to_string(), "o\n**\n***\n****\n*****");
    /// ```
    pub fn new(depth: usize) -> Result<Self, PegError> {
        if depth == 0 {
            return Err(PegError::InvalidDepth(depth));
        }

        let mut grid: Vec<Vec<bool>> = (0..depth).map(|row| vec![true; row + 1]).collect();
        grid[0][0] = false;

        Ok(Board {
            depth,
            grid,
            remaining: triangle_number(depth) - 1,
            history: Vec::new(),
        })
    }

    /// Builds a board from an explicit occupancy grid with an empty history.
    ///
    /// Row `r` of `grid` must hold exactly `r + 1` flags.
    ///
    /// # Errors
    /// `PegError::InvalidDepth` for an empty grid, `PegError::RowLength` for a
    /// row of the wrong size.
    pub fn from_grid(grid: Vec<Vec<bool>>) -> Result<Self, PegError> {
        if grid.is_empty() {
            return Err(PegError::InvalidDepth(0));
        }
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != row + 1 {
                return Err(PegError::RowLength {
                    row,
                    expected: row + 1,
                    found: cells.len(),
                });
            }
        }

        let remaining = grid.iter().flatten().filter(|&&peg| peg).count();
        Ok(Board {
            depth: grid.len(),
            grid,
            remaining,
            history: Vec::new(),
        })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn remaining_peg_count(&self) -> usize {
        self.remaining
    }

    /// Moves applied since the root board, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The occupancy grid, one slice per row.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.grid.iter().map(Vec::as_slice)
    }

    /// Whether `coord` lies inside the triangle.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.depth && coord.col <= coord.row
    }

    /// Occupancy at `coord`, or `None` if it lies outside the board.
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.grid.get(coord.row)?.get(coord.col).copied()
    }

    /// `true` iff `coord` is on the board and holds a peg.
    pub fn is_filled(&self, coord: Coord) -> bool {
        self.get(coord) == Some(true)
    }

    /// `true` iff exactly one peg remains.
    pub fn is_win(&self) -> bool {
        self.remaining == 1
    }

    /// Every legal jump on this board.
    ///
    /// Origins are visited row-major; for each origin the directions are
    /// tried in [`JUMP_OFFSETS`] order. The order is what makes the solver's
    /// choice of solution reproducible.
    ///
    /// # Examples
    /// ```
    /// use peg_solver::engine::{Board, Coord, Move};
    /// let board = Board::new(5).unwrap();
    /// assert_eq!(
    ///     board.legal_moves(),
    ///     vec![
    ///         Move::new(Coord::new(2, 0), Coord::new(0, 0)),
    ///         Move::new(Coord::new(2, 2), Coord::new(0, 0)),
    ///     ]
    /// );
    /// ```
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..self.depth {
            for col in 0..=row {
                moves.extend(self.moves_from(Coord::new(row, col)));
            }
        }
        moves
    }

    /// Legal jumps starting at `origin`. Empty when `origin` holds no peg or
    /// lies outside the board.
    pub fn moves_from(&self, origin: Coord) -> Vec<Move> {
        if !self.is_filled(origin) {
            return Vec::new();
        }

        JUMP_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| origin.offset(d_row, d_col))
            .filter(|&to| self.get(to) == Some(false))
            .map(|to| Move::new(origin, to))
            .filter(|jump| self.is_filled(jump.midpoint()))
            .collect()
    }

    fn is_legal(&self, jump: Move) -> bool {
        JUMP_OFFSETS
            .iter()
            .any(|&(d_row, d_col)| jump.from.offset(d_row, d_col) == Some(jump.to))
            && self.is_filled(jump.from)
            && self.is_filled(jump.midpoint())
            && self.get(jump.to) == Some(false)
    }

    /// Returns the board that results from `jump`, leaving `self` untouched.
    ///
    /// `jump` is expected to come from `self.legal_moves()` and is not
    /// re-validated: any other move is applied as given, which leaves the
    /// peg count meaningless unless origin and midpoint hold pegs and the
    /// destination is empty. Use [`Board::try_apply`] for moves from
    /// untrusted sources.
    ///
    /// # Panics
    /// Panics if either end of `jump` lies outside the board.
    pub fn apply(&self, jump: Move) -> Board {
        let mut next = self.clone();
        next.set(jump.from, false);
        next.set(jump.midpoint(), false);
        next.set(jump.to, true);
        next.remaining = next.remaining.saturating_sub(1);
        next.history.push(jump);
        next
    }

    /// Like [`Board::apply`], but checks the move first.
    ///
    /// # Errors
    /// Returns `PegError::IllegalMove` if `jump` is not among
    /// `self.moves_from(jump.from)`.
    pub fn try_apply(&self, jump: Move) -> Result<Board, PegError> {
        if !self.is_legal(jump) {
            return Err(PegError::IllegalMove {
                from: jump.from,
                to: jump.to,
            });
        }
        Ok(self.apply(jump))
    }

    fn set(&mut self, coord: Coord, peg: bool) {
        self.grid[coord.row][coord.col] = peg;
    }

    /// Renders the board as a centred triangle for terminal output.
    ///
    /// Pegs print as `*`, holes as `o`, separated by spaces. If `pos` names a
    /// position on the board, that glyph is wrapped in ANSI codes (bold on
    /// blue) so the last move stands out.
    pub fn to_string_with_highlight(&self, pos: Option<Coord>) -> String {
        let mut output = String::new();

        for (r_idx, row) in self.grid.iter().enumerate() {
            output.push_str(&" ".repeat(self.depth - 1 - r_idx));
            for (c_idx, &peg) in row.iter().enumerate() {
                if c_idx > 0 {
                    output.push(' ');
                }
                let glyph = if peg { '*' } else { 'o' };
                if pos == Some(Coord::new(r_idx, c_idx)) {
                    output.push_str(&format!("\x1b[1;44m{}\x1b[m", glyph));
                } else {
                    output.push(glyph);
                }
            }
            if r_idx < self.depth - 1 {
                output.push('\n');
            }
        }

        output
    }
}

/// `*` for a peg, `o` for a hole, one line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .grid
            .iter()
            .map(|row| row.iter().map(|&peg| if peg { '*' } else { 'o' }).collect())
            .collect();
        write!(f, "{}", rows.join("\n").trim())
    }
}
