use crate::engine::{Board, Move};
use crate::error::PegError;

/// Formats a move history with peg labels, e.g. `"6 -> 1, 4 -> 6"`.
///
/// Returns an empty string for an empty history.
///
/// # Examples
/// ```
/// use peg_solver::engine::{Coord, Move};
/// use peg_solver::utils::pretty_solution;
///
/// let moves = [
///     Move::new(Coord::new(2, 2), Coord::new(0, 0)),
///     Move::new(Coord::new(2, 0), Coord::new(2, 2)),
/// ];
/// assert_eq!(pretty_solution(&moves), "6 -> 1, 4 -> 6");
/// ```
pub fn pretty_solution(history: &[Move]) -> String {
    history
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row, starting from the apex. Row `r` must hold
/// exactly `r + 1` positions, so the depth of the board is `s.len()`.
///
/// Valid characters for positions are:
/// - '*': a peg
/// - 'o': a hole
///
/// Whitespace is skipped, which lets the centred layout of
/// `Board::to_string_with_highlight` be parsed as well. The returned board
/// has an empty history and a peg count equal to the number of `*`.
///
/// # Errors
/// * `PegError::InvalidDepth` if `s` is empty.
/// * `PegError::RowLength` if a row has the wrong number of positions.
/// * `PegError::UnrecognizedGlyph` for any character other than `*`, `o` or whitespace.
///
/// # Examples
/// ```
/// use peg_solver::engine::Coord;
/// use peg_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["o", "*o", "**o"]).unwrap();
/// assert_eq!(board.depth(), 3);
/// assert_eq!(board.remaining_peg_count(), 3);
/// assert!(board.is_filled(Coord::new(2, 1)));
///
/// assert!(board_from_str_array(&["o", "*x"]).is_err());
/// assert!(board_from_str_array(&["o", "***"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, PegError> {
    if s.is_empty() {
        return Err(PegError::InvalidDepth(0));
    }

    let mut grid = Vec::with_capacity(s.len());

    for (r, row_str) in s.iter().enumerate() {
        let mut row = Vec::with_capacity(r + 1);
        for glyph in row_str.chars().filter(|c| !c.is_whitespace()) {
            let peg = match glyph {
                '*' => true,
                'o' => false,
                _ => {
                    return Err(PegError::UnrecognizedGlyph {
                        glyph,
                        row: r,
                        col: row.len(),
                    })
                }
            };
            row.push(peg);
        }

        if row.len() != r + 1 {
            return Err(PegError::RowLength {
                row: r,
                expected: r + 1,
                found: row.len(),
            });
        }
        grid.push(row);
    }

    Board::from_grid(grid)
}
