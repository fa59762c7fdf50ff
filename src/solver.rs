//! Depth-first backtracking search for a one-peg finish.
//!
//! The search takes the first winning line it finds. It makes no attempt to
//! find all solutions or a shortest one; every solution from a full board
//! has the same length anyway.
use crate::engine::Board;
use tracing::{debug, instrument, trace};

/// Result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A board with exactly one peg left. Its history is the full solution.
    Solved(Board),
    /// No sequence of jumps from the starting board leaves a single peg.
    NoSolution,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    /// The winning board, if any.
    pub fn board(&self) -> Option<&Board> {
        match self {
            SolveOutcome::Solved(board) => Some(board),
            SolveOutcome::NoSolution => None,
        }
    }

    pub fn into_board(self) -> Option<Board> {
        match self {
            SolveOutcome::Solved(board) => Some(board),
            SolveOutcome::NoSolution => None,
        }
    }
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards visited, the starting board included.
    pub nodes_explored: u64,
    /// Visited boards that were neither won nor had any legal move.
    pub dead_ends: u64,
}

/// Finds a sequence of jumps that leaves exactly one peg on `initial`.
///
/// Moves are tried in `Board::legal_moves` order, so the same board always
/// yields the same solution.
///
/// # Examples
/// ```
/// use peg_solver::engine::Board;
/// use peg_solver::solver::{solve, SolveOutcome};
///
/// let outcome = solve(Board::new(5).unwrap());
/// let board = outcome.board().unwrap();
/// assert!(board.is_win());
/// assert_eq!(board.history().len(), 13);
///
/// assert_eq!(solve(Board::new(4).unwrap()), SolveOutcome::NoSolution);
/// ```
pub fn solve(initial: Board) -> SolveOutcome {
    solve_with_stats(initial).0
}

/// Same as [`solve`], also reporting how much of the tree was visited.
#[instrument(skip_all, fields(depth = initial.depth(), pegs = initial.remaining_peg_count()))]
pub fn solve_with_stats(initial: Board) -> (SolveOutcome, SearchStats) {
    debug!("starting search");
    let mut stats = SearchStats::default();
    let outcome = search(initial, &mut stats);
    debug!(
        solved = outcome.is_solved(),
        nodes_explored = stats.nodes_explored,
        dead_ends = stats.dead_ends,
        "search finished"
    );
    (outcome, stats)
}

// Each call owns its board and every child is a fresh copy, so returning
// from a failed branch is all the backtracking there is. Recursion depth is
// bounded by the starting peg count.
fn search(board: Board, stats: &mut SearchStats) -> SolveOutcome {
    stats.nodes_explored += 1;

    if board.is_win() {
        return SolveOutcome::Solved(board);
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        stats.dead_ends += 1;
        trace!(pegs = board.remaining_peg_count(), "dead end");
        return SolveOutcome::NoSolution;
    }

    for jump in moves {
        if let SolveOutcome::Solved(won) = search(board.apply(jump), stats) {
            return SolveOutcome::Solved(won);
        }
    }

    SolveOutcome::NoSolution
}
