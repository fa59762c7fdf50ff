use anyhow::Result;
use clap::Parser;
use peg_solver::engine::{triangle_number, Board, Coord, Move};
use peg_solver::solver::solve;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of rows on the triangular board
    #[clap(short, long, default_value_t = 5)]
    depth: usize,
}

/// Peg numbers laid out like the board, so players know what to type.
fn label_guide(depth: usize) -> String {
    let width = Coord::new(depth - 1, depth - 1).label().to_string().len();
    let mut rows = Vec::with_capacity(depth);
    for row in 0..depth {
        let labels: Vec<String> = (0..=row)
            .map(|col| format!("{:>width$}", Coord::new(row, col).label()))
            .collect();
        let indent = " ".repeat((depth - 1 - row) * (width + 1) / 2);
        rows.push(format!("{indent}{}", labels.join(" ")));
    }
    rows.join("\n")
}

fn parse_move(board: &Board, input: &str) -> Option<Move> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != 2 {
        return None;
    }
    let highest = triangle_number(board.depth());
    let label = |text: &str| -> Option<Coord> {
        let number: usize = text.parse().ok()?;
        if number > highest {
            return None;
        }
        Coord::from_label(number)
    };
    Some(Move::new(label(parts[0])?, label(parts[1])?))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    // Every board played so far; undo just drops the last one.
    let mut boards = vec![Board::new(args.depth)?];

    println!("Welcome to Peg Solitaire!");
    println!("Pegs are numbered like this:\n{}", label_guide(args.depth));

    loop {
        let board = match boards.last() {
            Some(board) => board.clone(),
            None => break,
        };

        println!("---------------------");
        println!("Moves: {}, Pegs left: {}", board.history().len(), board.remaining_peg_count());
        let last_landing = board.history().last().map(|jump| jump.to);
        println!("{}", board.to_string_with_highlight(last_landing));

        if board.is_win() {
            println!();
            println!("---------------------");
            println!("🎉 YOU WIN! One peg left. 🎉");
            println!("Total moves: {}", board.history().len());
            println!("---------------------");
            break;
        }
        if board.legal_moves().is_empty() {
            println!();
            println!("No moves left with {} pegs on the board.", board.remaining_peg_count());
            println!("Enter 'u' to undo or 'q' to quit.");
        }

        print!("Enter your move (from to), 'h' for a hint, 'u' to undo, 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => {
                if boards.len() > 1 {
                    boards.pop();
                    println!("Move undone.");
                } else {
                    println!("Cannot undo further (already at the initial board).");
                }
            }
            "h" => {
                let played = board.history().len();
                match solve(board.clone())
                    .into_board()
                    .and_then(|won| won.history().get(played).copied())
                {
                    Some(next) => println!("Hint: {}", next),
                    None => println!("No solution from this position. Try undoing."),
                }
            }
            trimmed => match parse_move(&board, trimmed) {
                Some(jump) => match board.try_apply(jump) {
                    Ok(next) => {
                        debug!(%jump, "move applied");
                        boards.push(next);
                    }
                    Err(err) => println!("{}", err),
                },
                None => println!(
                    "Invalid input: enter two peg numbers between 1 and {} (e.g. '4 1'), 'h', 'u' or 'q'.",
                    Coord::new(args.depth - 1, args.depth - 1).label()
                ),
            },
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_reads_peg_labels() {
        let board = Board::new(5).unwrap();
        assert_eq!(
            parse_move(&board, " 4  1 "),
            Some(Move::new(Coord::new(2, 0), Coord::new(0, 0)))
        );
        assert_eq!(
            parse_move(&board, "15 13"),
            Some(Move::new(Coord::new(4, 4), Coord::new(4, 2)))
        );
    }

    #[test]
    fn test_parse_move_rejects_out_of_range_labels() {
        let board = Board::new(5).unwrap();
        assert_eq!(parse_move(&board, "16 1"), None);
        assert_eq!(parse_move(&board, "0 1"), None);
        assert_eq!(parse_move(&board, "18446744073709551615 1"), None);
        assert_eq!(parse_move(&board, "1 99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_move_rejects_malformed_input() {
        let board = Board::new(5).unwrap();
        assert_eq!(parse_move(&board, "4"), None);
        assert_eq!(parse_move(&board, "4 1 2"), None);
        assert_eq!(parse_move(&board, "a b"), None);
    }

    #[test]
    fn test_label_guide() {
        assert_eq!(label_guide(3), "  1\n 2 3\n4 5 6");
    }
}
