use anyhow::Result;
use clap::Parser;
use peg_solver::engine::Board;
use peg_solver::solver::{solve_with_stats, SolveOutcome};
use peg_solver::utils::pretty_solution;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of rows on the triangular board (5 is the classic 15-hole board)
    depth: usize,

    /// Print the board after every move of the solution
    #[clap(short = 'b', long)]
    show_boards: bool,

    /// Print how many boards the search visited
    #[clap(short, long)]
    stats: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let board = Board::new(args.depth)?;
    info!(depth = args.depth, pegs = board.remaining_peg_count(), "solving");

    let (outcome, stats) = solve_with_stats(board.clone());

    match outcome {
        SolveOutcome::Solved(solution) => {
            println!("Solution: {}", pretty_solution(solution.history()));
            if args.show_boards {
                print_replay(&board, &solution);
            }
        }
        SolveOutcome::NoSolution => {
            println!("No solution for depth of {}.", args.depth);
        }
    }

    if args.stats {
        println!(
            "Explored {} boards ({} dead ends).",
            stats.nodes_explored, stats.dead_ends
        );
    }

    Ok(())
}

fn print_replay(initial: &Board, solution: &Board) {
    println!("\nInitial board:\n{}\n", initial.to_string_with_highlight(None));

    let mut board = initial.clone();
    for (i, &jump) in solution.history().iter().enumerate() {
        board = board.apply(jump);
        println!("Move {}: {}", i + 1, jump);
        println!("{}\n", board.to_string_with_highlight(Some(jump.to)));
    }
}
