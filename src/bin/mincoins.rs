use std::process::ExitCode;

use clap::Parser;
use mincoins::{BreadthFirstChange, ChangeOutcome, ChangeSolver, SolverConfig};
use tracing_subscriber::EnvFilter;

/// Australian coin denominations, in cents.
const DEFAULT_COINS: [usize; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

#[derive(Parser, Debug)]
#[command(name = "mincoins")]
#[command(about = "Find the fewest coins that sum exactly to a target", long_about = None)]
struct Cli {
    /// Sum to make, a positive integer
    target: usize,

    /// Comma-separated denominations
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_COINS)]
    coins: Vec<usize>,

    /// Search from zero instead of leaping ahead with the largest coin
    #[arg(long)]
    no_leap: bool,

    /// Print the number of comparisons the solve took
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut cli = Cli::parse();
    let solver = BreadthFirstChange::new(SolverConfig::default().with_leap_forward(!cli.no_leap));

    let report = match solver.make_change(&mut cli.coins, cli.target) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if cli.stats {
        println!("\nSolution took {} compares", report.stats.compares);
    }

    match report.outcome {
        ChangeOutcome::Solved(change) => {
            println!(
                "\n{} coins needed to make the target of {}\n",
                change.coin_count(),
                cli.target
            );
            println!("{}", change);
        }
        ChangeOutcome::Unsatisfiable { target } => {
            println!("\nNo possible set of coins makes the target of {}", target);
        }
    }

    ExitCode::SUCCESS
}
