//! Comparison harness: builds a row-major `1..=rows*cols` matrix and runs
//! every search strategy over the same targets.

use anyhow::{Result, ensure};
use clap::{Parser, ValueEnum};
use sortmat::prelude::*;

#[derive(Parser, Debug)]
#[command(about = "Compares search strategies on a sorted matrix", long_about = None)]
struct Cli {
    /// Number of rows.
    #[arg(short, long, default_value_t = 10)]
    rows: usize,

    /// Number of columns.
    #[arg(short, long, default_value_t = 10)]
    cols: usize,

    /// Storage layout of the matrix.
    #[arg(short, long, value_enum, default_value_t = Backing::Flat)]
    backing: Backing,

    /// Values to search for.
    #[arg(default_values_t = vec![57, 271], allow_negative_numbers = true)]
    targets: Vec<Value>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Backing {
    /// A single row-major buffer.
    Flat,
    /// One vector per row.
    Nested,
}

fn init_env_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

fn heading(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Linear => "Linear time search algorithm",
        Strategy::BinarySearch => "Binary Search algorithm",
        Strategy::Quadrant => "Experimental search algorithm",
    }
}

fn run<G: Grid + std::fmt::Display>(grid: &G, targets: &[Value]) {
    println!("Matrix:");
    println!("{grid}");

    for strategy in Strategy::ALL {
        println!();
        println!("{}", heading(strategy));
        for &target in targets {
            match strategy.search(grid, target) {
                Ok(SearchResult::Found { row, col }) => {
                    println!("- Found {target} at ({row}, {col})")
                }
                Ok(SearchResult::NotFound) => println!("- {target} not found"),
                Err(err) => log::error!("{strategy} search for {target}: {err}"),
            }
        }
    }
}

fn main() -> Result<()> {
    init_env_logger();
    let cli = Cli::parse();

    let cells = cli.rows.checked_mul(cli.cols);
    ensure!(
        cells.is_some_and(|n| Value::try_from(n).is_ok()),
        "A {}x{} matrix is too large",
        cli.rows,
        cli.cols
    );

    let cols = cli.cols;
    let matrix = Matrix::from_fn(cli.rows, cli.cols, |i, j| (i * cols + j + 1) as Value);
    log::info!(
        "Built a {}x{} {:?} matrix",
        cli.rows,
        cli.cols,
        cli.backing
    );

    match cli.backing {
        Backing::Flat => run(&matrix, &cli.targets),
        Backing::Nested => run(&NestedMatrix::from(matrix), &cli.targets),
    }

    Ok(())
}
