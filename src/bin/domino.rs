use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use domino_dp::reference::brute_force_optimum;
use domino_dp::{Grid, SolverBuilder};

#[derive(Parser, Debug)]
#[command(
    name = "domino",
    version,
    about = "Maximum total weight of non-overlapping dominoes on an integer grid"
)]
struct Cli {
    /// Grid file: column count, row count, then the cells row by row (default: stdin)
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Do not clamp negative horizontal gains to zero
    #[arg(long)]
    no_clamp: bool,
    /// Cross-check the optimum against exhaustive search on small grids
    #[arg(long)]
    verify: bool,
    /// Largest cell count that --verify will search exhaustively
    #[arg(long, value_name = "N", default_value_t = 20)]
    verify_limit: usize,
    /// Also print the last column of the DP table as `mask value` lines
    #[arg(long)]
    table: bool,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read grid from {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read grid from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let text = read_input(cli.input.as_ref())?;
    let grid = Grid::parse(&text).context("malformed grid")?;

    let engine = SolverBuilder::new(grid.clone())
        .with_gain_clamp(!cli.no_clamp)
        .build();

    let optimum = if cli.table {
        let (optimum, frontiers) = engine.run_with_frontiers();
        if let Some(last) = frontiers.last().filter(|_| grid.cols() > 0) {
            let width = grid.rows().max(1);
            for (mask, value) in last.best.iter().enumerate() {
                eprintln!("{mask:0width$b} {value}");
            }
        }
        optimum
    } else {
        engine.run()
    };

    if cli.verify {
        let cells = grid.cells().len();
        if cells <= cli.verify_limit {
            let expected = brute_force_optimum(&grid);
            if expected != optimum {
                anyhow::bail!("verification failed: sweep gave {optimum}, exhaustive search {expected}");
            }
            eprintln!("verified against exhaustive search ({cells} cells)");
        } else {
            eprintln!(
                "not verified: {cells} cells exceeds --verify-limit {}",
                cli.verify_limit
            );
        }
    }

    println!("{optimum}");
    Ok(())
}
