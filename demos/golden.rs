//! Example: a few small boards, solved by the column sweep and checked
//! against exhaustive search.
//!
//! Run with:
//! `cargo run --example golden`

use domino_dp::reference::brute_force_optimum;
use domino_dp::{Grid, SolverBuilder};

fn main() {
    let boards = [
        "2 2\n1 2\n3 4\n",
        "3 3\n1 1 1\n1 1 1\n1 1 1\n",
        "4 2\n4 -10 -10 4\n4 -10 -10 4\n",
        "5 3\n3 -1 4 1 -5\n9 2 -6 5 3\n-5 8 9 -7 9\n",
    ];

    for text in boards {
        let grid: Grid = text.parse().expect("board literal is well formed");
        let engine = SolverBuilder::new(grid.clone()).build();
        let (optimum, frontiers) = engine.run_with_frontiers();
        let reached = frontiers
            .last()
            .map(|f| f.best.iter().filter(|&&v| v > 0).count())
            .unwrap_or(0);

        println!("{grid}");
        println!("  optimum: {optimum}");
        println!("  exhaustive: {}", brute_force_optimum(&grid));
        println!("  positive masks in last column: {reached}");
        println!();
    }
}
