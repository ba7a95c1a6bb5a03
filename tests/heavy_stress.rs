#![cfg(feature = "heavy")]
use domino_dp::reference::row_optimum;
use domino_dp::{max_tiling_weight, Grid};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, lo: i64, hi: i64) -> Grid {
    let cells = (0..rows * cols).map(|_| rng.gen_range(lo..hi)).collect();
    Grid::new(rows, cols, cells).unwrap()
}

#[test]
fn heavy_even_positive_board_covers_everything() {
    let mut rng = StdRng::seed_from_u64(123);
    let grid = random_grid(&mut rng, 10, 400, 0, 1_000);
    let total: i64 = grid.cells().iter().sum();
    assert_eq!(max_tiling_weight(&grid), total);
}

#[test]
fn heavy_mixed_board_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let grid = random_grid(&mut rng, 12, 200, -500, 500);
    let best = max_tiling_weight(&grid);
    assert!(best >= 0);
    assert!(best <= grid.positive_total());
}

#[test]
fn heavy_long_single_row() {
    let mut rng = StdRng::seed_from_u64(42);
    let grid = random_grid(&mut rng, 1, 200_000, -100, 100);
    assert_eq!(max_tiling_weight(&grid), row_optimum(grid.cells()));
}
