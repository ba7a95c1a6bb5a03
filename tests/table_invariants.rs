use domino_dp::problems::domino::DominoProblem;
use domino_dp::tables::carry_masks;
use domino_dp::utils::{mask_count, set_rows};
use domino_dp::{Grid, LayerEngine};
use proptest::prelude::*;

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..=5, 1usize..=6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-9i64..15, rows * cols)
            .prop_map(move |cells| Grid::new(rows, cols, cells).unwrap())
    })
}

fn column_sum(grid: &Grid, col: usize, mask: u32) -> i64 {
    set_rows(mask).map(|row| grid.get(row, col)).sum()
}

#[test]
fn table_shape_matches_grid() {
    let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
    let engine = LayerEngine::new(DominoProblem::new(grid));
    let (cost, frontiers) = engine.run_with_frontiers();
    assert_eq!(frontiers.len(), 4);
    assert!(frontiers.iter().all(|f| f.best.len() == 8));
    assert_eq!(cost, frontiers[3].max_value());

    let problem = engine.problem();
    assert_eq!(problem.column_weights().cols(), 3);
    for col in 0..3 {
        for mask in 0..8u32 {
            assert_eq!(
                problem.column_weights().get(mask, col),
                column_sum(problem.grid(), col, mask)
            );
        }
    }
}

proptest! {
    #[test]
    fn entries_never_negative(grid in grid_strategy(), clamp in any::<bool>()) {
        let engine = LayerEngine::new(DominoProblem::with_gain_clamp(grid, clamp));
        let (cost, frontiers) = engine.run_with_frontiers();
        prop_assert!(frontiers.iter().all(|f| f.best.iter().all(|&v| v >= 0)));
        prop_assert_eq!(cost, frontiers.last().unwrap().max_value());
    }

    #[test]
    fn settled_columns_are_closed_under_vertical_placements(grid in grid_strategy()) {
        let engine = LayerEngine::new(DominoProblem::new(grid));
        let problem = engine.problem();
        let grid = problem.grid();
        let (_, frontiers) = engine.run_with_frontiers();
        for col in 0..grid.cols() {
            let settled = &frontiers[col + 1].best;
            let bases = if col == 0 { 1 } else { mask_count(grid.rows()) };
            for base in 0..bases {
                for &placed in problem.vertical_table().placements(base as u32) {
                    let combined = base | placed as usize;
                    prop_assert!(settled[combined] >= settled[base] + column_sum(grid, col, placed));
                }
            }
        }
    }

    #[test]
    fn carries_are_dominated_by_next_column(grid in grid_strategy()) {
        let engine = LayerEngine::new(DominoProblem::new(grid));
        let problem = engine.problem();
        let grid = problem.grid();
        let weights = problem.pair_weights();
        let (_, frontiers) = engine.run_with_frontiers();
        for col in 0..grid.cols().saturating_sub(1) {
            let settled = &frontiers[col + 1].best;
            let next = &frontiers[col + 2].best;
            for (base, &value) in settled.iter().enumerate() {
                for carry in carry_masks(base as u32, grid.rows()) {
                    let gain = weights.get(carry, col).max(0);
                    prop_assert!(next[carry as usize] >= value + gain);
                }
            }
        }
    }
}
