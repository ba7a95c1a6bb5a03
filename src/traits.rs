//! Core trait definitions for layered dynamic programs.
//!
//! To run a recurrence on [`LayerEngine`](crate::engine::LayerEngine),
//! implement [`LayeredProblem`] for a struct that owns the instance data
//! (grid, precomputed tables, options).
//!
//! The interface is deliberately small:
//! - Layered structure: layers 0..T, each transition consuming one layer.
//! - Frontiers: all DP values that later layers can depend on.
//! - Extraction: reading the optimum off the final frontier.

/// Trait for a layered dynamic program instance.
///
/// Semantics:
/// - There are `T = num_layers()` steps.
/// - `init_frontier()` is the frontier before any layer is consumed.
/// - `forward_step(i, frontier)` consumes layer `i`, producing the frontier
///   after it.
/// - After T steps, `extract_cost` reads the objective from the last frontier.
pub trait LayeredProblem {
    /// Representation of the DP values after a layer (e.g. one table column).
    type Frontier: Clone;

    /// Objective type.
    type Cost: Copy + Ord;

    /// Number of layers `T`.
    fn num_layers(&self) -> usize;

    /// Frontier before layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Consume `layer`, mapping the frontier before it to the one after it.
    ///
    /// Must only depend on `frontier` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier;

    /// Extract the objective value from the frontier after the last layer.
    ///
    /// For `T = 0` this receives `init_frontier()`.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;
}
