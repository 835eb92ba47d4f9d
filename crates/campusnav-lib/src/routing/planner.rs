//! Path search strategies implementing the Strategy pattern.
//!
//! Each planner turns a start/goal pair and a set of distance limits into a
//! candidate set of feasible paths. Reducing the candidates to a single
//! route is left to [`super::select_shortest`], so adding a strategy never
//! touches the orchestration in [`super::plan_route`].

use crate::graph::CampusGraph;
use crate::path::{all_paths, pruned_paths, DistanceLimits, Path};

use super::SearchAlgorithm;

/// Trait for path search strategies.
pub trait PathPlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> SearchAlgorithm;

    /// Produce feasible simple paths from `start` to `goal`.
    ///
    /// Whenever any feasible path exists, the result must contain one with
    /// the minimal total distance.
    fn candidates(
        &self,
        graph: &dyn CampusGraph,
        start: &str,
        goal: &str,
        limits: DistanceLimits,
    ) -> Vec<Path>;
}

/// Exhaustive enumeration of every simple path.
///
/// Serves as the reference the pruned search is checked against.
#[derive(Debug, Clone, Default)]
pub struct BruteForcePlanner;

impl PathPlanner for BruteForcePlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::BruteForce
    }

    fn candidates(
        &self,
        graph: &dyn CampusGraph,
        start: &str,
        goal: &str,
        limits: DistanceLimits,
    ) -> Vec<Path> {
        all_paths(graph, start, goal, limits)
    }
}

/// Branch-and-bound depth-first search.
#[derive(Debug, Clone, Default)]
pub struct PrunedPlanner;

impl PathPlanner for PrunedPlanner {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::Pruned
    }

    fn candidates(
        &self,
        graph: &dyn CampusGraph,
        start: &str,
        goal: &str,
        limits: DistanceLimits,
    ) -> Vec<Path> {
        pruned_paths(graph, start, goal, limits)
    }
}

/// Select the planner for an algorithm.
pub fn select_planner(algorithm: SearchAlgorithm) -> Box<dyn PathPlanner> {
    match algorithm {
        SearchAlgorithm::BruteForce => Box::new(BruteForcePlanner),
        SearchAlgorithm::Pruned => Box::new(PrunedPlanner),
    }
}
