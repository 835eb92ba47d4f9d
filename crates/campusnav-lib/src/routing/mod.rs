//! Route planning across the campus map.
//!
//! This module provides:
//! - [`SearchAlgorithm`] - Supported search strategies (brute force, pruned)
//! - [`RouteRequest`] - Start, goal, strategy and distance limits
//! - [`RoutePlan`] - Planned route result with its distances
//! - [`plan_route`] - Main entry point for computing routes
//! - [`find_shortest_path_brute_force`] / [`find_shortest_path_optimized`] -
//!   convenience wrappers returning only the path
//!
//! # Strategy Pattern
//!
//! Each strategy is a [`PathPlanner`] producing a candidate set of feasible
//! paths; [`select_shortest`] reduces any candidate set to the shortest
//! feasible path. Both strategies therefore agree on the optimal total
//! distance, though they may pick different paths on ties.
//!
//! # Example
//!
//! ```ignore
//! use campusnav_lib::{load_campus_map, plan_route, RouteRequest};
//!
//! let map = load_campus_map("docs/fixtures/campus_map.txt".as_ref())?;
//! let request = RouteRequest::unbounded("32", "56").with_max_outdoor(0);
//! let plan = plan_route(&map, &request)?;
//! println!("Route: {} hops, {} total", plan.hop_count(), plan.total_distance);
//! ```

mod planner;

pub use planner::{select_planner, BruteForcePlanner, PathPlanner, PrunedPlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{BuildingId, CampusGraph};
use crate::path::{path_cost, DistanceLimits, Path, PathCost};

/// Minimum similarity for a building label to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions attached to an unknown building error.
const MAX_SUGGESTIONS: usize = 3;

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// Enumerate every simple path, checking limits only on complete paths.
    BruteForce,
    /// Depth-first search with branch-and-bound pruning.
    #[default]
    Pruned,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::BruteForce => "brute-force",
            SearchAlgorithm::Pruned => "pruned",
        };
        f.write_str(value)
    }
}

impl FromStr for SearchAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "brute-force" | "brute_force" | "bruteforce" => Ok(SearchAlgorithm::BruteForce),
            "pruned" | "dfs" => Ok(SearchAlgorithm::Pruned),
            other => Err(format!("unknown search algorithm '{other}'")),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: SearchAlgorithm,
    pub limits: DistanceLimits,
}

impl RouteRequest {
    /// Pruned search between two buildings without distance limits.
    pub fn unbounded(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: SearchAlgorithm::default(),
            limits: DistanceLimits::unbounded(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_limits(mut self, limits: DistanceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_max_total(mut self, max_total: u64) -> Self {
        self.limits.max_total = max_total;
        self
    }

    pub fn with_max_outdoor(mut self, max_outdoor: u64) -> Self {
        self.limits.max_outdoor = max_outdoor;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: SearchAlgorithm,
    pub start: BuildingId,
    pub goal: BuildingId,
    pub steps: Path,
    pub total_distance: u64,
    pub outdoor_distance: u64,
    /// Size of the candidate set the selected path was drawn from.
    pub candidates: usize,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn cost(&self) -> PathCost {
        PathCost {
            total: self.total_distance,
            outdoor: self.outdoor_distance,
        }
    }
}

/// Outcome of running both strategies on the same request.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyComparison {
    pub brute_force: Option<RoutePlan>,
    pub pruned: Option<RoutePlan>,
}

impl StrategyComparison {
    /// Whether both strategies failed, or both succeeded with equal totals.
    pub fn agrees(&self) -> bool {
        match (&self.brute_force, &self.pruned) {
            (None, None) => true,
            (Some(brute), Some(pruned)) => brute.total_distance == pruned.total_distance,
            _ => false,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Resolve a building label, suggesting close matches for unknown labels.
fn resolve_building<'g>(graph: &'g dyn CampusGraph, name: &str) -> Result<&'g str> {
    graph.building(name).ok_or_else(|| Error::UnknownBuilding {
        name: name.to_string(),
        suggestions: fuzzy_building_matches(graph, name, MAX_SUGGESTIONS),
    })
}

fn fuzzy_building_matches(graph: &dyn CampusGraph, name: &str, limit: usize) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = graph
        .buildings()
        .map(|candidate| (jaro_winkler(name, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

/// Pick the candidate with the smallest total distance among those within
/// `limits`.
///
/// Every candidate's cost is recomputed from the graph. Ties keep the first
/// candidate seen. Returns `None` for an empty or entirely infeasible set.
pub fn select_shortest(
    graph: &dyn CampusGraph,
    candidates: Vec<Path>,
    limits: DistanceLimits,
) -> Option<(Path, PathCost)> {
    let mut best: Option<(Path, PathCost)> = None;
    for candidate in candidates {
        let cost = path_cost(graph, &candidate);
        if !limits.allows(cost) {
            continue;
        }
        let shorter = match &best {
            Some((_, best_cost)) => cost.total < best_cost.total,
            None => true,
        };
        if shorter {
            best = Some((candidate, cost));
        }
    }
    best
}

// =============================================================================
// Main Entry Points
// =============================================================================

/// Compute a route using the requested strategy and distance limits.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves building labels through the graph
/// 2. Selects the planner strategy
/// 3. Collects the candidate set of feasible paths
/// 4. Reduces it to the shortest feasible path, or fails with
///    [`Error::NoPathFound`]
pub fn plan_route(graph: &dyn CampusGraph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_building(graph, &request.start)?;
    let goal = resolve_building(graph, &request.goal)?;

    let planner = select_planner(request.algorithm);
    let candidates = planner.candidates(graph, start, goal, request.limits);
    let candidate_count = candidates.len();
    debug!(
        algorithm = %request.algorithm,
        start,
        goal,
        candidates = candidate_count,
        "collected candidate paths"
    );

    let (steps, cost) =
        select_shortest(graph, candidates, request.limits).ok_or_else(|| Error::NoPathFound {
            start: start.to_string(),
            goal: goal.to_string(),
        })?;

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: start.to_string(),
        goal: goal.to_string(),
        steps,
        total_distance: cost.total,
        outdoor_distance: cost.outdoor,
        candidates: candidate_count,
    })
}

/// Shortest path from `start` to `goal` by exhaustive enumeration.
pub fn find_shortest_path_brute_force(
    graph: &dyn CampusGraph,
    start: &str,
    goal: &str,
    max_total: u64,
    max_outdoor: u64,
) -> Result<Path> {
    let request = RouteRequest::unbounded(start, goal)
        .with_algorithm(SearchAlgorithm::BruteForce)
        .with_limits(DistanceLimits::new(max_total, max_outdoor));
    plan_route(graph, &request).map(|plan| plan.steps)
}

/// Shortest path from `start` to `goal` by branch-and-bound search.
///
/// Always agrees with [`find_shortest_path_brute_force`] on the total
/// distance and on whether a path exists.
pub fn find_shortest_path_optimized(
    graph: &dyn CampusGraph,
    start: &str,
    goal: &str,
    max_total: u64,
    max_outdoor: u64,
) -> Result<Path> {
    let request = RouteRequest::unbounded(start, goal)
        .with_algorithm(SearchAlgorithm::Pruned)
        .with_limits(DistanceLimits::new(max_total, max_outdoor));
    plan_route(graph, &request).map(|plan| plan.steps)
}

/// Run both strategies for `request` and report their results side by side.
///
/// [`Error::NoPathFound`] from either strategy is recorded as `None`; other
/// errors (unknown buildings) are returned.
pub fn compare_strategies(
    graph: &dyn CampusGraph,
    request: &RouteRequest,
) -> Result<StrategyComparison> {
    let run = |algorithm: SearchAlgorithm| -> Result<Option<RoutePlan>> {
        let request = request.clone().with_algorithm(algorithm);
        match plan_route(graph, &request) {
            Ok(plan) => Ok(Some(plan)),
            Err(Error::NoPathFound { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    };

    Ok(StrategyComparison {
        brute_force: run(SearchAlgorithm::BruteForce)?,
        pruned: run(SearchAlgorithm::Pruned)?,
    })
}
