use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::graph::{BuildingId, CampusGraph, Edge, Weight};

/// Ordered sequence of buildings joined by edges of the campus graph.
pub type Path = Vec<BuildingId>;

/// Cumulative distances along a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PathCost {
    pub total: u64,
    pub outdoor: u64,
}

impl PathCost {
    pub const ZERO: Self = Self {
        total: 0,
        outdoor: 0,
    };

    /// Cost after traversing one more edge. Sums saturate at `u64::MAX`.
    pub fn extend(self, weight: Weight) -> Self {
        Self {
            total: self.total.saturating_add(weight.total),
            outdoor: self.outdoor.saturating_add(weight.outdoor),
        }
    }
}

/// Ceilings on total and outdoor distance for a feasible path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistanceLimits {
    pub max_total: u64,
    pub max_outdoor: u64,
}

impl DistanceLimits {
    pub fn new(max_total: u64, max_outdoor: u64) -> Self {
        Self {
            max_total,
            max_outdoor,
        }
    }

    /// Limits that accept every path.
    pub fn unbounded() -> Self {
        Self::new(u64::MAX, u64::MAX)
    }

    /// Whether a path with `cost` stays within both ceilings.
    pub fn allows(&self, cost: PathCost) -> bool {
        cost.total <= self.max_total && cost.outdoor <= self.max_outdoor
    }
}

impl Default for DistanceLimits {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Sum both distance components along consecutive pairs of `path`.
///
/// Each pair is resolved to the first matching outgoing edge of its source.
/// Pairs without an edge contribute nothing; the search engines only ever
/// pass paths built from real edges.
pub fn path_cost<G, S>(graph: &G, path: &[S]) -> PathCost
where
    G: CampusGraph + ?Sized,
    S: AsRef<str>,
{
    path.windows(2).fold(PathCost::ZERO, |cost, pair| {
        let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
        match graph.neighbours(from).iter().find(|edge| edge.target == to) {
            Some(edge) => cost.extend(edge.weight),
            None => cost,
        }
    })
}

/// Enumerate every simple path from `start` to `end` whose full cost is
/// within `limits`.
///
/// Constraints are only checked once a path reaches `end`, so the traversal
/// visits every simple path and is exponential in the worst case.
pub fn all_paths<'a, G>(
    graph: &'a G,
    start: &'a str,
    end: &str,
    limits: DistanceLimits,
) -> Vec<Path>
where
    G: CampusGraph + ?Sized,
{
    let mut stack = Vec::new();
    let mut paths = Vec::new();
    enumerate(graph, start, end, limits, &mut stack, &mut paths);
    debug!(
        start,
        end,
        candidates = paths.len(),
        "exhaustive enumeration finished"
    );
    paths
}

fn enumerate<'a, G>(
    graph: &'a G,
    current: &'a str,
    end: &str,
    limits: DistanceLimits,
    stack: &mut Vec<&'a str>,
    paths: &mut Vec<Path>,
) where
    G: CampusGraph + ?Sized,
{
    stack.push(current);
    if current == end {
        if limits.allows(path_cost(graph, stack.as_slice())) {
            paths.push(to_owned_path(stack));
        }
    } else {
        for edge in distinct_edges(graph.neighbours(current)) {
            let next = edge.target.as_str();
            if !stack.contains(&next) {
                enumerate(graph, next, end, limits, stack, paths);
            }
        }
    }
    stack.pop();
}

/// Mutable context for one branch-and-bound search.
///
/// Holds the partial path being extended, the best total distance among the
/// feasible complete paths seen so far, and the collected candidates. A
/// state belongs to a single top-level search and is threaded through every
/// recursive step by `&mut`.
#[derive(Debug, Default)]
pub struct SearchState<'a> {
    path: Vec<&'a str>,
    on_path: HashSet<&'a str>,
    best_total: Option<u64>,
    candidates: Vec<Path>,
    abandoned: usize,
}

impl<'a> SearchState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest feasible total recorded so far.
    pub fn best_total(&self) -> Option<u64> {
        self.best_total
    }

    /// Number of partial paths dropped before reaching the goal.
    pub fn abandoned_branches(&self) -> usize {
        self.abandoned
    }

    pub fn candidates(&self) -> &[Path] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<Path> {
        self.candidates
    }

    fn enter(&mut self, building: &'a str) {
        self.path.push(building);
        self.on_path.insert(building);
    }

    fn leave(&mut self) {
        if let Some(building) = self.path.pop() {
            self.on_path.remove(building);
        }
    }

    fn visits(&self, building: &str) -> bool {
        self.on_path.contains(building)
    }

    /// Whether no extension of a partial path with `cost` can be feasible and
    /// strictly shorter than the best complete path.
    fn cannot_improve(&self, cost: PathCost, limits: DistanceLimits) -> bool {
        cost.outdoor > limits.max_outdoor
            || cost.total > limits.max_total
            || self.best_total.is_some_and(|best| cost.total >= best)
    }

    fn record(&mut self, cost: PathCost) {
        let improves = match self.best_total {
            Some(best) => cost.total < best,
            None => true,
        };
        if improves {
            self.best_total = Some(cost.total);
        }
        self.candidates.push(to_owned_path(&self.path));
    }
}

/// Depth-first search from `start` to `end` that abandons partial paths which
/// break a limit or can no longer beat the best complete path found.
///
/// The result may miss dominated feasible paths, but whenever a feasible path
/// exists it contains one with the minimal total distance.
pub fn pruned_paths<'a, G>(
    graph: &'a G,
    start: &'a str,
    end: &str,
    limits: DistanceLimits,
) -> Vec<Path>
where
    G: CampusGraph + ?Sized,
{
    let mut state = SearchState::new();
    descend(graph, start, end, PathCost::ZERO, limits, &mut state);
    debug!(
        start,
        end,
        candidates = state.candidates.len(),
        abandoned = state.abandoned,
        best_total = ?state.best_total,
        "pruned search finished"
    );
    state.into_candidates()
}

fn descend<'a, G>(
    graph: &'a G,
    current: &'a str,
    end: &str,
    cost: PathCost,
    limits: DistanceLimits,
    state: &mut SearchState<'a>,
) where
    G: CampusGraph + ?Sized,
{
    state.enter(current);
    if current == end {
        if limits.allows(cost) {
            state.record(cost);
        }
    } else if state.cannot_improve(cost, limits) {
        state.abandoned += 1;
    } else {
        for edge in distinct_edges(graph.neighbours(current)) {
            let next = edge.target.as_str();
            if state.visits(next) {
                continue;
            }
            descend(graph, next, end, cost.extend(edge.weight), limits, state);
        }
    }
    state.leave();
}

// Only the first edge per target is traversed so the running cost always
// agrees with `path_cost`.
fn distinct_edges<'e>(edges: &'e [Edge]) -> impl Iterator<Item = &'e Edge> + 'e {
    edges
        .iter()
        .enumerate()
        .filter(move |&(index, edge)| {
            !edges[..index]
                .iter()
                .any(|earlier| earlier.target == edge.target)
        })
        .map(|(_, edge)| edge)
}

fn to_owned_path(stack: &[&str]) -> Path {
    stack.iter().map(|building| building.to_string()).collect()
}
