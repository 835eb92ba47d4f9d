use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

/// Opaque label identifying a building on the campus map.
pub type BuildingId = String;

/// Pair of distances carried by every edge.
///
/// By convention `outdoor <= total`, but nothing in the search relies on it;
/// the two components are summed independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Weight {
    pub total: u64,
    pub outdoor: u64,
}

impl Weight {
    pub fn new(total: u64, outdoor: u64) -> Self {
        Self { total, outdoor }
    }
}

/// Directed edge within the campus graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: BuildingId,
    pub weight: Weight,
}

/// Read-only view of a campus graph consumed by the search engines.
///
/// Implementations must return neighbours in a stable order; the searches
/// visit them in that order, which decides how ties are broken.
pub trait CampusGraph {
    /// Canonical label for `id`, or `None` when the building is not on the map.
    fn building(&self, id: &str) -> Option<&str>;

    /// Outgoing edges of `id` in insertion order. Unknown buildings have none.
    fn neighbours(&self, id: &str) -> &[Edge];

    /// All building labels in insertion order.
    fn buildings(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Whether `id` names a building on the map.
    fn contains(&self, id: &str) -> bool {
        self.building(id).is_some()
    }
}

#[derive(Debug, Clone, Default)]
struct Adjacency {
    order: Vec<BuildingId>,
    edges: HashMap<BuildingId, Vec<Edge>>,
}

/// In-memory campus map: buildings plus their outgoing weighted edges.
///
/// Clones share the adjacency until one of them is mutated.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    adjacency: Arc<Adjacency>,
}

impl CampusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a building, returning `false` when it was already present.
    pub fn add_building(&mut self, id: impl Into<BuildingId>) -> bool {
        let id = id.into();
        if self.adjacency.edges.contains_key(&id) {
            return false;
        }
        let adjacency = Arc::make_mut(&mut self.adjacency);
        adjacency.order.push(id.clone());
        adjacency.edges.insert(id, Vec::new());
        true
    }

    /// Add a directed edge, registering both endpoints on first mention.
    ///
    /// Only one edge is kept per ordered pair of buildings; a repeated pair is
    /// ignored and reported through `false`.
    pub fn add_edge(
        &mut self,
        from: impl Into<BuildingId>,
        to: impl Into<BuildingId>,
        weight: Weight,
    ) -> bool {
        let from = from.into();
        let to = to.into();
        self.add_building(from.clone());
        self.add_building(to.clone());

        if weight.outdoor > weight.total {
            warn!(
                %from,
                %to,
                total = weight.total,
                outdoor = weight.outdoor,
                "edge spends more distance outdoors than in total"
            );
        }

        let adjacency = Arc::make_mut(&mut self.adjacency);
        let edges = adjacency.edges.entry(from.clone()).or_default();
        if edges.iter().any(|edge| edge.target == to) {
            warn!(%from, %to, "ignoring duplicate edge");
            return false;
        }
        edges.push(Edge { target: to, weight });
        true
    }

    pub fn building_count(&self) -> usize {
        self.adjacency.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.order.is_empty()
    }

    /// Weight of the edge from `from` to `to`, if one exists.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }
}

impl CampusGraph for CampusMap {
    fn building(&self, id: &str) -> Option<&str> {
        self.adjacency
            .edges
            .get_key_value(id)
            .map(|(key, _)| key.as_str())
    }

    fn neighbours(&self, id: &str) -> &[Edge] {
        self.adjacency
            .edges
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn buildings(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.adjacency.order.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> CampusMap {
        let mut map = CampusMap::new();
        map.add_edge("A", "B", Weight::new(10, 2));
        map.add_edge("A", "C", Weight::new(5, 5));
        map.add_edge("C", "B", Weight::new(3, 0));
        map
    }

    #[test]
    fn add_edge_registers_both_endpoints() {
        let map = triangle();
        assert_eq!(map.building_count(), 3);
        assert_eq!(map.edge_count(), 3);
        assert!(map.contains("B"));
        assert!(!map.contains("D"));
        assert_eq!(map.building("C"), Some("C"));
    }

    #[test]
    fn neighbours_keep_insertion_order() {
        let map = triangle();
        let targets: Vec<_> = map
            .neighbours("A")
            .iter()
            .map(|edge| edge.target.as_str())
            .collect();
        assert_eq!(targets, vec!["B", "C"]);
        assert!(map.neighbours("B").is_empty(), "sink has no edges");
        assert!(map.neighbours("missing").is_empty());
    }

    #[test]
    fn duplicate_edges_keep_the_first_weight() {
        let mut map = triangle();
        assert!(!map.add_edge("A", "B", Weight::new(1, 0)));
        assert_eq!(map.edge_weight("A", "B"), Some(Weight::new(10, 2)));
        assert_eq!(map.edge_count(), 3);
    }

    #[test]
    fn clones_do_not_observe_later_edits() {
        let original = triangle();
        let mut copy = original.clone();
        copy.add_edge("B", "D", Weight::new(1, 1));

        assert_eq!(copy.building_count(), 4);
        assert_eq!(original.building_count(), 3);
        assert!(original.neighbours("B").is_empty());
    }

    #[test]
    fn buildings_iterate_in_first_mention_order() {
        let map = triangle();
        let labels: Vec<_> = map.buildings().collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn add_building_reports_existing_labels() {
        let mut map = CampusMap::new();
        assert!(map.is_empty());
        assert!(map.add_building("32"));
        assert!(!map.add_building("32"));
        assert_eq!(map.building_count(), 1);
        assert_eq!(map.edge_count(), 0);
    }
}
