//! Campusnav library entry points.
//!
//! This crate models a campus as a directed graph of buildings whose edges
//! carry a total distance and the part of that distance spent outdoors. It
//! loads maps from the plain-text edge format and finds the shortest route
//! between two buildings that respects both distance ceilings, either by
//! exhaustive enumeration or by a branch-and-bound depth-first search.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod map;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{BuildingId, CampusGraph, CampusMap, Edge, Weight};
pub use map::{
    default_map_path, load_campus_map, parse_campus_map, resolve_map_path, MAP_PATH_ENV,
};
pub use path::{all_paths, path_cost, pruned_paths, DistanceLimits, Path, PathCost, SearchState};
pub use routing::{
    compare_strategies, find_shortest_path_brute_force, find_shortest_path_optimized, plan_route,
    select_planner, select_shortest, BruteForcePlanner, PathPlanner, PrunedPlanner, RoutePlan,
    RouteRequest, SearchAlgorithm, StrategyComparison,
};
