//! Output formatting for route plans, strategy comparisons and map listings.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{CampusGraph, CampusMap, RoutePlan, StrategyComparison};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Serialize any report as pretty JSON.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output as JSON")
}

/// Render a planned route as text.
pub fn render_plan_text(plan: &RoutePlan) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Route from {} to {} ({} hops, algorithm: {}):",
        plan.start,
        plan.goal,
        plan.hop_count(),
        plan.algorithm
    );
    for (index, step) in plan.steps.iter().enumerate() {
        let marker = if index == 0 { '+' } else { '-' };
        let _ = writeln!(buffer, "  {marker} {step}");
    }
    let _ = writeln!(buffer, "Total distance: {}", plan.total_distance);
    let _ = writeln!(buffer, "Outdoor distance: {}", plan.outdoor_distance);
    buffer
}

/// Render both strategies' results side by side.
pub fn render_comparison_text(comparison: &StrategyComparison) -> String {
    let mut buffer = String::new();
    for (label, plan) in [
        ("brute-force", &comparison.brute_force),
        ("pruned", &comparison.pruned),
    ] {
        match plan {
            Some(plan) => {
                let _ = writeln!(
                    buffer,
                    "{label}: total {} (outdoor {}) via {} [{} candidates]",
                    plan.total_distance,
                    plan.outdoor_distance,
                    plan.steps.join(" -> "),
                    plan.candidates
                );
            }
            None => {
                let _ = writeln!(buffer, "{label}: no path");
            }
        }
    }
    let verdict = if comparison.agrees() {
        "agree"
    } else {
        "DISAGREE"
    };
    let _ = writeln!(buffer, "strategies {verdict}");
    buffer
}

/// One building and its number of outgoing edges.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BuildingSummary {
    pub id: String,
    pub edges: usize,
}

/// Summaries for every building in map order.
pub fn building_summaries(map: &CampusMap) -> Vec<BuildingSummary> {
    map.buildings()
        .map(|id| BuildingSummary {
            id: id.to_string(),
            edges: map.neighbours(id).len(),
        })
        .collect()
}

/// Render the building listing as text.
pub fn render_buildings_text(summaries: &[BuildingSummary]) -> String {
    let mut buffer = String::new();
    let _ = writeln!(buffer, "{} buildings:", summaries.len());
    for summary in summaries {
        let _ = writeln!(buffer, "  {} ({} edges)", summary.id, summary.edges);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusnav_lib::{SearchAlgorithm, Weight};

    fn sample_plan() -> RoutePlan {
        RoutePlan {
            algorithm: SearchAlgorithm::Pruned,
            start: "32".to_string(),
            goal: "56".to_string(),
            steps: vec!["32".to_string(), "36".to_string(), "56".to_string()],
            total_distance: 50,
            outdoor_distance: 0,
            candidates: 2,
        }
    }

    #[test]
    fn plan_text_lists_steps_and_distances() {
        let text = render_plan_text(&sample_plan());
        assert!(text.starts_with("Route from 32 to 56 (2 hops, algorithm: pruned):"));
        assert!(text.contains("  + 32\n  - 36\n  - 56\n"));
        assert!(text.contains("Total distance: 50"));
        assert!(text.contains("Outdoor distance: 0"));
    }

    #[test]
    fn plan_json_uses_kebab_case_algorithm() {
        let json = render_json(&sample_plan()).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["algorithm"], "pruned");
        assert_eq!(value["total_distance"], 50);
        assert_eq!(value["steps"][1], "36");
    }

    #[test]
    fn comparison_text_flags_disagreement() {
        let mut plan = sample_plan();
        let agreeing = StrategyComparison {
            brute_force: Some(plan.clone()),
            pruned: Some(plan.clone()),
        };
        assert!(render_comparison_text(&agreeing).ends_with("strategies agree\n"));

        plan.total_distance = 10;
        let disagreeing = StrategyComparison {
            brute_force: Some(plan),
            pruned: None,
        };
        let text = render_comparison_text(&disagreeing);
        assert!(text.contains("pruned: no path"));
        assert!(text.contains("DISAGREE"));
    }

    #[test]
    fn building_listing_counts_edges() {
        let mut map = CampusMap::new();
        map.add_edge("1", "2", Weight::new(3, 1));
        map.add_edge("1", "3", Weight::new(4, 0));

        let summaries = building_summaries(&map);
        assert_eq!(
            summaries,
            vec![
                BuildingSummary {
                    id: "1".into(),
                    edges: 2
                },
                BuildingSummary {
                    id: "2".into(),
                    edges: 0
                },
                BuildingSummary {
                    id: "3".into(),
                    edges: 0
                },
            ]
        );
        assert!(render_buildings_text(&summaries).starts_with("3 buildings:\n  1 (2 edges)"));
    }
}
