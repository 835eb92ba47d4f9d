#![allow(dead_code)]

use std::path::PathBuf;

use campusnav_lib::{load_campus_map, CampusMap, Weight};

/// Bound standing in for "no limit" in the reference scenarios.
pub const LARGE_DIST: u64 = 1_000_000;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus_map.txt")
}

pub fn fixture_map() -> CampusMap {
    load_campus_map(&fixture_path()).expect("fixture map loads")
}

pub fn labels(path: &[String]) -> Vec<&str> {
    path.iter().map(String::as_str).collect()
}

/// Deterministic linear congruential generator for reproducible graphs.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Random sparse digraph over buildings `b0..b{buildings}`.
///
/// Weights include zero-length edges and edges whose outdoor part exceeds
/// the total, which the search must handle without special cases.
pub fn generated_map(seed: u64, buildings: usize, edges: usize) -> CampusMap {
    let mut rng = Lcg::new(seed);
    let mut map = CampusMap::new();
    for index in 0..buildings {
        map.add_building(format!("b{index}"));
    }
    for _ in 0..edges {
        let from = rng.below(buildings as u64);
        let to = rng.below(buildings as u64);
        if from == to {
            continue;
        }
        let total = rng.below(30);
        let outdoor = match rng.below(4) {
            0 => 0,
            1 => total + rng.below(5),
            _ => rng.below(total + 1),
        };
        map.add_edge(
            format!("b{from}"),
            format!("b{to}"),
            Weight::new(total, outdoor),
        );
    }
    map
}
