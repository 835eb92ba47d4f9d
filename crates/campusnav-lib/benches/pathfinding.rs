use campusnav_lib::{load_campus_map, plan_route, CampusMap, RouteRequest, SearchAlgorithm};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus_map.txt")
}

static MAP: Lazy<CampusMap> = Lazy::new(|| load_campus_map(&fixture_path()).expect("fixture loads"));
static UNBOUNDED_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::unbounded("1", "32"));
static INDOOR_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::unbounded("1", "32").with_max_outdoor(0));

fn benchmark_pathfinding(c: &mut Criterion) {
    let map = &*MAP;

    for (label, request) in [("unbounded", &*UNBOUNDED_REQUEST), ("indoor", &*INDOOR_REQUEST)] {
        for algorithm in [SearchAlgorithm::BruteForce, SearchAlgorithm::Pruned] {
            let request = request.clone().with_algorithm(algorithm);
            c.bench_function(&format!("{algorithm}_{label}_1_32"), |b| {
                b.iter(|| {
                    let plan = plan_route(map, &request).expect("route exists");
                    black_box(plan.total_distance)
                });
            });
        }
    }
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
