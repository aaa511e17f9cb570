use criterion::{criterion_group, criterion_main, Criterion};
use gridroute_lib::{plan_route, Point, RouteRequest, StrategyRegistry};
use once_cell::sync::Lazy;
use std::hint::black_box;

/// Vertical wall with a single gap, forcing searches to commit to a detour.
fn wall_with_gap(x: i32, height: i32, gap_y: i32) -> Vec<Point> {
    (0..height)
        .filter(|&y| y != gap_y)
        .map(|y| Point::new(x, y))
        .collect()
}

static REGISTRY: Lazy<StrategyRegistry> = Lazy::new(StrategyRegistry::default);

static ASTAR_OPEN: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::direct(100, 100, Point::new(0, 0), Point::new(99, 99)));

static DIJKSTRA_OPEN: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::direct(100, 100, Point::new(0, 0), Point::new(99, 99))
        .with_algorithm("dijkstra")
});

static ASTAR_WALLED: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::direct(100, 100, Point::new(0, 50), Point::new(99, 50))
        .with_obstacles(wall_with_gap(50, 100, 99))
});

static SEGMENTED: Lazy<RouteRequest> = Lazy::new(|| {
    RouteRequest::direct(100, 100, Point::new(0, 0), Point::new(99, 99)).with_waypoints(vec![
        Point::new(99, 0),
        Point::new(0, 99),
    ])
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let registry = &*REGISTRY;

    c.bench_function("astar_open_100x100", |b| {
        let request = &*ASTAR_OPEN;
        b.iter(|| {
            let plan = plan_route(registry, request).expect("route exists");
            black_box(plan.distance)
        });
    });

    c.bench_function("dijkstra_open_100x100", |b| {
        let request = &*DIJKSTRA_OPEN;
        b.iter(|| {
            let plan = plan_route(registry, request).expect("route exists");
            black_box(plan.distance)
        });
    });

    c.bench_function("astar_walled_100x100", |b| {
        let request = &*ASTAR_WALLED;
        b.iter(|| {
            let plan = plan_route(registry, request).expect("route exists");
            black_box(plan.path.len())
        });
    });

    c.bench_function("segmented_two_waypoints_100x100", |b| {
        let request = &*SEGMENTED;
        b.iter(|| {
            let plan = plan_route(registry, request).expect("route exists");
            black_box(plan.path.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
