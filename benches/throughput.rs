use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use segrouter::{RegexRouter, Route, Router, TreeRouter};
use std::hint::black_box;

const PATTERNS: &[&str] = &[
    "/",
    "/zoo/animals",
    "/zoo/animals/:id<[0-9]+>",
    "/zoo/animals/:id/toys/:toy_id",
    "/zoo/:category/animals/:id/habitats/:habitat_id/sections/:section_id",
    "/inventory/:warehouse_id/feeds/:feed_id/items/:item_id/batches/:batch_id",
    "/complex/:a/:b/:c/:d/:e/:f/:g/:h/:i",
    "/zoo/health",
    "/static/*",
    "/say/*/to/:name",
];

const PATHS: &[&str] = &[
    "/zoo/animals/123",
    "/zoo/animals/123/toys/456",
    "/zoo/cats/animals/123/habitats/88/sections/5",
    "/inventory/1/feeds/2/items/3/batches/4",
    "/complex/1/2/3/4/5/6/7/8/9",
    "/static/css/site.css",
    "/say/hello/to/Tim",
    "/missing/route",
];

fn build<R: Router + Default>() -> R {
    let mut router = R::default();
    for pattern in PATTERNS {
        router
            .add(Route::new(*pattern))
            .unwrap_or_else(|e| panic!("bench route {pattern}: {e}"));
    }
    router
}

fn bench_strategy<R: Router + Default>(c: &mut Criterion, name: &str) {
    let router: R = build();
    let mut group = c.benchmark_group("route_match");
    group.bench_function(BenchmarkId::new(name, "route"), |b| {
        b.iter(|| {
            for path in PATHS {
                black_box(router.route(black_box(path)));
            }
        })
    });
    group.bench_function(BenchmarkId::new(name, "find"), |b| {
        b.iter(|| {
            for path in PATHS {
                black_box(router.find(black_box(path)));
            }
        })
    });
    group.finish();
}

fn bench_route_throughput(c: &mut Criterion) {
    bench_strategy::<TreeRouter>(c, "tree");
    bench_strategy::<RegexRouter>(c, "regex");
}

fn bench_registration(c: &mut Criterion) {
    c.bench_function("tree_build", |b| b.iter(|| black_box(build::<TreeRouter>())));
}

criterion_group!(benches, bench_route_throughput, bench_registration);
criterion_main!(benches);
