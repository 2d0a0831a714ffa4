use std::time::Duration;

use camrail::camera::Camera;
use camrail::path::instance;
use camrail::path::{PathDefinition, PathId, PathRegistry, Waypoint};
use camrail::playback::PathPlayback;
use camrail::store::EntityStore;
use camrail::util::easing::Easing;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

fn long_path(waypoints: usize) -> PathDefinition {
    let points = (0..waypoints)
        .map(|i| {
            let offset = i as f32;
            Waypoint::new(
                Vec3::new(offset, 0.0, 0.0),
                Vec3::new(offset, 1.0, 0.0),
            )
        })
        .collect();
    PathDefinition::new(points, Duration::from_secs(1000), 0)
}

fn easing_benchmark(c: &mut Criterion) {
    let f = Easing::CubicInOut;
    c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn build_teardown_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_teardown");

    for count in [10_usize, 100, 500] {
        let definition = long_path(count);
        let id = PathId::new(1);
        group.bench_function(format!("{count}_waypoints"), |b| {
            b.iter(|| {
                let mut store = EntityStore::new();
                let head = instance::build(&mut store, id, &definition, Vec3::ZERO);
                let destroyed = head.map(|h| instance::teardown(&mut store, h));
                black_box(destroyed)
            })
        });
    }

    group.finish();
}

fn update_tick_benchmark(c: &mut Criterion) {
    let id = PathId::new(1);
    let mut registry = PathRegistry::new();
    registry.insert(id, long_path(100));

    let mut store = EntityStore::new();
    let mut camera = Camera::default();
    let mut playback = PathPlayback::new();
    assert!(playback
        .start(&mut store, &registry, &mut camera, id)
        .is_ok());

    c.bench_function("update_tick", |b| {
        b.iter(|| {
            playback.update(&mut store, &mut camera, Duration::from_micros(10));
            black_box(camera.origin())
        })
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    build_teardown_benchmark,
    update_tick_benchmark
);
criterion_main!(benches);
