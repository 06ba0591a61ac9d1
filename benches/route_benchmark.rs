use campus_navigator::{
    models::{Building, Location},
    utils::init_map::bundled_campus,
    SearchStrategy,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_campus(c: &mut Criterion) {
    let campus = bundled_campus().expect("bundled campus map");

    for strategy in [SearchStrategy::LinearScan, SearchStrategy::IndexedHeap] {
        c.bench_function(&format!("campus_{}", strategy), |b| {
            b.iter(|| {
                strategy.find_route(
                    black_box(&campus),
                    black_box("exit"),
                    black_box("class-201"),
                )
            })
        });
    }
}

fn benchmark_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_corner_to_corner");

    for side in [10, 20, 40] {
        let building = create_grid(side);
        let destination = format!("{}-{}", side - 1, side - 1);

        for strategy in [SearchStrategy::LinearScan, SearchStrategy::IndexedHeap] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), side * side),
                &building,
                |b, building| {
                    b.iter(|| strategy.find_route(black_box(building), "0-0", &destination))
                },
            );
        }
    }

    group.finish();
}

// Square grid of rooms, each linked to its four neighbours
fn create_grid(side: usize) -> Building {
    let mut locations = Vec::with_capacity(side * side);

    for i in 0..side {
        for j in 0..side {
            let mut location = Location::new(
                format!("{}-{}", i, j),
                format!("Room {}-{}", i, j),
                0,
                i as f64 * 10.0,
                j as f64 * 10.0,
            );
            if i > 0 {
                location.connections.push(format!("{}-{}", i - 1, j));
            }
            if i + 1 < side {
                location.connections.push(format!("{}-{}", i + 1, j));
            }
            if j > 0 {
                location.connections.push(format!("{}-{}", i, j - 1));
            }
            if j + 1 < side {
                location.connections.push(format!("{}-{}", i, j + 1));
            }
            locations.push(location);
        }
    }

    Building::from_locations("Grid", locations).expect("unique grid ids")
}

criterion_group!(benches, benchmark_campus, benchmark_grid);
criterion_main!(benches);
