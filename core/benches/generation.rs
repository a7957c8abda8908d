use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use litgrid_core::*;
use std::hint::black_box;

const TIERS: [(&str, Coord2); 3] = [("small", (8, 8)), ("medium", (24, 32)), ("large", (64, 96))];

fn spanning_tree_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");
    for (name, size) in TIERS {
        group.bench_with_input(BenchmarkId::from_parameter(name), &size, |b, &size| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(SpanningTreeGenerator::new(seed).generate(size))
            });
        });
    }
    group.finish();
}

fn evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for (name, size) in TIERS {
        let Ok(mut engine) = PlayEngine::new_random_board(size, 7) else {
            continue;
        };
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| black_box(engine.evaluate()))
        });
    }
    group.finish();
}

criterion_group!(benches, spanning_tree_generation, evaluation);
criterion_main!(benches);
