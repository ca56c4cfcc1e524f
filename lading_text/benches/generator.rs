//! Benchmarks for random string generation.

use criterion::{BenchmarkId, Criterion, criterion_group};

use lading_text::{Generator, Method};
use rand::{SeedableRng, rngs::SmallRng};
use std::time::Duration;

use crate::source::datasets;

fn generate_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_string");
    for (name, tables) in datasets() {
        for method in [Method::Flat, Method::Ranged] {
            let mut rng = SmallRng::seed_from_u64(19690716);
            let generator = Generator::with_method(method, &tables, &mut rng)
                .expect("failed to build generator");
            for (min, max) in [(10, 10), (10, 15), (50, 100), (512, 512)] {
                group.bench_function(
                    BenchmarkId::new(format!("{name}/{method:?}"), format!("{min}-{max}")),
                    |b| {
                        b.iter(|| {
                            generator
                                .generate_string(&mut rng, min, max)
                                .expect("failed to generate string")
                        });
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = generate_string
);
