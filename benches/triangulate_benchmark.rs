use criterion::*;

use bowyer::{BowyerWatson, ExactKernel, Point2};

use crate::benchmark_utilities::*;

pub fn triangulate_benchmark(c: &mut Criterion) {
    use KernelType::*;
    use SampleDistribution::*;

    let mut group = c.benchmark_group("triangulate benchmark");
    let sizes = &[100, 250, 500, 1000, 2000];

    for (kernel_type, sample_distribution) in [
        (Trivial, Uniform),
        (Trivial, RandomWalk),
        (Exact, Uniform),
        (Exact, RandomWalk),
    ] {
        let config = TriangulationBenchConfig {
            kernel_type,
            sample_distribution,
        };
        config.apply(&mut group, sizes);
    }
    group.finish();

    // Trivial predicates are too imprecise for f32 coordinates of this magnitude
    let mut group = c.benchmark_group("triangulate benchmark (precision)");
    let triangulator = BowyerWatson::<ExactKernel>::new();
    for size in sizes {
        group.throughput(Throughput::Elements(*size as u64));
        let data_f64: Vec<Point2<f64>> = uniform_distribution(*SEED, RANGE).take(*size).collect();
        let data_f32: Vec<Point2<f32>> = uniform_distribution(*SEED, RANGE as f32)
            .take(*size)
            .collect();

        group.bench_with_input(BenchmarkId::new("f64", size), &data_f64, |b, data| {
            b.iter(|| triangulator.triangulate(data).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("f32", size), &data_f32, |b, data| {
            b.iter(|| triangulator.triangulate(data).unwrap())
        });
    }
    group.finish();
}
