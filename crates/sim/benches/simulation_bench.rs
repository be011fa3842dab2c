use cltm_sim::base::DistributionKind;
use cltm_sim::simulation::{sample_means, Configuration, Population, SimulationBuilder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn bench_population_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_generate");

    for kind in DistributionKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| black_box(Population::from_seed(black_box(kind), 42).unwrap()))
        });
    }

    group.finish();
}

fn bench_sample_means(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_means");
    let population = Population::from_seed(DistributionKind::Exponential, 42).unwrap();
    let num_simulations = 2000;

    for sample_size in [1usize, 30, 100] {
        group.throughput(Throughput::Elements((sample_size * num_simulations) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(sample_size),
            &sample_size,
            |b, &n| {
                b.iter_batched(
                    || Xoshiro256PlusPlus::seed_from_u64(42),
                    |mut rng| {
                        black_box(
                            sample_means(population.values(), n, num_simulations, &mut rng)
                                .unwrap(),
                        )
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_simulation_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_run");

    group.bench_function("defaults", |b| {
        b.iter_batched(
            || {
                SimulationBuilder::from_config(Configuration::default())
                    .build()
                    .unwrap()
            },
            |sim| black_box(sim.into_outcome().unwrap()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("worst_case", |b| {
        b.iter_batched(
            || {
                SimulationBuilder::new()
                    .kind(DistributionKind::Bimodal)
                    .sample_size(100)
                    .simulations(10_000)
                    .build()
                    .unwrap()
            },
            |sim| black_box(sim.into_outcome().unwrap()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_population_generate,
    bench_sample_means,
    bench_simulation_run
);
criterion_main!(benches);
