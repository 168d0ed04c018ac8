use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use spatial_interaction::{DistanceDecay, FlowModel, Lenormand, LenormandConfig, Pwo, Radiation};

struct Inputs {
    inflows: Array1<f64>,
    outflows: Array1<f64>,
    dists: Array2<f64>,
    locs: Array2<f64>,
}

/// Random points in the unit square with balanced whole-number marginals.
fn make_inputs(n: usize, seed: u64) -> Inputs {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let locs = Array2::from_shape_fn((n, 2), |_| rng.gen::<f64>());
    let dists = Array2::from_shape_fn((n, n), |(i, j)| {
        let dx = locs[[i, 0]] - locs[[j, 0]];
        let dy = locs[[i, 1]] - locs[[j, 1]];
        (dx * dx + dy * dy).sqrt()
    });
    let outflows = Array1::from_shape_fn(n, |_| rng.gen_range(10..200) as f64);
    // Same multiset of counts, shifted by one location.
    let inflows = Array1::from_shape_fn(n, |j| outflows[(j + 1) % n]);
    Inputs {
        inflows,
        outflows,
        dists,
        locs,
    }
}

fn bench_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("flowmat");
    group.sample_size(20);

    for &n in &[16usize, 64, 128] {
        let x = make_inputs(n, 123);

        let radiation = Radiation::new(&x.inflows, &x.outflows, &x.dists, &x.locs, &x.locs).unwrap();
        group.bench_with_input(BenchmarkId::new("radiation", n), &n, |b, _| {
            b.iter(|| radiation.flowmat())
        });

        let pwo = Pwo::new(&x.inflows, &x.outflows, &x.dists, &x.locs, &x.locs).unwrap();
        group.bench_with_input(BenchmarkId::new("pwo", n), &n, |b, _| b.iter(|| pwo.flowmat()));

        let cfg = LenormandConfig {
            decay: DistanceDecay::Beta(5.0),
            seed: 7,
        };
        let lenormand = Lenormand::new(&x.inflows, &x.outflows, &x.dists, &cfg).unwrap();
        group.bench_with_input(BenchmarkId::new("lenormand", n), &n, |b, _| {
            b.iter(|| lenormand.flowmat())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_models);
criterion_main!(benches);
