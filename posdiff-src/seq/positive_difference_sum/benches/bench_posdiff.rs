use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use pairwise_diff::positive_difference_sum as naive;
use positive_difference_sum::PositiveDifferenceSum;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{Gen, Seq};

fn bench_posdiff(c: &mut Criterion) {
    let mut group = c.benchmark_group("posdiff");

    let mut rng = ChaCha20Rng::from_seed([
        0x55, 0xEF, 0xE0, 0x3C, 0x71, 0xDA, 0xFC, 0xAB, 0x5C, 0x1A, 0x9F, 0xEB,
        0xA4, 0x9E, 0x61, 0xE6, 0x1E, 0x7E, 0x29, 0x77, 0x38, 0x9A, 0xF5, 0x67,
        0xF5, 0xDD, 0x07, 0x06, 0xAE, 0xE4, 0x5A, 0xDC,
    ]);
    let max = 10_i64.pow(8);

    for len in [1000, 5000, 10000] {
        let a = Seq { bound: 0..=max, len }.generate(&mut rng);
        assert_eq!(a.positive_difference_sum(), naive(&a));

        group
            .bench_function(BenchmarkId::new("fenwick", len), |b| {
                b.iter(|| black_box(a.positive_difference_sum()))
            })
            .bench_function(BenchmarkId::new("naive", len), |b| {
                b.iter(|| black_box(naive(&a)))
            });
    }

    // only the fast one at full scale
    let len = 4 * 10_usize.pow(5);
    let a = Seq { bound: 0..=max, len }.generate(&mut rng);
    group.sample_size(10).bench_function(
        BenchmarkId::new("fenwick", len),
        |b| b.iter(|| black_box(a.positive_difference_sum())),
    );

    group.finish();
}

criterion_group!(benches, bench_posdiff);
criterion_main!(benches);
