use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dupfind::find_duplicate_pair;
use rand::{SeedableRng as _, rngs::StdRng, seq::SliceRandom as _};

/// Distinct values in random order; the scan has to compare every pair.
fn gen_unique_vec(n: usize, rng: &mut StdRng) -> Vec<i32> {
    let mut v: Vec<i32> = (0..n as i32).collect();
    v.shuffle(rng);
    v
}

/// Distinct values with the last one repeated, found on the final comparison.
fn gen_late_dup_vec(n: usize, rng: &mut StdRng) -> Vec<i32> {
    let mut v = gen_unique_vec(n - 1, rng);
    if let Some(&last) = v.last() {
        v.insert(v.len() - 1, last);
    }
    v
}

/// Duplicate in the first two slots, found on the first comparison.
fn gen_early_dup_vec(n: usize, rng: &mut StdRng) -> Vec<i32> {
    let mut v = gen_unique_vec(n - 1, rng);
    v.insert(0, v[0]);
    v
}

fn bench_nested_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_scan");

    let sizes = [100, 1_000, 5_000];

    for &n in &sizes {
        // fixed seed per size keeps runs comparable
        let mut rng = StdRng::seed_from_u64(n as u64);

        let inputs = [
            ("all_unique", gen_unique_vec(n, &mut rng)),
            ("late_dup", gen_late_dup_vec(n, &mut rng)),
            ("early_dup", gen_early_dup_vec(n, &mut rng)),
        ];

        for (name, data) in &inputs {
            group.bench_with_input(BenchmarkId::new(*name, n), data, |b, data| {
                b.iter(|| {
                    let dup = find_duplicate_pair(black_box(data.as_slice()));
                    black_box(dup.map(|d| *d.value));
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_nested_scan);
criterion_main!(benches);
