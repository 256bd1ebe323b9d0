//! Benchmarks for gruppe's combinatorial core.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gruppe::{
    all_subgroups, all_subgroups_brute_force, cayley_representation, conjugacy_classes, cyclic,
    dihedral, symmetric, SearchLimits,
};

fn bench_closure_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Closure Generation");

    for degree in [4usize, 5] {
        group.bench_with_input(
            BenchmarkId::new("symmetric", degree),
            &degree,
            |bencher, &degree| bencher.iter(|| symmetric(black_box(degree)).unwrap()),
        );
    }

    for sides in [8u64, 16] {
        group.bench_with_input(
            BenchmarkId::new("dihedral", sides),
            &sides,
            |bencher, &sides| bencher.iter(|| dihedral(black_box(sides)).unwrap()),
        );
    }

    group.finish();
}

fn bench_subgroup_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Subgroup Search");
    let limits = SearchLimits::default();

    let d6 = dihedral(6).unwrap();
    group.bench_function("generator-driven D6", |bencher| {
        bencher.iter(|| all_subgroups(black_box(&d6), &limits).unwrap())
    });

    let c12 = cyclic(12).unwrap();
    group.bench_function("brute-force C12", |bencher| {
        bencher.iter(|| all_subgroups_brute_force(black_box(&c12), &limits).unwrap())
    });

    group.finish();
}

fn bench_structural_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Structural Analysis");

    let s4 = symmetric(4).unwrap();
    group.bench_function("conjugacy classes S4", |bencher| {
        bencher.iter(|| conjugacy_classes(black_box(&s4)))
    });

    let d6 = dihedral(6).unwrap();
    group.bench_function("cayley representation D6", |bencher| {
        bencher.iter(|| cayley_representation(black_box(&d6)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_closure_generation,
    bench_subgroup_search,
    bench_structural_analysis
);
criterion_main!(benches);
