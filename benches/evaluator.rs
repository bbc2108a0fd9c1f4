use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_hands::evaluator::{classify, compare};
use poker_hands::hand::Hand;

fn hand(s: &str) -> Hand {
    s.parse().expect("valid bench hand")
}

fn bench_classify(c: &mut Criterion) {
    let cases = [
        ("high_card", hand("8s 2h 7c Ad 4c")),
        ("two_pair", hand("4s Ah 8c 4d 8s")),
        ("full_house", hand("8s Ah 8c Ad 8h")),
        ("straight_flush", hand("As Ks Qs Js Ts")),
        ("wheel", hand("Ac 2d 3h 4s 5c")),
    ];

    let mut g = c.benchmark_group("classify");
    for (name, h) in cases.iter() {
        g.bench_with_input(BenchmarkId::new(*name, h), h, |b, input| {
            b.iter(|| classify(black_box(input)))
        });
    }
    g.finish();
}

fn bench_compare(c: &mut Criterion) {
    let a = classify(&hand("5c 8c Js 8d Jd"));
    let b = classify(&hand("8c Jc Js 8d 5d"));
    c.bench_function("compare_tie", |bench| bench.iter(|| compare(black_box(&a), black_box(&b))));
}

criterion_group!(benches, bench_classify, bench_compare);
criterion_main!(benches);
