use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jyotish_vedic::{
    AyanamshaSystem, DoshaBasis, GeoLocation, Graha, LunarNode, NodeMode, Rashi, ayanamsha_deg,
    dosha_balance, equal_houses, lagna_and_mc_deg, lunar_node_deg, nakshatra_from_tropical,
    rashi_from_tropical, tithi_from_elongation, yoga_from_sum,
};

fn ayanamsha_bench(c: &mut Criterion) {
    let t = 0.24;
    c.bench_function("ayanamsha_lahiri", |b| {
        b.iter(|| ayanamsha_deg(AyanamshaSystem::Lahiri, black_box(t)))
    });
}

fn zodiac_bench(c: &mut Criterion) {
    let tropical_lon = 123.456;
    let aya = 24.18;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_tropical", |b| {
        b.iter(|| rashi_from_tropical(black_box(tropical_lon), black_box(aya)))
    });
    group.bench_function("nakshatra_from_tropical", |b| {
        b.iter(|| nakshatra_from_tropical(black_box(tropical_lon), black_box(aya)))
    });
    group.finish();
}

fn panchang_primitives_bench(c: &mut Criterion) {
    let elong = 211.75;
    let sum = 278.31;
    let t = 0.24;

    let mut group = c.benchmark_group("panchang_primitives");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("yoga_from_sum", |b| b.iter(|| yoga_from_sum(black_box(sum))));
    group.bench_function("lunar_node_true_rahu", |b| {
        b.iter(|| lunar_node_deg(LunarNode::Rahu, black_box(t), NodeMode::True))
    });
    group.finish();
}

fn chart_frame_bench(c: &mut Criterion) {
    let loc = GeoLocation::new(23.1765, 75.7885).unwrap();
    let placements = [
        (Graha::Surya, Rashi::Makara),
        (Graha::Chandra, Rashi::Simha),
        (Graha::Guru, Rashi::Mithuna),
    ];

    let mut group = c.benchmark_group("chart_frame");
    group.bench_function("lagna_and_mc", |b| {
        b.iter(|| lagna_and_mc_deg(black_box(2_447_906.77), &loc))
    });
    group.bench_function("equal_houses", |b| b.iter(|| equal_houses(black_box(359.7))));
    group.bench_function("dosha_balance", |b| {
        b.iter(|| dosha_balance(Rashi::Meena, black_box(&placements), DoshaBasis::Rashi))
    });
    group.finish();
}

criterion_group!(
    benches,
    ayanamsha_bench,
    zodiac_bench,
    panchang_primitives_bench,
    chart_frame_bench
);
criterion_main!(benches);
