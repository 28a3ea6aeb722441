use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fm_search::{Bytes, FmIndex, IndexConfig, RankStrategy, SuffixSort};

fn generate_text(size: usize) -> Vec<u8> {
    let words = [
        "the ", "quick ", "brown ", "fox ", "jumps ", "over ", "lazy ", "dog ",
        "suffix ", "array ", "wavelet ", "rank ", "sentinel ", "pattern ", "text ",
        "count ", "locate ", "search ", "query ", "result ",
    ];
    let mut text = Vec::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.extend_from_slice(words[i % words.len()].as_bytes());
        i += 1;
    }
    text.truncate(size);
    text
}

fn rank_strategies() -> [(&'static str, RankStrategy); 3] {
    [
        ("full", RankStrategy::Full),
        ("sampled_32", RankStrategy::Sampled { step: 32 }),
        ("wavelet", RankStrategy::Wavelet),
    ]
}

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");

    for size in [1_000, 10_000, 50_000] {
        let text = generate_text(size);
        for (name, suffix_sort) in [
            ("naive", SuffixSort::Naive),
            ("doubling", SuffixSort::PrefixDoubling),
        ] {
            let config = IndexConfig::default().with_suffix_sort(suffix_sort);
            group.bench_with_input(BenchmarkId::new(name, size), &text, |b, text| {
                b.iter(|| FmIndex::build_with(black_box(&text[..]), Bytes::default(), config))
            });
        }
    }
    group.finish();
}

fn bench_count(c: &mut Criterion) {
    let text = generate_text(20_000);
    let mut group = c.benchmark_group("count");

    for (name, rank) in rank_strategies() {
        let config = IndexConfig::default().with_rank(rank);
        let Ok(index) = FmIndex::build_with(&text[..], Bytes::default(), config) else {
            continue;
        };

        for pattern in ["fox", "the quick", "sentinel pattern text"] {
            group.bench_with_input(
                BenchmarkId::new(name, pattern),
                pattern.as_bytes(),
                |b, pat| b.iter(|| index.count(black_box(pat))),
            );
        }
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let text = generate_text(20_000);
    let Ok(index) = FmIndex::build(&text) else {
        return;
    };

    c.bench_function("contains_hit", |b| {
        b.iter(|| index.contains(black_box(b"fox")))
    });

    c.bench_function("contains_miss", |b| {
        b.iter(|| index.contains(black_box(b"zzzzz")))
    });
}

fn bench_locate(c: &mut Criterion) {
    let text = generate_text(20_000);
    let Ok(index) = FmIndex::build(&text) else {
        return;
    };

    c.bench_function("locate_all_fox", |b| {
        b.iter(|| index.locate_all(black_box(b"fox")).map(|p| p.len()))
    });

    c.bench_function("locate_iter_first_10", |b| {
        b.iter(|| index.locate(black_box(b"the")).map(|it| it.take(10).count()))
    });
}

criterion_group!(
    benches,
    bench_build_index,
    bench_count,
    bench_contains,
    bench_locate,
);
criterion_main!(benches);
