use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lugat::{EntryStore, Matcher, Record};

const STEMS: [&str; 8] = [
    "tekemmül", "techir", "şükran", "istikbal", "muallim", "hakikat", "ziya", "peyk",
];
const MEANINGS: [&str; 8] = [
    "olgunlaşma", "erteleme", "teşekkür, minnet", "gelecek", "öğretmen", "gerçek", "ışık", "uydu",
];

/// Synthetic glossary of `size` single-field records with unique old terms.
fn glossary(size: usize) -> EntryStore {
    let records = (0..size)
        .map(|i| {
            let old = format!("{}{i}", STEMS[i % STEMS.len()]);
            Record::single(old, MEANINGS[i % MEANINGS.len()])
        })
        .collect();
    EntryStore::from_records(records).expect("non-empty glossary")
}

fn bench_search_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_scale");

    for &size in [100, 1_000, 10_000].iter() {
        let matcher = Matcher::new(glossary(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("records_{size}"), |b| {
            b.iter(|| matcher.search(black_box("ogretmen")))
        });
    }

    group.finish();
}

fn bench_query_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_shapes");
    let matcher = Matcher::new(glossary(1_000));

    for (name, query) in [
        ("single_char", "e"),
        ("diacritic_query", "TEŞEKKÜR"),
        ("synonym_token", "minnet"),
        ("no_match", "qqqq"),
    ] {
        group.bench_function(name, |b| b.iter(|| matcher.search(black_box(query))));
    }

    group.finish();
}

fn bench_bundled(c: &mut Criterion) {
    let store = EntryStore::from_json_str(lugat::BUNDLED_GLOSSARY).expect("bundled glossary");
    let matcher = Matcher::new(store);
    c.bench_function("bundled_search", |b| b.iter(|| matcher.search(black_box("ölüm"))));
}

criterion_group!(benches, bench_search_scale, bench_query_shapes, bench_bundled);
criterion_main!(benches);
