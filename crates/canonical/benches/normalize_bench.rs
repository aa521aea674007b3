use canonical::normalize;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [64, 512, 4096, 32768].iter() {
        let text = "Şükür İĞNE çöl ".repeat(*size / 20);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| normalize(black_box(&text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
