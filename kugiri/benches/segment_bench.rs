use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use kugiri::{Language, Segmenter};

fn bench_segment_ja(c: &mut Criterion) {
    let text =
        "Google の使命は、世界中の情報を整理し、世界中の人がアクセスできて使えるようにすることです。"
            .repeat(64);

    let mut group = c.benchmark_group("Segment");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("ja", |b| {
        b.iter(|| {
            let mut seg = Segmenter::new(text.as_bytes());
            let mut total = 0usize;
            while let Some(span) = seg.next(Language::Ja) {
                total += span.length;
            }
            std::hint::black_box(total)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_segment_ja);
criterion_main!(benches);
