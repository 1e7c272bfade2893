use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use metakey::{metadata_key, Metadata, MetadataKey as _};
use std::hint::black_box;

metadata_key! {
    struct A: u32;
    struct B: u32;
    struct C: u32;
    struct D: u32;
}

#[inline]
fn metadata_abc() -> Metadata {
    let metadata = A.insert(Metadata::new(), 1);
    let metadata = B.insert(metadata, 2);
    C.insert(metadata, 3)
}

fn metadata_benchmark(c: &mut Criterion) {
    c.bench_function("metadata_insert_single", |b| {
        b.iter(|| A.insert(Metadata::new(), black_box(1)));
    })
    .bench_function("metadata_insert_three", |b| {
        b.iter(metadata_abc);
    })
    .bench_function("metadata_replace", |b| {
        b.iter_batched(metadata_abc, |metadata| B.insert(metadata, black_box(4)), BatchSize::SmallInput);
    })
    .bench_function("metadata_remove_middle", |b| {
        b.iter_batched(metadata_abc, |metadata| B.remove(metadata), BatchSize::SmallInput);
    })
    .bench_function("metadata_get_hit", |b| {
        let metadata = metadata_abc();
        b.iter(|| C.get(black_box(&metadata)).copied());
    })
    .bench_function("metadata_get_miss", |b| {
        let metadata = metadata_abc();
        b.iter(|| D.get(black_box(&metadata)).copied());
    });
}

criterion_group!(benches, metadata_benchmark);
criterion_main!(benches);
