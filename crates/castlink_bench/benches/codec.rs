//! Record decoding benchmarks.

use castlink_bench::dense_dataset;
use castlink_codec::{compare_name_at, decode_actor_record, decode_movie_record};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_decode(c: &mut Criterion) {
    let dataset = dense_dataset(1_000, 4);
    let actor_offset = u32::from_le_bytes(dataset.actor_bytes[4..8].try_into().unwrap());
    let movie_offset = u32::from_le_bytes(dataset.movie_bytes[4..8].try_into().unwrap());

    c.bench_function("decode_actor_record", |b| {
        b.iter(|| {
            let record =
                decode_actor_record(black_box(&dataset.actor_bytes), actor_offset).unwrap();
            black_box(record);
        });
    });

    c.bench_function("decode_movie_record", |b| {
        b.iter(|| {
            let record =
                decode_movie_record(black_box(&dataset.movie_bytes), movie_offset).unwrap();
            black_box(record);
        });
    });

    // the binary-search predicate: key bytes only, no allocation
    c.bench_function("compare_name_at", |b| {
        b.iter(|| {
            let ordering =
                compare_name_at(black_box("Person 00500"), &dataset.actor_bytes, actor_offset)
                    .unwrap();
            black_box(ordering);
        });
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
