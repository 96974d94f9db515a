use criterion::{Criterion, criterion_group, criterion_main};
use nullscalar::{Nullable, Value};
use std::hint::black_box;

fn json(c: &mut Criterion) {
    let mut group = c.benchmark_group("json");
    group.bench_function("decode_i64", |b| {
        b.iter(|| {
            let mut n = Nullable::<i64>::default();
            n.unmarshal_json(black_box(b"-9223372036854775808")).unwrap();
            n
        })
    });
    group.bench_function("encode_u64", |b| {
        let n = Nullable::from_value(u64::MAX);
        b.iter(|| black_box(n).marshal_json())
    });
    group.finish();
}

fn driver(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver");
    group.bench_function("scan_text_u64", |b| {
        let raw = Value::Text("18446744073709551615".into());
        b.iter(|| {
            let mut n = Nullable::<u64>::default();
            n.scan(black_box(&raw)).unwrap();
            n
        })
    });
    group.bench_function("scan_integer_i32", |b| {
        let raw = Value::Integer(94101);
        b.iter(|| {
            let mut n = Nullable::<i32>::default();
            n.scan(black_box(&raw)).unwrap();
            n
        })
    });
    group.finish();
}

criterion_group!(benches, json, driver);
criterion_main!(benches);
