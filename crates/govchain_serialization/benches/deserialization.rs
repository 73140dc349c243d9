use alloy_primitives::Address;
use criterion::{Criterion, criterion_group, criterion_main};
use govchain_serialization::{Read, Write};
use std::hint::black_box;

fn bench(value: &[u8]) {
    let owners = Vec::<Address>::unpack(value).unwrap();
    black_box(owners);
}

fn criterion_benchmark(c: &mut Criterion) {
    let owners: Vec<Address> = (0..1000u64)
        .map(|i| Address::left_padding_from(&i.to_be_bytes()))
        .collect();
    let packed = owners.pack().unwrap();
    c.bench_function("unpack 1000 addresses", |b| b.iter(|| bench(black_box(&packed))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
