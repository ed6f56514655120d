//! Benchmarks for the varint engine and the framed payload paths.
//!
//! Covers the three cost classes: single-byte writes, multi-byte varints
//! across the full threshold ladder, and length-prefixed bulk copies.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tinywire::{Decoder, Encoder, size};

/// One value per varint length, 1 through 10 bytes.
const LADDER: [u64; 10] = [
    0x7F,
    0x3FFF,
    0x1F_FFFF,
    0xFFF_FFFF,
    0x7_FFFF_FFFF,
    0x3FF_FFFF_FFFF,
    0x1_FFFF_FFFF_FFFF,
    0xFF_FFFF_FFFF_FFFF,
    0x7FFF_FFFF_FFFF_FFFF,
    u64::MAX,
];

fn bench_varint_encode(c: &mut Criterion) {
    let mut buf = [0u8; 128];
    c.bench_function("encode_u64_ladder", |b| {
        b.iter(|| {
            let mut enc = Encoder::new(&mut buf);
            for v in LADDER {
                enc.encode_u64(black_box(v)).unwrap();
            }
            black_box(enc.position())
        });
    });

    c.bench_function("encode_i64_ladder", |b| {
        b.iter(|| {
            let mut enc = Encoder::new(&mut buf);
            for v in LADDER {
                enc.encode_i64(black_box(v as i64)).unwrap();
            }
            black_box(enc.position())
        });
    });
}

fn bench_varint_decode(c: &mut Criterion) {
    let mut buf = [0u8; 128];
    let mut enc = Encoder::new(&mut buf);
    for v in LADDER {
        enc.encode_u64(v).unwrap();
    }
    let encoded = enc.as_slice().to_vec();

    c.bench_function("decode_u64_ladder", |b| {
        b.iter(|| {
            let mut dec = Decoder::new(black_box(&encoded));
            for _ in 0..LADDER.len() {
                black_box(dec.decode_u64().unwrap());
            }
        });
    });
}

fn bench_byte_arrays(c: &mut Criterion) {
    let payload = vec![0x5Au8; 1024];
    let mut buf = vec![0u8; 2048];

    c.bench_function("encode_byte_array_1k", |b| {
        b.iter(|| {
            let mut enc = Encoder::new(&mut buf);
            enc.encode_byte_array(black_box(&payload)).unwrap();
            black_box(enc.position())
        });
    });

    let mut enc = Encoder::new(&mut buf);
    enc.encode_byte_array(&payload).unwrap();
    let encoded = enc.as_slice().to_vec();
    let mut dest = vec![0u8; 1024];

    c.bench_function("decode_byte_array_1k", |b| {
        b.iter(|| {
            let mut dec = Decoder::new(black_box(&encoded));
            let len = dec.decode_byte_array_len().unwrap();
            dec.decode_byte_array(&mut dest, len).unwrap();
            black_box(dest[0])
        });
    });
}

fn bench_size_calculators(c: &mut Criterion) {
    c.bench_function("size_u64_ladder", |b| {
        b.iter(|| {
            let mut total = 0;
            for v in LADDER {
                total += size::size_u64(black_box(v));
            }
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_varint_encode,
    bench_varint_decode,
    bench_byte_arrays,
    bench_size_calculators
);
criterion_main!(benches);
