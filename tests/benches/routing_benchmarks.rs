//! # Overlay Routing Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | Distance | XOR, Hamming rank, bucket index |
//! | Routing table | closest, next-closest with history, containment |
//! | Key derivation | base64 decode + SHA-256 |
//! | Control path | codec, GET handling on a 1000-peer engine |

use criterion::{criterion_group, criterion_main};

use overlay_tests::benchmarks::{protocol, routing};

criterion_group!(
    benches,
    routing::bench_distance,
    routing::bench_closest,
    routing::bench_key_derivation,
    protocol::bench_codec,
    protocol::bench_handle_get,
);

criterion_main!(benches);
