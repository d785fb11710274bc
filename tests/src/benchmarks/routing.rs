//! # Routing Table Benchmarks
//!
//! Hot paths on every outbound packet and every relayed GET:
//! - XOR distance and Hamming-weight rank
//! - Bucket selection
//! - Closest-entry scan on a crowded table
//! - Key derivation from a base64 destination

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::time::Duration;

use overlay_routing::{
    bucket_index, closeness_rank, xor_distance, Address, I2pKeyDeriver, KeyDeriver, NodeKey,
    RequestHistory, RoutingEntry, RoutingTable, KEY_LEN,
};

fn random_key(rng: &mut impl Rng) -> NodeKey {
    let mut bytes = [0u8; KEY_LEN];
    rng.fill(&mut bytes);
    NodeKey::new(bytes)
}

/// Table with `size` random entries around a random local key.
fn populated_table(size: usize) -> RoutingTable {
    let mut rng = rand::thread_rng();
    let mut table = RoutingTable::new(random_key(&mut rng));
    for i in 0..size {
        table.insert(RoutingEntry::new(
            random_key(&mut rng),
            Address::from(format!("peer-{i}")),
        ));
    }
    table
}

pub fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing/distance");
    group.measurement_time(Duration::from_secs(5));

    let mut rng = rand::thread_rng();
    let a = random_key(&mut rng);
    let b = random_key(&mut rng);

    group.bench_function("xor_distance", |bench| {
        bench.iter(|| black_box(xor_distance(black_box(&a), black_box(&b))))
    });
    group.bench_function("closeness_rank", |bench| {
        bench.iter(|| black_box(closeness_rank(black_box(&a), black_box(&b))))
    });
    group.bench_function("bucket_index", |bench| {
        bench.iter(|| black_box(bucket_index(black_box(&a), black_box(&b))))
    });

    group.finish();
}

pub fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing/closest");
    group.measurement_time(Duration::from_secs(10));

    for size in [100usize, 1_000, 10_000] {
        let table = populated_table(size);
        let target = random_key(&mut rand::thread_rng());

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("closest_to", size), &table, |b, table| {
            b.iter(|| black_box(table.closest_to(black_box(&target), None)))
        });

        // Half the table already asked
        let mut history = RequestHistory::new();
        for entry in table.entries().step_by(2) {
            history.record(*entry.key());
        }
        group.bench_with_input(
            BenchmarkId::new("next_closest_with_history", size),
            &table,
            |b, table| b.iter(|| black_box(table.next_closest(black_box(&target), &history))),
        );

        group.bench_with_input(BenchmarkId::new("contains_key", size), &table, |b, table| {
            b.iter(|| black_box(table.contains_key(black_box(&target))))
        });
    }

    group.finish();
}

pub fn bench_key_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing/key_derivation");

    let deriver = I2pKeyDeriver::new();
    // Typical destination: 387 raw bytes
    let mut raw = vec![0u8; 387];
    rand::thread_rng().fill(raw.as_mut_slice());
    let destination = I2pKeyDeriver::encode_destination(&raw);

    group.throughput(Throughput::Bytes(destination.len() as u64));
    group.bench_function("derive_from_destination", |b| {
        b.iter(|| black_box(deriver.derive(black_box(&destination))))
    });

    group.finish();
}
