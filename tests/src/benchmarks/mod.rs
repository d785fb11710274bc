//! # Overlay Routing Benchmarks
//!
//! Bodies for `benches/routing_benchmarks.rs`, one module per concern.

pub mod routing;
