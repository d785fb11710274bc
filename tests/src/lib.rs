//! # Overlay Routing Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmark bodies
//! ├── integration/      # Multi-node lookup flows, config and persistence
//! └── support.rs        # In-memory datagram network of engines
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p overlay-tests
//!
//! # With engine logs
//! RUST_LOG=overlay_routing=debug cargo test -p overlay-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p overlay-tests
//! ```

#![allow(dead_code)]

pub mod benchmarks;
