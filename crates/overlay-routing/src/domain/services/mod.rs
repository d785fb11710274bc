//! Domain Services - Pure functions over the key space
//!
//! All functions in this module are pure (no I/O, no state mutation)
//! and deterministic (same inputs → same outputs).

mod distance;

pub use distance::{bucket_index, closeness_rank, xor_distance};
