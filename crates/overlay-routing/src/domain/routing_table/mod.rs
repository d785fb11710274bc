//! Routing Table Implementation
//!
//! A fixed array of proximity buckets, each an unbounded list of
//! `(key, address)` entries. There is no capacity bound, no eviction and no
//! liveness tracking: memory grows with every distinct address learned.

mod bucket;
mod config;
mod table;

pub use bucket::Bucket;
pub use config::NUM_BUCKETS;
pub use table::RoutingTable;
