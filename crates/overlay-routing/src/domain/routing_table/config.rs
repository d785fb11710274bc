//! Routing table constants.

/// Number of proximity buckets.
pub const NUM_BUCKETS: usize = 16;
