//! Main RoutingTable implementation.

use crate::domain::{
    bucket_index, Address, NodeKey, RequestHistory, RoutingEntry, RoutingError,
};

use super::bucket::Bucket;
use super::config::NUM_BUCKETS;

/// Bucketed map from keys to transport addresses.
///
/// Bucket selection is `bucket_index(local_key, key)`. The table itself does
/// not enforce one entry per address: callers check [`RoutingTable::contains_address`]
/// before [`RoutingTable::insert`].
#[derive(Debug, Clone)]
pub struct RoutingTable {
    /// Our own key (immutable after creation)
    local_key: NodeKey,
    /// Fixed set of proximity buckets
    buckets: Vec<Bucket>,
}

impl RoutingTable {
    /// Create an empty routing table owned by `local_key`.
    pub fn new(local_key: NodeKey) -> Self {
        Self {
            local_key,
            buckets: (0..NUM_BUCKETS).map(|_| Bucket::new()).collect(),
        }
    }

    /// Our local key.
    pub fn local_key(&self) -> &NodeKey {
        &self.local_key
    }

    /// Bucket index for `key` relative to the local key.
    pub fn bucket_index_for(&self, key: &NodeKey) -> usize {
        bucket_index(&self.local_key, key)
    }

    /// Get a reference to a bucket by index.
    pub fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.buckets.get(index)
    }

    /// Total entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    /// True if every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Bucket::is_empty)
    }

    /// Number of non-empty buckets.
    pub fn buckets_used(&self) -> usize {
        self.buckets.iter().filter(|b| !b.is_empty()).count()
    }

    /// All entries in bucket order, then insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &RoutingEntry> {
        self.buckets.iter().flat_map(|b| b.entries().iter())
    }

    /// Append `entry` to its bucket. Returns the bucket index used.
    pub fn insert(&mut self, entry: RoutingEntry) -> usize {
        let idx = self.bucket_index_for(entry.key());
        self.buckets[idx].push(entry);
        idx
    }

    /// True if the bucket selected by `key` holds an entry with `address`.
    ///
    /// `key` must be the derived key of `address`. Only the selected bucket
    /// is scanned.
    pub fn contains_address(&self, address: &Address, key: &NodeKey) -> bool {
        self.buckets[self.bucket_index_for(key)].contains_address(address)
    }

    /// True if an entry with exactly `key` is found.
    ///
    /// If the selected bucket is empty, the scan moves forward circularly to
    /// the first non-empty bucket and checks that one instead. This mirrors
    /// the deployed behavior for sparse tables; it can look at the wrong
    /// bucket, but a `true` answer always means the key is present.
    pub fn contains_key(&self, key: &NodeKey) -> bool {
        let start = self.bucket_index_for(key);
        self.first_non_empty_from(start)
            .is_some_and(|idx| self.buckets[idx].contains_key(key))
    }

    /// Address stored under exactly `key`, searching every bucket.
    pub fn get_dest(&self, key: &NodeKey) -> Result<&Address, RoutingError> {
        self.entries()
            .find(|e| e.key() == key)
            .map(RoutingEntry::address)
            .ok_or(RoutingError::NotFound(*key))
    }

    /// Closest known entry to `key`.
    ///
    /// Scans the bucket selected by `key` for the entry of minimal closeness
    /// rank, skipping keys in `exclude`. If that bucket yields nothing, the
    /// following buckets are probed circularly. Returns `None` only when no
    /// bucket has a usable entry.
    pub fn closest_to(
        &self,
        key: &NodeKey,
        exclude: Option<&RequestHistory>,
    ) -> Option<&RoutingEntry> {
        let start = self.bucket_index_for(key);
        (0..NUM_BUCKETS)
            .map(|offset| (start + offset) % NUM_BUCKETS)
            .find_map(|idx| self.buckets[idx].closest_to(key, exclude))
    }

    /// Next relay candidate for `target`, skipping keys in `exclude`.
    ///
    /// Walks buckets from the one selected by `target` up to the last bucket
    /// (no wrap-around) and returns the first bucket's best entry.
    pub fn next_closest(
        &self,
        target: &NodeKey,
        exclude: &RequestHistory,
    ) -> Option<&RoutingEntry> {
        let start = self.bucket_index_for(target);
        self.buckets[start..]
            .iter()
            .find_map(|bucket| bucket.closest_to(target, Some(exclude)))
    }

    fn first_non_empty_from(&self, start: usize) -> Option<usize> {
        (0..NUM_BUCKETS)
            .map(|offset| (start + offset) % NUM_BUCKETS)
            .find(|idx| !self.buckets[*idx].is_empty())
    }
}
