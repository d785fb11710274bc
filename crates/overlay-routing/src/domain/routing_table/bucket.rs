//! Proximity bucket.

use crate::domain::{closeness_rank, Address, NodeKey, RequestHistory, RoutingEntry};

/// One slice of the routing table.
///
/// Entries keep insertion order; lookups are linear scans.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    pub(crate) entries: Vec<RoutingEntry>,
}

impl Bucket {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries in this bucket.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[RoutingEntry] {
        &self.entries
    }

    /// Append an entry. Duplicates are not checked here.
    pub(crate) fn push(&mut self, entry: RoutingEntry) {
        self.entries.push(entry);
    }

    /// True if some entry has exactly this key.
    pub fn contains_key(&self, key: &NodeKey) -> bool {
        self.entries.iter().any(|e| e.key() == key)
    }

    /// True if some entry has exactly this address.
    pub fn contains_address(&self, address: &Address) -> bool {
        self.entries.iter().any(|e| e.address() == address)
    }

    /// Entry with the lowest closeness rank to `key`, skipping entries whose
    /// key is in `exclude`. Ties go to the earliest inserted entry.
    pub fn closest_to(
        &self,
        key: &NodeKey,
        exclude: Option<&RequestHistory>,
    ) -> Option<&RoutingEntry> {
        let mut best: Option<(u32, &RoutingEntry)> = None;
        for entry in &self.entries {
            if exclude.is_some_and(|h| h.contains(entry.key())) {
                continue;
            }
            let rank = closeness_rank(entry.key(), key);
            match best {
                Some((best_rank, _)) if best_rank <= rank => {}
                _ => best = Some((rank, entry)),
            }
        }
        best.map(|(_, entry)| entry)
    }
}
