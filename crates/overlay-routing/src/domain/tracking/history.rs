//! Per-target record of peers already queried.

use std::collections::HashMap;

use crate::domain::NodeKey;

/// Keys already tried in pursuit of one target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHistory {
    tried: Vec<NodeKey>,
}

impl RequestHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember that `key` was tried. Returns `false` if already recorded.
    pub fn record(&mut self, key: NodeKey) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.tried.push(key);
        true
    }

    /// True if `key` was already tried.
    pub fn contains(&self, key: &NodeKey) -> bool {
        self.tried.contains(key)
    }

    /// Number of peers tried.
    pub fn len(&self) -> usize {
        self.tried.len()
    }

    /// True if nobody was tried yet.
    pub fn is_empty(&self) -> bool {
        self.tried.is_empty()
    }

    /// Tried keys in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &NodeKey> {
        self.tried.iter()
    }
}

/// Histories for every target looked up so far.
#[derive(Debug, Clone, Default)]
pub struct RequestHistories {
    by_target: HashMap<NodeKey, RequestHistory>,
}

impl RequestHistories {
    /// Create an empty set of histories.
    pub fn new() -> Self {
        Self::default()
    }

    /// History for `target`, created empty on first use.
    pub fn for_target(&mut self, target: NodeKey) -> &mut RequestHistory {
        self.by_target.entry(target).or_default()
    }

    /// History for `target` if one exists.
    pub fn get(&self, target: &NodeKey) -> Option<&RequestHistory> {
        self.by_target.get(target)
    }

    /// Number of targets with a history.
    pub fn len(&self) -> usize {
        self.by_target.len()
    }

    /// True if no target has been looked up.
    pub fn is_empty(&self) -> bool {
        self.by_target.is_empty()
    }
}
