//! In-flight lookup tables.

use crate::domain::{Address, NodeKey};

/// One outstanding lookup.
///
/// For lookups this node started, `requester` and `reply_to` are both the
/// local address. For relayed lookups, `requester` is the peer that handed us
/// the GET and `reply_to` is the address embedded in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingRequest {
    /// Who is waiting on this node for an outcome.
    pub requester: Address,
    /// Key being resolved.
    pub target: NodeKey,
    /// Where the final FOUND is to be delivered.
    pub reply_to: Address,
}

impl PendingRequest {
    /// Create a pending request record.
    pub fn new(requester: Address, target: NodeKey, reply_to: Address) -> Self {
        Self {
            requester,
            target,
            reply_to,
        }
    }

    /// True if this request is for `target` on behalf of `reply_to`.
    pub fn matches(&self, target: &NodeKey, reply_to: &Address) -> bool {
        &self.target == target && &self.reply_to == reply_to
    }
}

/// Insertion-ordered set of pending requests.
#[derive(Debug, Clone, Default)]
pub struct PendingTable {
    requests: Vec<PendingRequest>,
}

impl PendingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request. Returns `false` if the exact request is already
    /// recorded.
    pub fn insert(&mut self, request: PendingRequest) -> bool {
        if self.contains(&request) {
            return false;
        }
        self.requests.push(request);
        true
    }

    /// Exact-match membership by `(requester, target, reply_to)`.
    pub fn contains(&self, request: &PendingRequest) -> bool {
        self.requests.iter().any(|r| r == request)
    }

    /// First request for `target` on behalf of `reply_to`.
    ///
    /// Replies echo target and reply-to but not the original requester, so
    /// this is how incoming FOUND/REJECT/ACCEPT messages are matched.
    pub fn find(&self, target: &NodeKey, reply_to: &Address) -> Option<&PendingRequest> {
        self.requests.iter().find(|r| r.matches(target, reply_to))
    }

    /// Remove the exact request. Returns `true` if it was present.
    pub fn remove(&mut self, request: &PendingRequest) -> bool {
        match self.requests.iter().position(|r| r == request) {
            Some(pos) => {
                self.requests.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove and return the first request matching `target` / `reply_to`.
    pub fn take(&mut self, target: &NodeKey, reply_to: &Address) -> Option<PendingRequest> {
        self.requests
            .iter()
            .position(|r| r.matches(target, reply_to))
            .map(|pos| self.requests.remove(pos))
    }

    /// Number of outstanding requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// True if nothing is outstanding.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Outstanding requests in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PendingRequest> {
        self.requests.iter()
    }
}
