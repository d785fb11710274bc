//! Table maintenance and self-initiated lookups.

use tracing::{debug, info};

use crate::domain::{
    Address, ControlMessage, FindOutcome, NodeKey, PendingRequest, RoutingEntry, RoutingError,
};
use crate::ports::MessageSender;
use crate::service::RoutingEngine;

impl RoutingEngine {
    /// Learn `address`. Returns `false` if it was already known.
    pub fn put(&mut self, address: Address) -> bool {
        let key = self.deriver.derive(&address);
        if self.table.contains_address(&address, &key) {
            debug!(peer = %address, "address already known");
            return false;
        }
        let bucket = self.table.insert(RoutingEntry::new(key, address));
        debug!(key = %key, bucket, "routing entry added");
        true
    }

    /// True if `address` is in the routing table.
    pub fn known_dest(&self, address: &Address) -> bool {
        let key = self.deriver.derive(address);
        self.table.contains_address(address, &key)
    }

    /// True if an entry with exactly `key` is in the routing table.
    pub fn known_addr(&self, key: &NodeKey) -> bool {
        self.table.contains_key(key)
    }

    /// Address stored under exactly `key`.
    pub fn get_dest(&self, key: &NodeKey) -> Result<&Address, RoutingError> {
        self.table.get_dest(key)
    }

    /// Ask the closest known peer to resolve `target`.
    ///
    /// The GET carries our own address as reply-to. On success the lookup is
    /// recorded in the local pending table and the asked peer in the
    /// target's request history.
    pub fn find(
        &mut self,
        target: NodeKey,
        send: &dyn MessageSender,
    ) -> Result<FindOutcome, RoutingError> {
        let closest = self
            .table
            .closest_to(&target, None)
            .ok_or(RoutingError::EmptyTable)?;

        if closest.key() == &self.local_key {
            info!(target = %target, "no closer peer to ask, lookup not started");
            return Ok(FindOutcome::NoRoute);
        }

        let peer = closest.clone();
        let message = ControlMessage::get(target, self.local_address.clone());
        send.send(peer.address(), &message.encode())?;

        self.local_pending.insert(PendingRequest::new(
            self.local_address.clone(),
            target,
            self.local_address.clone(),
        ));
        self.histories.for_target(target).record(*peer.key());
        info!(target = %target, peer = %peer.key(), "lookup started");

        Ok(FindOutcome::Sent {
            peer: peer.address().clone(),
        })
    }
}
