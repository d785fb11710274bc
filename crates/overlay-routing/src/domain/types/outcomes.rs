//! Results of engine operations
//!
//! Routing-protocol conditions are reported as values, not errors: the
//! caller (usually an event loop) logs or counts them and carries on.

use super::entities::{Address, NodeKey};
use super::errors::CodecError;
use crate::domain::Command;

/// What `handle_data` did with one control message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Too short or not a control message. Nothing sent, nothing changed.
    Malformed(CodecError),

    /// We are the GET target: ACCEPT to the sender, FOUND to the reply-to.
    Answered,

    /// The GET target is known: ACCEPT to the sender, GET forwarded to it.
    Forwarded {
        /// Address of the target.
        peer: Address,
    },

    /// The GET target is unknown: ACCEPT to the sender, GET relayed onward.
    Relayed {
        /// Next hop.
        peer: Address,
    },

    /// The closest known entry is ourselves: REJECT sent to the sender.
    NoProgress,

    /// Unrecognized command byte: REJECT echoed to the sender.
    UnknownCommand(u8),

    /// FOUND from the target itself; it is now in the routing table.
    Resolved {
        /// Key that was looked up.
        key: NodeKey,
    },

    /// FOUND whose sender is not the claimed target. Pending entry kept.
    Spoofed {
        /// Target the message claims.
        claimed: NodeKey,
        /// Key derived from the actual sender.
        actual: NodeKey,
    },

    /// REJECT received; GET re-sent to the next candidate.
    Retried {
        /// The new candidate.
        peer: Address,
    },

    /// REJECT received for our own lookup with no candidates left.
    Abandoned,

    /// REJECT received for a relayed lookup with no candidates left;
    /// REJECT passed back to whoever asked us.
    RejectPropagated {
        /// The peer that handed us the GET.
        requester: Address,
    },

    /// ACCEPT matched a pending lookup, which is now cleared.
    Acknowledged,

    /// A reply with no matching pending lookup.
    Unwarranted {
        /// The reply's command.
        command: Command,
    },
}

impl Disposition {
    /// True if the message changed no state and sent nothing.
    pub fn is_drop(&self) -> bool {
        matches!(
            self,
            Self::Malformed(_) | Self::Unwarranted { .. } | Self::Spoofed { .. }
        )
    }
}

/// What `find` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    /// GET sent to the closest known peer.
    Sent {
        /// Who was asked.
        peer: Address,
    },
    /// The closest known entry is ourselves; nobody to ask.
    NoRoute,
}

/// Classification of a received datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingress {
    /// Routing-control message, handled by the engine.
    Control(Disposition),
    /// Tunnelled IP packet for the caller to inject.
    Packet,
    /// Empty datagram.
    Dropped,
}

/// What `route` did with an outbound packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The target is known; the packet went straight to it.
    Delivered {
        /// Bytes the transport reported sent.
        bytes: usize,
    },
    /// The target is unknown; a lookup was started instead.
    Lookup(FindOutcome),
}

/// Snapshot of engine table sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Routing entries, including our own.
    pub known_entries: usize,
    /// Non-empty buckets.
    pub buckets_used: usize,
    /// Lookups we started that are still open.
    pub local_pending: usize,
    /// Lookups we relay that are still open.
    pub remote_pending: usize,
    /// Targets with a request history.
    pub tracked_targets: usize,
}
