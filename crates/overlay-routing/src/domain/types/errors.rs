//! Domain Errors for the Overlay Routing Engine
//!
//! Routing-protocol conditions (unwarranted replies, spoofing, no progress)
//! are not errors: they are reported as a `Disposition` and logged. The
//! types here cover the few operations that do fail towards the caller.

use thiserror::Error;

use super::entities::NodeKey;

/// Errors surfaced by engine operations.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// No routing entry has exactly this key.
    #[error("no routing entry for key {0}")]
    NotFound(NodeKey),

    /// Every bucket is empty; there is nobody to ask.
    #[error("routing table is empty")]
    EmptyTable,

    /// The send capability refused a message.
    #[error("transport error: {0}")]
    Transport(#[from] SendError),

    /// Reading or writing the known-peer list failed.
    #[error("peer store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from decoding a routing-control message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Fewer bytes than the fixed header (marker, command, target key).
    #[error("control message too short: {len} bytes")]
    TooShort {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// Byte 0 is not the overlay marker; this is a tunnelled IP packet.
    #[error("not a routing-control packet (marker {marker:#04x})")]
    NotControl {
        /// The marker byte found.
        marker: u8,
    },
}

/// Errors from the send capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    /// The transport would block; the datagram was not queued.
    #[error("transport would block")]
    WouldBlock,

    /// The destination is not usable by the transport.
    #[error("invalid destination address")]
    InvalidAddress,

    /// Message exceeds what the transport can carry.
    #[error("message too large: {0} bytes")]
    MessageTooLarge(usize),

    /// Any other I/O failure.
    #[error("send failed: {0}")]
    Io(String),
}

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Path of the peer file.
        path: String,
        /// The I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors from loading engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the config file.
        path: String,
        /// The I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid.
    #[error("failed to parse config: {0}")]
    Parse(String),
}
