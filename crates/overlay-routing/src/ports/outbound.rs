//! # Driven Ports (Outbound SPI)
//!
//! Interfaces the host application implements for the engine.

use std::path::PathBuf;

use crate::domain::{Address, EngineConfig, NodeKey};

pub use crate::domain::{SendError, StoreError};

/// Send capability: deliver one datagram to a transport address.
///
/// Called synchronously from inside engine operations, possibly more than
/// once per call. Implementations should not block for long.
///
/// Any `Fn(&Address, &[u8]) -> Result<usize, SendError>` closure that is
/// `Send + Sync` is a `MessageSender`.
pub trait MessageSender: Send + Sync {
    /// Send `payload` to `to`. Returns the number of bytes sent.
    fn send(&self, to: &Address, payload: &[u8]) -> Result<usize, SendError>;
}

impl<F> MessageSender for F
where
    F: Fn(&Address, &[u8]) -> Result<usize, SendError> + Send + Sync,
{
    fn send(&self, to: &Address, payload: &[u8]) -> Result<usize, SendError> {
        self(to, payload)
    }
}

/// One-way, deterministic address-to-key derivation.
pub trait KeyDeriver: Send + Sync {
    /// Key for `address`. Must return the same key for equal addresses.
    fn derive(&self, address: &Address) -> NodeKey;
}

/// Best-effort storage of known peer addresses.
pub trait PeerStore: Send + Sync {
    /// Load stored addresses. A missing store loads as empty.
    fn load(&self) -> Result<Vec<Address>, StoreError>;

    /// Replace the stored addresses.
    fn save(&self, addresses: &[Address]) -> Result<(), StoreError>;
}

/// Abstract interface for configuration loading.
pub trait ConfigProvider: Send + Sync {
    /// Peers to learn at startup.
    fn bootstrap_peers(&self) -> Vec<Address>;

    /// Engine tuning.
    fn engine_config(&self) -> EngineConfig;

    /// Where known peers are persisted.
    fn nodes_file(&self) -> PathBuf;
}
