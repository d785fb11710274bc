//! # Adapters
//!
//! Concrete implementations of the driven ports.
//!
//! - `I2pKeyDeriver` - SHA-256 over the decoded I2P destination
//! - `FilePeerStore` - one address per line in `nodes.txt`
//! - `StaticConfigProvider` - hardcoded config
//! - `TomlConfigProvider` - config file loading (requires "network" feature)
//! - `SamDatagramSender` - SAM v3 UDP datagrams (requires "network" feature)

/// Configuration providers
pub mod config;
/// Key derivation
pub mod derivation;
/// SAM datagram framing and sender
pub mod sam;
/// Peer persistence
pub mod store;

// Re-export public API
pub use config::StaticConfigProvider;
pub use derivation::{I2pKeyDeriver, KEY_PREFIX};
pub use sam::{sam_send_header, split_sam_datagram};
pub use store::{FilePeerStore, DEFAULT_NODES_FILE};

#[cfg(feature = "network")]
pub use config::{SamSettings, TomlConfigProvider, DEFAULT_SAM_SESSION, DEFAULT_SAM_UDP_ADDRESS};

#[cfg(feature = "network")]
pub use sam::{SamDatagramSender, MAX_SAM_DATAGRAM};
