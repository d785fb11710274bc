//! # Overlay Routing
//!
//! Key-resolution engine for an anonymity-network IPv6 overlay tunnel.
//!
//! Every transport destination (an I2P destination) is hashed onto a flat
//! 128-bit key space; the key doubles as the tunnel's IPv6 address for that
//! destination. When the tunnel needs to reach a key it does not know, the
//! engine resolves it with a Kademlia-flavored lookup: GET queries are relayed
//! hop by hop towards the owner, which answers the original requester with
//! FOUND. REJECT drives fallback to the next candidate; ACCEPT acknowledges a
//! relayed GET.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** keys, Hamming-weight closeness, bucket table, pending
//!   tables, request history, wire codec
//! - **Ports Layer:** the engine API and the driven traits (send capability,
//!   key derivation, peer store, config)
//! - **Service Layer:** `RoutingEngine`, one owned instance per node
//! - **Adapters Layer:** I2P key derivation, flat-file peer store, config
//!   providers, SAM datagram framing
//!
//! ## Feature Flags
//!
//! - `network` - `TomlConfigProvider` and the UDP `SamDatagramSender`
//! - `test-utils` - `RecordingSender`, `FailingSender`, `TableDeriver`
//!
//! ## Example
//!
//! ```rust
//! use overlay_routing::{
//!     Address, EngineConfig, FindOutcome, I2pKeyDeriver, KeyDeriver, RoutingEngine, SendError,
//! };
//!
//! let mut engine = RoutingEngine::new(
//!     Address::from("dest-A"),
//!     EngineConfig::default(),
//!     Box::new(I2pKeyDeriver::new()),
//! );
//! assert!(engine.put(Address::from("dest-B")));
//! assert!(engine.known_dest(&Address::from("dest-B")));
//!
//! let send = |_to: &Address, payload: &[u8]| -> Result<usize, SendError> { Ok(payload.len()) };
//! let target = I2pKeyDeriver::new().derive(&Address::from("dest-Z"));
//!
//! match engine.find(target, &send).unwrap() {
//!     FindOutcome::Sent { peer } => println!("asked {}", peer),
//!     FindOutcome::NoRoute => println!("no closer peer known"),
//! }
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// =============================================================================
// FEATURE-GATED MODULES
// =============================================================================

/// Test doubles for the driven ports.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

// Domain entities and values
pub use domain::{
    Address, Bucket, CodecError, Command, ConfigError, ControlMessage, Disposition, Distance,
    EngineConfig, EngineStats, FindOutcome, Ingress, NodeKey, PendingRequest, PendingTable,
    RelaySelection, RequestHistories, RequestHistory, RouteOutcome, RoutingEntry, RoutingError,
    RoutingTable, SendError, StoreError, HEADER_LEN, KEY_BITS, KEY_LEN, NUM_BUCKETS,
    OVERLAY_MARKER,
};

// Domain services
pub use domain::{bucket_index, closeness_rank, xor_distance};

// Port traits
pub use ports::{ConfigProvider, KeyDeriver, MessageSender, PeerStore, RoutingEngineApi};

// Service
pub use service::RoutingEngine;

// Adapters
pub use adapters::{
    sam_send_header, split_sam_datagram, FilePeerStore, I2pKeyDeriver, StaticConfigProvider,
};

#[cfg(feature = "network")]
pub use adapters::{SamDatagramSender, TomlConfigProvider};
