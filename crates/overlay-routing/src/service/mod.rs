//! # Routing Engine Service
//!
//! The owned engine instance implementing the `RoutingEngineApi` port. It
//! wires the domain tables to the driven ports: the send capability is
//! passed per call, key derivation is injected at construction, and peer
//! persistence goes through a `PeerStore`.
//!
//! There is no internal locking. One event loop owns the engine and feeds
//! it datagrams and lookups one at a time.

// Semantic submodules
mod api;
mod core;
mod ingress;
mod lookup;
mod persistence;
mod protocol;

// Re-export public API
pub use core::RoutingEngine;
