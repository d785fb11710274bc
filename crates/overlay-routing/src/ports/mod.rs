//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** the engine API a packet-forwarding loop calls
//! - **Driven Ports (Outbound):** what the host supplies: a send capability,
//!   address-to-key derivation, peer persistence and configuration

pub mod inbound;
pub mod outbound;

pub use inbound::RoutingEngineApi;
pub use outbound::{ConfigProvider, KeyDeriver, MessageSender, PeerStore, SendError, StoreError};
