//! Domain Layer - Pure routing logic with no I/O
//!
//! This module contains the key-resolution core:
//! - Node keys, transport addresses and XOR/Hamming-weight closeness
//! - Routing table with proximity buckets
//! - Pending lookup tables and per-target request history
//! - Routing-control message codec

pub mod message;
pub mod routing_table;
pub mod services;
pub mod tracking;
/// Core domain types (entities, values, errors)
pub mod types;

pub use message::*;
pub use routing_table::*;
pub use services::*;
pub use tracking::*;
pub use types::*;
