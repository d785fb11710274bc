//! Test utilities for the routing engine.
//!
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use overlay_routing::test_utils::{RecordingSender, TableDeriver};
//!
//! let sender = RecordingSender::new();
//! engine.find(target, &sender)?;
//! assert_eq!(sender.sent().len(), 1);
//! ```

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::{Address, Command, ControlMessage, NodeKey, SendError};
use crate::ports::{KeyDeriver, MessageSender};

/// One datagram captured by [`RecordingSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentDatagram {
    /// Destination.
    pub to: Address,
    /// Raw bytes.
    pub payload: Vec<u8>,
}

impl SentDatagram {
    /// Decode the payload as a control message.
    pub fn message(&self) -> Option<ControlMessage> {
        ControlMessage::parse(&self.payload).ok()
    }

    /// Command byte of the payload, if it is a control message.
    pub fn command(&self) -> Option<Command> {
        self.message().map(|m| m.command)
    }
}

/// `MessageSender` that records every datagram and reports success.
#[derive(Debug, Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<SentDatagram>>,
}

impl RecordingSender {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, in order.
    pub fn sent(&self) -> Vec<SentDatagram> {
        self.sent.lock().clone()
    }

    /// `(destination, command)` pairs of everything sent so far.
    pub fn commands(&self) -> Vec<(Address, Option<Command>)> {
        self.sent
            .lock()
            .iter()
            .map(|d| (d.to.clone(), d.command()))
            .collect()
    }

    /// Remove and return everything sent so far.
    pub fn take(&self) -> Vec<SentDatagram> {
        std::mem::take(&mut *self.sent.lock())
    }

    /// True if nothing was sent.
    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }
}

impl MessageSender for RecordingSender {
    fn send(&self, to: &Address, payload: &[u8]) -> Result<usize, SendError> {
        self.sent.lock().push(SentDatagram {
            to: to.clone(),
            payload: payload.to_vec(),
        });
        Ok(payload.len())
    }
}

/// `MessageSender` that refuses every datagram.
#[derive(Debug, Clone)]
pub struct FailingSender {
    error: SendError,
}

impl FailingSender {
    /// Fail every send with `error`.
    pub fn new(error: SendError) -> Self {
        Self { error }
    }
}

impl Default for FailingSender {
    fn default() -> Self {
        Self::new(SendError::WouldBlock)
    }
}

impl MessageSender for FailingSender {
    fn send(&self, _to: &Address, _payload: &[u8]) -> Result<usize, SendError> {
        Err(self.error.clone())
    }
}

/// `KeyDeriver` with hand-picked keys, for building exact table layouts.
///
/// Addresses without an assigned key fall back to `fallback`.
pub struct TableDeriver {
    keys: HashMap<Address, NodeKey>,
    fallback: Box<dyn KeyDeriver>,
}

impl TableDeriver {
    /// Assign keys explicitly; everything else goes through `fallback`.
    pub fn new(fallback: Box<dyn KeyDeriver>) -> Self {
        Self {
            keys: HashMap::new(),
            fallback,
        }
    }

    /// Map `address` to `key`.
    #[must_use]
    pub fn with_key(mut self, address: impl Into<Address>, key: NodeKey) -> Self {
        self.keys.insert(address.into(), key);
        self
    }
}

impl KeyDeriver for TableDeriver {
    fn derive(&self, address: &Address) -> NodeKey {
        self.keys
            .get(address)
            .copied()
            .unwrap_or_else(|| self.fallback.derive(address))
    }
}
