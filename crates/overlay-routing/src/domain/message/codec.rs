//! Encoding and decoding of control messages.

use crate::domain::{Address, CodecError, NodeKey, KEY_LEN};

use super::command::Command;

/// Marker byte identifying a routing-control datagram.
pub const OVERLAY_MARKER: u8 = 0x00;

/// Marker, command and target key.
pub const HEADER_LEN: usize = 2 + KEY_LEN;

/// A decoded routing-control message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlMessage {
    /// What the sender wants.
    pub command: Command,
    /// Key being resolved.
    pub target: NodeKey,
    /// Where the final FOUND goes. Empty if the sender omitted it.
    pub reply_to: Address,
}

impl ControlMessage {
    /// Build a message.
    pub fn new(command: Command, target: NodeKey, reply_to: Address) -> Self {
        Self {
            command,
            target,
            reply_to,
        }
    }

    /// GET for `target`, answers to go to `reply_to`.
    pub fn get(target: NodeKey, reply_to: Address) -> Self {
        Self::new(Command::Get, target, reply_to)
    }

    /// Decode a datagram.
    ///
    /// # Errors
    ///
    /// - [`CodecError::TooShort`] if the buffer is shorter than [`HEADER_LEN`]
    /// - [`CodecError::NotControl`] if byte 0 is not [`OVERLAY_MARKER`]
    pub fn parse(buf: &[u8]) -> Result<Self, CodecError> {
        if buf.len() < HEADER_LEN {
            return Err(CodecError::TooShort { len: buf.len() });
        }
        if buf[0] != OVERLAY_MARKER {
            return Err(CodecError::NotControl { marker: buf[0] });
        }
        let target = NodeKey::from_slice(&buf[2..HEADER_LEN])
            .ok_or(CodecError::TooShort { len: buf.len() })?;

        Ok(Self {
            command: Command::from_byte(buf[1]),
            target,
            reply_to: Address::from(&buf[HEADER_LEN..]),
        })
    }

    /// Encode to wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.reply_to.len());
        out.push(OVERLAY_MARKER);
        out.push(self.command.to_byte());
        out.extend_from_slice(self.target.as_bytes());
        out.extend_from_slice(self.reply_to.as_bytes());
        out
    }

    /// Same message with another command byte.
    pub fn with_command(&self, command: Command) -> Self {
        Self {
            command,
            ..self.clone()
        }
    }
}
