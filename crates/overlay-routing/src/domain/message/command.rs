//! Command byte of a control message.

use std::fmt;

/// The four wire commands, plus anything else seen on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Resolve a target key.
    Get,
    /// The sender is the target.
    Found,
    /// The request cannot progress, or the command was not understood.
    Reject,
    /// A relayed GET was received.
    Accept,
    /// Unrecognized command byte.
    Unknown(u8),
}

impl Command {
    /// Wire byte for GET.
    pub const GET: u8 = b'G';
    /// Wire byte for FOUND.
    pub const FOUND: u8 = b'F';
    /// Wire byte for REJECT.
    pub const REJECT: u8 = b'X';
    /// Wire byte for ACCEPT.
    pub const ACCEPT: u8 = b'A';

    /// Decode a command byte. Never fails: unknown bytes are kept.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            Self::GET => Self::Get,
            Self::FOUND => Self::Found,
            Self::REJECT => Self::Reject,
            Self::ACCEPT => Self::Accept,
            other => Self::Unknown(other),
        }
    }

    /// Encode to the wire byte.
    pub fn to_byte(self) -> u8 {
        match self {
            Self::Get => Self::GET,
            Self::Found => Self::FOUND,
            Self::Reject => Self::REJECT,
            Self::Accept => Self::ACCEPT,
            Self::Unknown(byte) => byte,
        }
    }

    /// True for FOUND, REJECT and ACCEPT.
    pub fn is_reply(self) -> bool {
        matches!(self, Self::Found | Self::Reject | Self::Accept)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Found => write!(f, "FOUND"),
            Self::Reject => write!(f, "REJECT"),
            Self::Accept => write!(f, "ACCEPT"),
            Self::Unknown(byte) => write!(f, "UNKNOWN({:#04x})", byte),
        }
    }
}
