//! Routing-control message codec
//!
//! Wire layout (bit-exact):
//!
//! | Offset   | Field                                         |
//! |----------|-----------------------------------------------|
//! | 0        | overlay marker, `0x00` for control messages   |
//! | 1        | command byte (`G`, `F`, `X`, `A`)             |
//! | 2..18    | target key, 16 raw bytes                      |
//! | 18..     | reply-to address, rest of the datagram        |
//!
//! Replies reuse the layout of the GET they answer with only the command
//! byte changed, so the `(target, reply_to)` pair can be matched against the
//! pending tables.

mod codec;
mod command;

pub use codec::{ControlMessage, HEADER_LEN, OVERLAY_MARKER};
pub use command::Command;
