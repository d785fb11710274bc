//! SAM v3 repliable-datagram framing.
//!
//! Received datagrams start with a header line whose first token is the
//! sender's destination. Outbound datagrams are prefixed with
//! `"3.0 <session> <destination>\n"` and sent to the bridge's UDP port.

use crate::domain::Address;

/// Split a received SAM datagram into sender and payload.
///
/// Returns `None` if there is no header line or the sender is empty.
pub fn split_sam_datagram(buf: &[u8]) -> Option<(Address, &[u8])> {
    let newline = buf.iter().position(|b| *b == b'\n')?;
    let header = &buf[..newline];
    let sender = header.split(|b| *b == b' ').next()?;
    if sender.is_empty() {
        return None;
    }
    Some((Address::from(sender), &buf[newline + 1..]))
}

/// Header prefixed to every datagram sent through the bridge.
pub fn sam_send_header(session: &str, destination: &Address) -> Vec<u8> {
    let mut header = Vec::with_capacity(session.len() + destination.len() + 6);
    header.extend_from_slice(b"3.0 ");
    header.extend_from_slice(session.as_bytes());
    header.push(b' ');
    header.extend_from_slice(destination.as_bytes());
    header.push(b'\n');
    header
}

#[cfg(feature = "network")]
mod udp_sender {
    use super::*;
    use crate::domain::SendError;
    use crate::ports::MessageSender;
    use std::io;
    use std::net::{ToSocketAddrs, UdpSocket};
    use std::sync::Arc;

    /// Largest datagram the bridge accepts.
    pub const MAX_SAM_DATAGRAM: usize = 31 * 1024;

    /// `MessageSender` writing to a SAM bridge's UDP port.
    ///
    /// The socket is non-blocking; a full send buffer reports
    /// [`SendError::WouldBlock`] instead of stalling the event loop.
    #[derive(Debug, Clone)]
    pub struct SamDatagramSender {
        socket: Arc<UdpSocket>,
        bridge: std::net::SocketAddr,
        session: String,
    }

    impl SamDatagramSender {
        /// Bind a local UDP socket and target the bridge at `bridge`.
        ///
        /// # Errors
        ///
        /// Returns error if the bridge address does not resolve or the
        /// socket cannot be bound.
        pub fn bind(
            local: &str,
            bridge: impl ToSocketAddrs,
            session: impl Into<String>,
        ) -> io::Result<Self> {
            let bridge = bridge.to_socket_addrs()?.next().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "bridge address did not resolve")
            })?;
            let socket = UdpSocket::bind(local)?;
            socket.set_nonblocking(true)?;
            Ok(Self {
                socket: Arc::new(socket),
                bridge,
                session: session.into(),
            })
        }

        /// Local address the socket is bound to.
        pub fn local_addr(&self) -> io::Result<std::net::SocketAddr> {
            self.socket.local_addr()
        }

        /// Session nickname used in the header.
        pub fn session(&self) -> &str {
            &self.session
        }
    }

    impl MessageSender for SamDatagramSender {
        fn send(&self, to: &Address, payload: &[u8]) -> Result<usize, SendError> {
            if to.is_empty() || to.as_bytes().iter().any(|b| *b == b'\n' || *b == b' ') {
                return Err(SendError::InvalidAddress);
            }

            let mut datagram = sam_send_header(&self.session, to);
            let header_len = datagram.len();
            datagram.extend_from_slice(payload);
            if datagram.len() > MAX_SAM_DATAGRAM {
                return Err(SendError::MessageTooLarge(datagram.len()));
            }

            match self.socket.send_to(&datagram, self.bridge) {
                Ok(n) => Ok(n.saturating_sub(header_len)),
                Err(e) => match e.kind() {
                    io::ErrorKind::WouldBlock => Err(SendError::WouldBlock),
                    io::ErrorKind::InvalidInput => Err(SendError::InvalidAddress),
                    _ => Err(SendError::Io(e.to_string())),
                },
            }
        }
    }
}

#[cfg(feature = "network")]
pub use udp_sender::{SamDatagramSender, MAX_SAM_DATAGRAM};
