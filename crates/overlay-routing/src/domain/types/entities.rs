//! Core Domain Entities for the Overlay Routing Engine

use std::fmt;
use std::net::Ipv6Addr;

/// Length of a [`NodeKey`] in bytes.
pub const KEY_LEN: usize = 16;

/// Number of bits in a [`NodeKey`].
pub const KEY_BITS: usize = KEY_LEN * 8;

/// 128-bit identifier in the overlay's flat key space.
///
/// Keys are produced by hashing an [`Address`] (see `KeyDeriver`) and double
/// as the IPv6 address the tunnel assigns to that destination, so `Display`
/// renders them in IPv6 notation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey(pub [u8; KEY_LEN]);

impl NodeKey {
    /// Create a NodeKey from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes for distance calculation.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Read a key from the first [`KEY_LEN`] bytes of `bytes`.
    ///
    /// Returns `None` if the slice is too short.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; KEY_LEN] = bytes.get(..KEY_LEN)?.try_into().ok()?;
        Some(Self(raw))
    }

    /// View the key as the IPv6 address it maps to.
    pub fn to_ipv6(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.0)
    }
}

impl From<Ipv6Addr> for NodeKey {
    fn from(addr: Ipv6Addr) -> Self {
        Self(addr.octets())
    }
}

impl AsRef<[u8]> for NodeKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ipv6())
    }
}

impl fmt::Debug for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeKey({})", self.to_ipv6())
    }
}

/// Opaque transport address (an anonymity-network destination).
///
/// The engine never interprets the contents; it only stores, compares and
/// forwards them. Addresses received on the wire may be arbitrary bytes, so
/// the token is kept as bytes and rendered lossily for logs.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(Vec<u8>);

impl Address {
    /// Create an address from any byte-like token.
    pub fn new(token: impl Into<Vec<u8>>) -> Self {
        Self(token.into())
    }

    /// Raw bytes of the token.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The token as UTF-8, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&[u8]> for Address {
    fn from(b: &[u8]) -> Self {
        Self(b.to_vec())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({:?})", String::from_utf8_lossy(&self.0))
    }
}

/// "This key currently resolves to this address."
///
/// Immutable once created. Entries are never updated or removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutingEntry {
    key: NodeKey,
    address: Address,
}

impl RoutingEntry {
    /// Create an entry. The caller is responsible for `key` being the
    /// derived key of `address`.
    pub fn new(key: NodeKey, address: Address) -> Self {
        Self { key, address }
    }

    /// The entry's key.
    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    /// The entry's transport address.
    pub fn address(&self) -> &Address {
        &self.address
    }
}
