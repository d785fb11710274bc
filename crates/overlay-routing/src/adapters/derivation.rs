//! Address-to-key derivation for I2P destinations.

use base64::alphabet::Alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::domain::{Address, NodeKey, KEY_LEN};
use crate::ports::KeyDeriver;

/// First byte of every derived key; places keys in `0200::/8`.
pub const KEY_PREFIX: u8 = 0x02;

/// I2P's base64 variant: standard alphabet with `-` and `~` for `+` and `/`.
const I2P_ALPHABET: Alphabet =
    match Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-~") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid I2P base64 alphabet"),
    };

/// Canonical form only: padded, zero trailing bits. Each token then decodes
/// to a distinct byte string.
const I2P_BASE64: GeneralPurpose = GeneralPurpose::new(
    &I2P_ALPHABET,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Prepended before hashing an address that is not canonical I2P base64, so
/// its key never equals the key of a destination that decodes to the same
/// bytes.
const RAW_ADDRESS_DOMAIN: &[u8] = b"overlay-routing/raw-address";

/// Derives keys from I2P base64 destinations.
///
/// `key = SHA-256(base64_decode(destination))[..16]` with byte 0 forced to
/// [`KEY_PREFIX`]. Addresses that are not canonical I2P base64 are hashed as
/// raw bytes under a separate domain, so every address still has exactly one
/// key and distinct addresses never share the hash input.
#[derive(Debug, Clone, Copy, Default)]
pub struct I2pKeyDeriver;

impl I2pKeyDeriver {
    /// Create a deriver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decode an I2P base64 destination. `None` unless it is canonical base64.
    pub fn decode_destination(address: &Address) -> Option<Vec<u8>> {
        I2P_BASE64.decode(address.as_bytes()).ok()
    }

    /// Encode raw destination bytes as I2P base64.
    pub fn encode_destination(raw: &[u8]) -> Address {
        Address::from(I2P_BASE64.encode(raw))
    }
}

impl KeyDeriver for I2pKeyDeriver {
    fn derive(&self, address: &Address) -> NodeKey {
        let digest = match Self::decode_destination(address) {
            Some(raw) => Sha256::digest(&raw),
            None => Sha256::new()
                .chain_update(RAW_ADDRESS_DOMAIN)
                .chain_update(address.as_bytes())
                .finalize(),
        };

        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&digest[..KEY_LEN]);
        bytes[0] = KEY_PREFIX;
        NodeKey::new(bytes)
    }
}
