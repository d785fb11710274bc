//! Value Objects for the Overlay Routing Engine

use super::entities::KEY_LEN;

/// Bitwise XOR of two keys.
///
/// Ranking uses the Hamming weight of this value (see [`Distance::rank`]),
/// not the position of the most significant differing bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Distance(pub [u8; KEY_LEN]);

impl Distance {
    /// The zero distance (a key compared with itself).
    pub fn zero() -> Self {
        Self([0u8; KEY_LEN])
    }

    /// Raw XOR bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Closeness rank: number of set bits. Lower is closer.
    pub fn rank(&self) -> u32 {
        self.0.iter().map(|b| b.count_ones()).sum()
    }

    /// True for the distance between identical keys.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

/// How a node picks the next hop for a GET whose target it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelaySelection {
    /// Closest known entry to the immediate sender's key.
    ///
    /// This is the deployed behavior. It does not necessarily make progress
    /// toward the target; kept for wire compatibility with existing nodes.
    #[default]
    SenderKey,
    /// Closest known entry to the requested target, skipping peers already
    /// tried for that target.
    Target,
}

impl RelaySelection {
    /// Parse the config-file spelling (`sender-key` / `target`).
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s {
            "sender-key" | "sender_key" => Some(Self::SenderKey),
            "target" => Some(Self::Target),
            _ => None,
        }
    }
}

/// Engine tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Next-hop policy for relaying unknown targets.
    pub relay_selection: RelaySelection,
    /// Whether `persist` writes the local node's own address.
    pub persist_self: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            relay_selection: RelaySelection::SenderKey,
            persist_self: true,
        }
    }
}

impl EngineConfig {
    /// Config using the target-directed relay policy.
    pub fn target_directed() -> Self {
        Self {
            relay_selection: RelaySelection::Target,
            ..Self::default()
        }
    }
}
