use std::path::PathBuf;

use crate::domain::{Address, EngineConfig};
use crate::ports::ConfigProvider;

use super::store::DEFAULT_NODES_FILE;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/embedding
// ============================================================================

/// Static configuration provider with hardcoded values.
///
/// For config files, use `TomlConfigProvider` (feature `network`).
#[derive(Debug, Clone)]
pub struct StaticConfigProvider {
    bootstrap_peers: Vec<Address>,
    config: EngineConfig,
    nodes_file: PathBuf,
}

impl StaticConfigProvider {
    /// Create with default config and no bootstrap peers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bootstrap_peers: Vec::new(),
            config: EngineConfig::default(),
            nodes_file: PathBuf::from(DEFAULT_NODES_FILE),
        }
    }

    /// Use these bootstrap peers.
    #[must_use]
    pub fn with_bootstrap_peers(mut self, peers: Vec<Address>) -> Self {
        self.bootstrap_peers = peers;
        self
    }

    /// Use this engine config.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Persist peers to this file.
    #[must_use]
    pub fn with_nodes_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.nodes_file = path.into();
        self
    }
}

impl Default for StaticConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn bootstrap_peers(&self) -> Vec<Address> {
        self.bootstrap_peers.clone()
    }

    fn engine_config(&self) -> EngineConfig {
        self.config.clone()
    }

    fn nodes_file(&self) -> PathBuf {
        self.nodes_file.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Config file loading (requires "network" feature)
// ============================================================================

#[cfg(feature = "network")]
mod toml_config {
    use super::*;
    use crate::domain::{ConfigError, RelaySelection};
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    /// Default SAM UDP endpoint.
    pub const DEFAULT_SAM_UDP_ADDRESS: &str = "127.0.0.1:7655";

    /// Default SAM session nickname.
    pub const DEFAULT_SAM_SESSION: &str = "samtun";

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        engine: EngineSection,
        #[serde(default)]
        persistence: PersistenceSection,
        #[serde(default)]
        bootstrap: BootstrapSection,
        #[serde(default)]
        sam: SamSection,
    }

    #[derive(Debug, Deserialize, Default)]
    struct EngineSection {
        relay_selection: Option<String>,
        persist_self: Option<bool>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct PersistenceSection {
        nodes_file: Option<PathBuf>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct BootstrapSection {
        #[serde(default)]
        peers: Vec<String>,
    }

    #[derive(Debug, Deserialize, Default)]
    struct SamSection {
        udp_address: Option<String>,
        session: Option<String>,
    }

    /// SAM bridge settings read from `[sam]`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SamSettings {
        /// UDP endpoint datagrams are sent to.
        pub udp_address: String,
        /// Session nickname prefixed to every datagram.
        pub session: String,
    }

    impl Default for SamSettings {
        fn default() -> Self {
            Self {
                udp_address: DEFAULT_SAM_UDP_ADDRESS.to_string(),
                session: DEFAULT_SAM_SESSION.to_string(),
            }
        }
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [engine]
    /// relay_selection = "sender-key"   # or "target"
    /// persist_self = true
    ///
    /// [persistence]
    /// nodes_file = "nodes.txt"
    ///
    /// [bootstrap]
    /// peers = ["<base64 destination>"]
    ///
    /// [sam]
    /// udp_address = "127.0.0.1:7655"
    /// session = "samtun"
    /// ```
    ///
    /// Every section and key is optional.
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        bootstrap_peers: Vec<Address>,
        config: EngineConfig,
        nodes_file: PathBuf,
        sam: SamSettings,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read or parsed.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                source: e,
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let defaults = EngineConfig::default();
            let relay_selection = match file.engine.relay_selection {
                Some(s) => RelaySelection::from_config_str(&s).ok_or_else(|| {
                    ConfigError::Parse(format!("unknown relay_selection {:?}", s))
                })?,
                None => defaults.relay_selection,
            };
            let config = EngineConfig {
                relay_selection,
                persist_self: file.engine.persist_self.unwrap_or(defaults.persist_self),
            };

            let bootstrap_peers = file
                .bootstrap
                .peers
                .into_iter()
                .map(|peer| peer.trim().to_string())
                .filter(|peer| !peer.is_empty())
                .map(Address::from)
                .collect();

            let sam_defaults = SamSettings::default();
            let sam = SamSettings {
                udp_address: file.sam.udp_address.unwrap_or(sam_defaults.udp_address),
                session: file.sam.session.unwrap_or(sam_defaults.session),
            };

            Ok(Self {
                bootstrap_peers,
                config,
                nodes_file: file
                    .persistence
                    .nodes_file
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_NODES_FILE)),
                sam,
            })
        }

        /// SAM bridge settings.
        pub fn sam(&self) -> &SamSettings {
            &self.sam
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn bootstrap_peers(&self) -> Vec<Address> {
            self.bootstrap_peers.clone()
        }

        fn engine_config(&self) -> EngineConfig {
            self.config.clone()
        }

        fn nodes_file(&self) -> PathBuf {
            self.nodes_file.clone()
        }
    }
}

#[cfg(feature = "network")]
pub use toml_config::{SamSettings, TomlConfigProvider, DEFAULT_SAM_SESSION, DEFAULT_SAM_UDP_ADDRESS};
