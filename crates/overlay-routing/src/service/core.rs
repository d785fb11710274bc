use tracing::{info, warn};

use crate::domain::{
    Address, ControlMessage, EngineConfig, EngineStats, NodeKey, PendingTable, RequestHistories,
    RoutingTable,
};
use crate::ports::{ConfigProvider, KeyDeriver, MessageSender};

/// Key-resolution engine for one overlay node.
///
/// Owns the routing table, both pending tables and the request histories.
/// Everything lives for the lifetime of the engine: nothing expires.
///
/// # Example
///
/// ```rust,ignore
/// use overlay_routing::{Address, EngineConfig, I2pKeyDeriver, RoutingEngine};
///
/// let mut engine = RoutingEngine::new(
///     Address::from(our_destination),
///     EngineConfig::default(),
///     Box::new(I2pKeyDeriver::new()),
/// );
/// engine.put(Address::from(bootstrap_destination));
/// ```
pub struct RoutingEngine {
    /// Proximity buckets (domain layer)
    pub(crate) table: RoutingTable,
    /// Our own transport address
    pub(crate) local_address: Address,
    /// Key derived from `local_address`
    pub(crate) local_key: NodeKey,
    /// Lookups this node started
    pub(crate) local_pending: PendingTable,
    /// Lookups this node relays for others
    pub(crate) remote_pending: PendingTable,
    /// Peers already asked, per target
    pub(crate) histories: RequestHistories,
    /// Tuning
    pub(crate) config: EngineConfig,
    /// Address-to-key derivation
    pub(crate) deriver: Box<dyn KeyDeriver>,
}

impl RoutingEngine {
    /// Create an engine for the node reachable at `local_address`.
    ///
    /// The local key is derived from the address and the local entry is the
    /// first one put into the routing table.
    pub fn new(
        local_address: Address,
        config: EngineConfig,
        deriver: Box<dyn KeyDeriver>,
    ) -> Self {
        let local_key = deriver.derive(&local_address);
        let mut engine = Self {
            table: RoutingTable::new(local_key),
            local_address: local_address.clone(),
            local_key,
            local_pending: PendingTable::new(),
            remote_pending: PendingTable::new(),
            histories: RequestHistories::new(),
            config,
            deriver,
        };
        engine.put(local_address);
        info!(key = %local_key, "routing engine initialized");
        engine
    }

    /// Create an engine from a config provider and learn its bootstrap peers.
    pub fn from_config(
        local_address: Address,
        provider: &dyn ConfigProvider,
        deriver: Box<dyn KeyDeriver>,
    ) -> Self {
        let mut engine = Self::new(local_address, provider.engine_config(), deriver);
        let peers = provider.bootstrap_peers();
        let total = peers.len();
        let added = peers.into_iter().filter(|peer| engine.put(peer.clone())).count();
        info!(added, total, "bootstrap peers loaded");
        engine
    }

    /// Our transport address.
    pub fn local_address(&self) -> &Address {
        &self.local_address
    }

    /// Our key.
    pub fn local_key(&self) -> &NodeKey {
        &self.local_key
    }

    /// Engine tuning in effect.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The routing table (read-only).
    pub fn routing_table(&self) -> &RoutingTable {
        &self.table
    }

    /// Lookups this node started and has not seen answered.
    pub fn local_pending(&self) -> &PendingTable {
        &self.local_pending
    }

    /// Lookups this node relays and has not seen answered.
    pub fn remote_pending(&self) -> &PendingTable {
        &self.remote_pending
    }

    /// Per-target request histories.
    pub fn histories(&self) -> &RequestHistories {
        &self.histories
    }

    /// Key for `address` according to the injected deriver.
    pub fn derive_key(&self, address: &Address) -> NodeKey {
        self.deriver.derive(address)
    }

    /// Current table sizes.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            known_entries: self.table.len(),
            buckets_used: self.table.buckets_used(),
            local_pending: self.local_pending.len(),
            remote_pending: self.remote_pending.len(),
            tracked_targets: self.histories.len(),
        }
    }

    /// Encode and send `message`. Failures are logged, not returned.
    pub(crate) fn transmit(send: &dyn MessageSender, to: &Address, message: &ControlMessage) {
        if let Err(e) = send.send(to, &message.encode()) {
            warn!(
                peer = %to,
                command = %message.command,
                target = %message.target,
                error = %e,
                "failed to send control message"
            );
        }
    }
}

impl std::fmt::Debug for RoutingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingEngine")
            .field("local_address", &self.local_address)
            .field("local_key", &self.local_key)
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}
