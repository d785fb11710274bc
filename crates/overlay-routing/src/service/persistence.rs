//! Restoring and persisting known peers.

use tracing::{info, warn};

use crate::domain::{Address, RoutingError};
use crate::ports::PeerStore;
use crate::service::RoutingEngine;

impl RoutingEngine {
    /// Put every address from `store`. Returns how many were new.
    ///
    /// A store that cannot be read is logged and treated as empty.
    pub fn restore(&mut self, store: &dyn PeerStore) -> usize {
        let addresses = match store.load() {
            Ok(addresses) => addresses,
            Err(e) => {
                warn!(error = %e, "could not load known peers");
                return 0;
            }
        };

        let mut added = 0;
        for address in addresses {
            if !address.is_empty() && self.put(address) {
                added += 1;
            }
        }
        info!(added, known = self.table.len(), "restored known peers");
        added
    }

    /// Write every known address to `store`, in bucket order.
    ///
    /// Our own address is included unless `persist_self` is off.
    pub fn persist(&self, store: &dyn PeerStore) -> Result<usize, RoutingError> {
        let addresses: Vec<Address> = self
            .table
            .entries()
            .filter(|e| !e.address().is_empty())
            .filter(|e| self.config.persist_self || e.key() != &self.local_key)
            .map(|e| e.address().clone())
            .collect();

        store.save(&addresses)?;
        info!(count = addresses.len(), "persisted known peers");
        Ok(addresses.len())
    }
}
