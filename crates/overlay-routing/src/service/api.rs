use crate::domain::{Address, Disposition, EngineStats, FindOutcome, NodeKey, RoutingError};
use crate::ports::{MessageSender, RoutingEngineApi};
use crate::service::RoutingEngine;

impl RoutingEngineApi for RoutingEngine {
    fn find(
        &mut self,
        target: NodeKey,
        send: &dyn MessageSender,
    ) -> Result<FindOutcome, RoutingError> {
        RoutingEngine::find(self, target, send)
    }

    fn handle_data(
        &mut self,
        from: &Address,
        message: &[u8],
        send: &dyn MessageSender,
    ) -> Disposition {
        RoutingEngine::handle_data(self, from, message, send)
    }

    fn put(&mut self, address: Address) -> bool {
        RoutingEngine::put(self, address)
    }

    fn known_dest(&self, address: &Address) -> bool {
        RoutingEngine::known_dest(self, address)
    }

    fn known_addr(&self, key: &NodeKey) -> bool {
        RoutingEngine::known_addr(self, key)
    }

    fn get_dest(&self, key: &NodeKey) -> Result<&Address, RoutingError> {
        RoutingEngine::get_dest(self, key)
    }

    fn stats(&self) -> EngineStats {
        RoutingEngine::stats(self)
    }
}
