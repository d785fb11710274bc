//! Datagram intake and outbound packet routing for the tunnel loop.

use tracing::debug;

use crate::domain::{Address, Ingress, NodeKey, RouteOutcome, RoutingError, OVERLAY_MARKER};
use crate::ports::MessageSender;
use crate::service::RoutingEngine;

impl RoutingEngine {
    /// Classify a received datagram and handle it if it is a control message.
    ///
    /// Any sender we have not seen before is learned first, whatever the
    /// datagram carries.
    pub fn on_datagram(
        &mut self,
        from: &Address,
        payload: &[u8],
        send: &dyn MessageSender,
    ) -> Ingress {
        let Some(&marker) = payload.first() else {
            debug!(from = %from, "empty datagram");
            return Ingress::Dropped;
        };

        if !self.known_dest(from) {
            self.put(from.clone());
        }

        if marker == OVERLAY_MARKER {
            Ingress::Control(self.handle_data(from, payload, send))
        } else {
            Ingress::Packet
        }
    }

    /// Send an IP packet to the node owning `target`, or look it up.
    ///
    /// # Errors
    ///
    /// [`RoutingError::Transport`] if the packet or the lookup GET could not
    /// be sent.
    pub fn route(
        &mut self,
        target: NodeKey,
        packet: &[u8],
        send: &dyn MessageSender,
    ) -> Result<RouteOutcome, RoutingError> {
        if self.known_addr(&target) {
            if let Ok(dest) = self.table.get_dest(&target) {
                let bytes = send.send(dest, packet)?;
                return Ok(RouteOutcome::Delivered { bytes });
            }
        }
        debug!(target = %target, "no route to target, looking it up");
        Ok(RouteOutcome::Lookup(self.find(target, send)?))
    }
}
