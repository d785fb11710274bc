//! Control-message dispatcher.

use tracing::{debug, info, warn};

use crate::domain::{
    Address, Command, ControlMessage, Disposition, NodeKey, PendingRequest, RelaySelection,
    RoutingEntry,
};
use crate::ports::MessageSender;
use crate::service::RoutingEngine;

/// Which pending table a reply matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Local,
    Remote,
}

impl RoutingEngine {
    /// React to one routing-control message from `from`.
    pub fn handle_data(
        &mut self,
        from: &Address,
        message: &[u8],
        send: &dyn MessageSender,
    ) -> Disposition {
        let message = match ControlMessage::parse(message) {
            Ok(m) => m,
            Err(e) => {
                debug!(from = %from, error = %e, "dropping control message");
                return Disposition::Malformed(e);
            }
        };

        debug!(
            from = %from,
            command = %message.command,
            target = %message.target,
            "control message"
        );

        match message.command {
            Command::Get => self.on_get(from, &message, send),
            Command::Found => self.on_found(from, &message),
            Command::Reject => self.on_reject(from, &message, send),
            Command::Accept => self.on_accept(from, &message),
            Command::Unknown(byte) => {
                Self::transmit(send, from, &message.with_command(Command::Reject));
                Disposition::UnknownCommand(byte)
            }
        }
    }

    // =========================================================================
    // GET
    // =========================================================================

    fn on_get(
        &mut self,
        from: &Address,
        message: &ControlMessage,
        send: &dyn MessageSender,
    ) -> Disposition {
        let target = message.target;

        if self.known_addr(&target) {
            Self::transmit(send, from, &message.with_command(Command::Accept));

            if target == self.local_key {
                // Header-only GETs carry no reply-to; answer the sender
                let reply_to = if message.reply_to.is_empty() {
                    from
                } else {
                    &message.reply_to
                };
                Self::transmit(send, reply_to, &message.with_command(Command::Found));
                info!(from = %from, reply_to = %reply_to, "answered lookup for our own key");
                return Disposition::Answered;
            }

            let owner = match self.table.get_dest(&target) {
                Ok(owner) => owner.clone(),
                Err(e) => {
                    warn!(target = %target, error = %e, "known key has no destination");
                    return Disposition::NoProgress;
                }
            };
            Self::transmit(send, &owner, message);
            debug!(target = %target, peer = %owner, "forwarded GET to target");
            return Disposition::Forwarded { peer: owner };
        }

        let from_key = self.deriver.derive(from);
        let relay = match self.select_relay(&from_key, &target) {
            Some(entry) if entry.key() != &self.local_key => entry,
            _ => {
                Self::transmit(send, from, &message.with_command(Command::Reject));
                debug!(from = %from, target = %target, "no closer peer, rejected GET");
                return Disposition::NoProgress;
            }
        };

        let request = PendingRequest::new(from.clone(), target, message.reply_to.clone());
        if !self.remote_pending.insert(request) {
            debug!(from = %from, target = %target, "GET already being relayed");
        }
        let history = self.histories.for_target(target);
        if self.config.relay_selection == RelaySelection::Target {
            // The requester is never a fallback candidate for this target
            history.record(from_key);
        }
        history.record(*relay.key());

        Self::transmit(send, from, &message.with_command(Command::Accept));
        Self::transmit(send, relay.address(), message);
        debug!(target = %target, peer = %relay.key(), "relayed GET");

        Disposition::Relayed {
            peer: relay.address().clone(),
        }
    }

    /// Next hop for a GET whose target we do not know.
    ///
    /// Read-only: in `Target` mode the sender is excluded through a local
    /// copy of the target's history.
    fn select_relay(&self, from_key: &NodeKey, target: &NodeKey) -> Option<RoutingEntry> {
        match self.config.relay_selection {
            RelaySelection::SenderKey => self.table.closest_to(from_key, None).cloned(),
            RelaySelection::Target => {
                let mut exclude = self.histories.get(target).cloned().unwrap_or_default();
                exclude.record(*from_key);
                self.table.closest_to(target, Some(&exclude)).cloned()
            }
        }
    }

    // =========================================================================
    // FOUND
    // =========================================================================

    fn on_found(&mut self, from: &Address, message: &ControlMessage) -> Disposition {
        if self
            .local_pending
            .find(&message.target, &message.reply_to)
            .is_none()
        {
            warn!(from = %from, target = %message.target, "unwarranted FOUND");
            return Disposition::Unwarranted {
                command: Command::Found,
            };
        }

        let actual = self.deriver.derive(from);
        if actual != message.target {
            warn!(
                from = %from,
                claimed = %message.target,
                actual = %actual,
                "FOUND from a peer that is not the target, possible spoofing"
            );
            return Disposition::Spoofed {
                claimed: message.target,
                actual,
            };
        }

        self.local_pending.take(&message.target, &message.reply_to);
        self.put(from.clone());
        info!(target = %message.target, peer = %from, "lookup resolved");

        Disposition::Resolved {
            key: message.target,
        }
    }

    // =========================================================================
    // REJECT
    // =========================================================================

    fn on_reject(
        &mut self,
        from: &Address,
        message: &ControlMessage,
        send: &dyn MessageSender,
    ) -> Disposition {
        let target = message.target;
        let matched = self
            .local_pending
            .find(&target, &message.reply_to)
            .map(|r| (Origin::Local, r.clone()))
            .or_else(|| {
                self.remote_pending
                    .find(&target, &message.reply_to)
                    .map(|r| (Origin::Remote, r.clone()))
            });

        let Some((origin, request)) = matched else {
            warn!(from = %from, target = %target, "unwarranted REJECT");
            return Disposition::Unwarranted {
                command: Command::Reject,
            };
        };

        let history = self.histories.for_target(target);
        history.record(self.deriver.derive(from));

        // We are never a candidate for our own fallback
        let mut exclude = history.clone();
        exclude.record(self.local_key);

        if let Some(next) = self.table.next_closest(&target, &exclude).cloned() {
            self.histories.for_target(target).record(*next.key());
            Self::transmit(send, next.address(), &message.with_command(Command::Get));
            debug!(target = %target, peer = %next.key(), "retrying lookup after REJECT");
            return Disposition::Retried {
                peer: next.address().clone(),
            };
        }

        match origin {
            Origin::Local => {
                self.local_pending.remove(&request);
                info!(target = %target, "lookup exhausted all candidates, giving up");
                Disposition::Abandoned
            }
            Origin::Remote => {
                Self::transmit(
                    send,
                    &request.requester,
                    &message.with_command(Command::Reject),
                );
                self.remote_pending.remove(&request);
                debug!(
                    target = %target,
                    requester = %request.requester,
                    "relayed lookup exhausted, passing REJECT back"
                );
                Disposition::RejectPropagated {
                    requester: request.requester,
                }
            }
        }
    }

    // =========================================================================
    // ACCEPT
    // =========================================================================

    fn on_accept(&mut self, from: &Address, message: &ControlMessage) -> Disposition {
        let cleared = self
            .local_pending
            .take(&message.target, &message.reply_to)
            .or_else(|| self.remote_pending.take(&message.target, &message.reply_to));

        match cleared {
            Some(_) => {
                debug!(from = %from, target = %message.target, "lookup acknowledged");
                Disposition::Acknowledged
            }
            None => {
                warn!(from = %from, target = %message.target, "unwarranted ACCEPT");
                Disposition::Unwarranted {
                    command: Command::Accept,
                }
            }
        }
    }
}
