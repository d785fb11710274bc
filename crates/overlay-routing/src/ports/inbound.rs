//! # Driving Ports (Inbound API)
//!
//! The operations a tunnel event loop drives the engine with.

use crate::domain::{Address, Disposition, EngineStats, FindOutcome, NodeKey, RoutingError};
use crate::ports::MessageSender;

/// Primary API of the key-resolution engine.
///
/// The engine is single-writer: every method takes `&mut self` or `&self`
/// and is expected to be called from one event loop. The send capability is
/// passed per call and may be invoked several times before the call returns.
///
/// # Example
///
/// ```rust,ignore
/// use overlay_routing::ports::RoutingEngineApi;
///
/// fn on_unknown_destination<E: RoutingEngineApi>(engine: &mut E, key: NodeKey, send: &dyn MessageSender) {
///     match engine.find(key, send) {
///         Ok(FindOutcome::Sent { peer }) => println!("asked {}", peer),
///         Ok(FindOutcome::NoRoute) => println!("nobody to ask"),
///         Err(e) => eprintln!("{}", e),
///     }
/// }
/// ```
pub trait RoutingEngineApi {
    /// Start resolving `target` by asking the closest known peer.
    ///
    /// # Returns
    ///
    /// - `Ok(Sent)` when a GET went out and the lookup is pending
    /// - `Ok(NoRoute)` when the closest known entry is ourselves
    /// - `Err(Transport)` if the send capability refused the GET
    fn find(
        &mut self,
        target: NodeKey,
        send: &dyn MessageSender,
    ) -> Result<FindOutcome, RoutingError>;

    /// React to one received routing-control message.
    ///
    /// Never fails: protocol conditions (malformed, unwarranted, spoofed,
    /// no progress) are reported in the returned [`Disposition`].
    fn handle_data(
        &mut self,
        from: &Address,
        message: &[u8],
        send: &dyn MessageSender,
    ) -> Disposition;

    /// Learn an address. Returns `false` (no-op) if it is already known.
    fn put(&mut self, address: Address) -> bool;

    /// True if `address` is in the routing table.
    fn known_dest(&self, address: &Address) -> bool;

    /// True if an entry with exactly `key` is in the routing table.
    fn known_addr(&self, key: &NodeKey) -> bool;

    /// Address stored under exactly `key`.
    ///
    /// # Errors
    ///
    /// [`RoutingError::NotFound`] if no entry has that key, even when a
    /// closest entry exists.
    fn get_dest(&self, key: &NodeKey) -> Result<&Address, RoutingError>;

    /// Current table sizes.
    fn stats(&self) -> EngineStats;
}
