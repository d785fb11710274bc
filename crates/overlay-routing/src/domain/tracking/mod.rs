//! Pending-operation & request-history tracking
//!
//! Two independent [`PendingTable`]s hold in-flight lookups: the ones this
//! node started and the ones it relays for others. [`RequestHistories`]
//! remembers, per target, which peers were already asked so fallback never
//! retries a dead end.
//!
//! Nothing here expires. A request that never gets a reply stays until the
//! process exits; time-boxed cleanup belongs to a higher layer.

mod history;
mod pending;

pub use history::{RequestHistories, RequestHistory};
pub use pending::{PendingRequest, PendingTable};
