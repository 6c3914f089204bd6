//! Persisted records and ledger-backed snapshots.
//!
//! [`RegistryEntry`] and [`PoolRecord`] are created once and never change.
//! [`ReservePair`] and [`ShareLedger`] mirror balances owned by the token
//! ledger and are re-read before every operation.

mod phase;
mod pool;
mod registry;
mod reserves;
mod share_ledger;

pub use phase::PoolPhase;
pub use pool::{PoolKey, PoolRecord};
pub use registry::RegistryEntry;
pub use reserves::ReservePair;
pub use share_ledger::ShareLedger;
