//! Reference host: in-memory storage and a sequential dispatcher.
//!
//! Real deployments supply their own [`RecordStore`](crate::traits::RecordStore)
//! and [`TokenLedger`](crate::traits::TokenLedger); these implementations
//! serve tests, simulations and the demo.

mod exchange;
mod ledger;
mod operation;
mod record_store;

pub use exchange::{Exchange, PoolView};
pub use ledger::MemoryLedger;
pub use operation::{Operation, Receipt};
pub use record_store::MemoryRecordStore;
