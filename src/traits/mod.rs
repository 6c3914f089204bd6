//! Seams between the pure engine and its host.
//!
//! [`RecordStore`] holds the immutable registry and pool records;
//! [`TokenLedger`] holds every balance.  The engine reads both and never
//! writes either.

mod record_store;
mod token_ledger;

pub use record_store::RecordStore;
pub use token_ledger::TokenLedger;
