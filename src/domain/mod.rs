//! Value types shared by every layer of the engine.
//!
//! Amounts, share counts and fee rates are newtypes over unsigned integers
//! with checked arithmetic.  Identifiers are opaque 32-byte values supplied
//! by the host ledger.

mod address;
mod amount;
mod asset_pair;
mod basis_points;
mod fee_rate;
mod registry_index;
mod shares;
mod swap_direction;

pub use address::{AccountId, AssetId};
pub use amount::Amount;
pub use asset_pair::{AssetPair, Side};
pub use basis_points::{BasisPoints, MAX_FEE_BPS};
pub use fee_rate::FeeRate;
pub use registry_index::RegistryIndex;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
