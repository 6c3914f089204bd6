//! # pairpool
//!
//! Deterministic accounting engine for two-asset constant-product pools.
//!
//! The engine prices swaps, mints and burns pool shares and keeps two
//! reserve balances under the `x · y = k` rule, using integer arithmetic
//! only: `u64` amounts, `u128` intermediates, every quotient floored.
//! It never holds balances itself.  Each operation reads snapshots, returns
//! the next state together with a list of ledger [`Effect`](engine::Effect)s,
//! and leaves committing them to the host.
//!
//! # Operations
//!
//! | Operation | Engine function | Fails with |
//! |-----------|-----------------|------------|
//! | Create registry | [`engine::create_registry`] | `InvalidFee`, `AlreadyExists` |
//! | Create pool | [`engine::create_pool`] | `IdenticalAssets`, `RegistryNotFound`, … |
//! | Add liquidity | [`engine::add_liquidity`] | `AmountIsZero`, `InsufficientBalance`, … |
//! | Swap | [`engine::swap`] | `EmptyPool`, `OutputAmountTooLow`, … |
//! | Withdraw liquidity | [`engine::withdraw_liquidity`] | `LpSupplyIsZero`, … |
//!
//! # Quick Start
//!
//! ```rust
//! use pairpool::config::{PoolConfig, RegistryConfig};
//! use pairpool::domain::{AccountId, Amount, AssetId, BasisPoints, RegistryIndex, SwapDirection};
//! use pairpool::host::Exchange;
//!
//! let admin = AccountId::from_bytes([0xad; 32]);
//! let alice = AccountId::from_bytes([0x01; 32]);
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//!
//! let mut exchange = Exchange::in_memory();
//!
//! // 1. A registry entry fixes the fee for its pools (0.30%).
//! let index = RegistryIndex::new(0);
//! exchange
//!     .create_registry(&RegistryConfig::new(admin, BasisPoints::new(30), index))
//!     .expect("fee below 100%");
//!
//! // 2. A pool binds the registry to an ordered asset pair.
//! let pool = exchange
//!     .create_pool(&PoolConfig::new(index, usdc, weth))
//!     .expect("distinct assets")
//!     .key();
//!
//! // 3. Fund Alice and let her seed the pool.
//! exchange.ledger_mut().credit(alice, usdc, Amount::new(1_000_000)).expect("credit");
//! exchange.ledger_mut().credit(alice, weth, Amount::new(1_000_000)).expect("credit");
//! let added = exchange
//!     .add_liquidity(&pool, alice, Amount::new(500_000), Amount::new(500_000))
//!     .expect("deposit");
//! assert_eq!(added.minted.get(), 500_000);
//!
//! // 4. Swap, protected by a quote-derived floor.
//! let quote = exchange
//!     .quote_swap(&pool, SwapDirection::AToB, Amount::new(10_000))
//!     .expect("funded pool");
//! let outcome = exchange
//!     .swap(&pool, alice, SwapDirection::AToB, Amount::new(10_000), quote.amount_out)
//!     .expect("swap");
//! assert_eq!(outcome.fee.get(), 30);
//! assert!(outcome.amount_out.get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Host      │  Exchange: loads snapshots, commits effects
//! └──────┬───────┘
//!        │ PoolContext + Wallet
//!        ▼
//! ┌──────────────┐
//! │   Engine     │  pure operations → Transition { receipt, context, effects }
//! └──────┬───────┘
//!        │ RecordStore + TokenLedger traits
//!        ▼
//! ┌──────────────┐
//! │ State/Domain │  RegistryEntry, PoolRecord, ReservePair, Amount, Shares, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype values: amounts, shares, fee rates, identifiers |
//! | [`math`]   | Widened multiply-divide, integer square root, checked arithmetic |
//! | [`state`]  | Registry and pool records, reserve and supply snapshots, pool phase |
//! | [`config`] | Creation requests with `validate()` |
//! | [`traits`] | The record store and token ledger seams |
//! | [`engine`] | The operations, quotes, effects and receipts |
//! | [`host`]   | In-memory store, ledger and the [`Exchange`](host::Exchange) dispatcher |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for values, records, requests and receipts |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod host;
pub mod math;
pub mod prelude;
pub mod state;
pub mod traits;
