//! The external token ledger the engine instructs.
//!
//! Balances, custody accounts and share supply live outside the engine.
//! The engine reads them through this trait before an operation and the
//! host writes them through [`TokenLedger::commit`] afterwards.
//!
//! # Atomicity
//!
//! `commit` applies a whole effect list or nothing.  An implementation
//! that fails half-way through must leave every balance exactly as it was
//! before the call.

use crate::domain::{AccountId, Amount, AssetId, Shares};
use crate::engine::{Effect, Holder, SupplyChange};
use crate::error::Result;
use crate::state::PoolKey;

/// Balance store with transfer and mint/burn primitives.
pub trait TokenLedger {
    /// Balance of `asset` held by `holder`; zero if none.
    fn balance(&self, holder: &Holder, asset: &AssetId) -> Amount;

    /// Shares of `pool` held by `account`; zero if none.
    fn share_balance(&self, pool: &PoolKey, account: &AccountId) -> Shares;

    /// Outstanding share supply of `pool`; zero if none.
    fn share_supply(&self, pool: &PoolKey) -> Shares;

    /// Moves `amount` of `asset` between holders.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`](crate::error::AmmError::InsufficientBalance)
    /// if `from` holds less than `amount`, or
    /// [`AmmError::Ledger`](crate::error::AmmError::Ledger) if a custody
    /// account involved was never opened.
    fn transfer(&mut self, asset: AssetId, from: Holder, to: Holder, amount: Amount) -> Result<()>;

    /// Mints shares to, or burns shares from, `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLpBalance`](crate::error::AmmError::InsufficientLpBalance)
    /// if a burn exceeds the account's shares, or
    /// [`AmmError::Ledger`](crate::error::AmmError::Ledger) if the share
    /// mint was never opened.
    fn mint_or_burn(
        &mut self,
        pool: PoolKey,
        account: AccountId,
        amount: Shares,
        change: SupplyChange,
    ) -> Result<()>;

    /// Opens a zero-balance custody account.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Ledger`](crate::error::AmmError::Ledger) if it
    /// already exists.
    fn open_custody(&mut self, pool: PoolKey, asset: AssetId) -> Result<()>;

    /// Opens a share supply counter at zero.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Ledger`](crate::error::AmmError::Ledger) if it
    /// already exists.
    fn open_share_mint(&mut self, pool: PoolKey) -> Result<()>;

    /// Applies every effect in order, atomically.
    ///
    /// # Errors
    ///
    /// Returns the first primitive's error; no effect is applied.
    fn commit(&mut self, effects: &[Effect]) -> Result<()>;

    /// Routes a single effect to the matching primitive.
    ///
    /// Not atomic on its own; `commit` implementations call it on a staged
    /// copy.
    ///
    /// # Errors
    ///
    /// Propagates the primitive's error.
    fn apply(&mut self, effect: &Effect) -> Result<()> {
        match *effect {
            Effect::OpenCustody { pool, asset } => self.open_custody(pool, asset),
            Effect::OpenShareMint { pool } => self.open_share_mint(pool),
            Effect::Transfer {
                asset,
                from,
                to,
                amount,
            } => self.transfer(asset, from, to, amount),
            Effect::Supply {
                pool,
                account,
                amount,
                change,
            } => self.mint_or_burn(pool, account, amount, change),
        }
    }
}
