//! In-memory token ledger with all-or-nothing commits.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::domain::{AccountId, Amount, AssetId, Shares};
use crate::engine::{Effect, Holder, SupplyChange};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::state::PoolKey;
use crate::traits::TokenLedger;

/// [`TokenLedger`] held in memory.
///
/// Custody accounts and share mints must be opened before use, mirroring a
/// real ledger where a pool's accounts are created with the pool.
/// [`commit`](TokenLedger::commit) stages every effect on a copy and swaps
/// it in only if all of them succeed.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    balances: HashMap<(Holder, AssetId), Amount>,
    custody: HashSet<(PoolKey, AssetId)>,
    supplies: HashMap<PoolKey, Shares>,
    shares: HashMap<(PoolKey, AccountId), Shares>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues `amount` of `asset` to `account` out of thin air.
    ///
    /// Stands in for whatever funds participants in a real deployment.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::MathOverflow`] if the balance would overflow.
    pub fn credit(&mut self, account: AccountId, asset: AssetId, amount: Amount) -> Result<()> {
        self.add(Holder::Account(account), asset, amount)
    }

    /// Sum of `asset` over every holder.
    #[must_use]
    pub fn total_of(&self, asset: &AssetId) -> u128 {
        self.balances
            .iter()
            .filter(|((_, a), _)| a == asset)
            .map(|(_, v)| v.widen())
            .sum()
    }

    fn ensure_open(&self, holder: &Holder, asset: AssetId) -> Result<()> {
        match holder {
            Holder::Custody(pool) if !self.custody.contains(&(*pool, asset)) => {
                Err(AmmError::Ledger("custody account not opened"))
            }
            _ => Ok(()),
        }
    }

    fn add(&mut self, holder: Holder, asset: AssetId, amount: Amount) -> Result<()> {
        let slot = self.balances.entry((holder, asset)).or_default();
        *slot = slot.safe_add(&amount)?;
        Ok(())
    }
}

impl TokenLedger for MemoryLedger {
    fn balance(&self, holder: &Holder, asset: &AssetId) -> Amount {
        self.balances
            .get(&(*holder, *asset))
            .copied()
            .unwrap_or_default()
    }

    fn share_balance(&self, pool: &PoolKey, account: &AccountId) -> Shares {
        self.shares
            .get(&(*pool, *account))
            .copied()
            .unwrap_or_default()
    }

    fn share_supply(&self, pool: &PoolKey) -> Shares {
        self.supplies.get(pool).copied().unwrap_or_default()
    }

    fn transfer(&mut self, asset: AssetId, from: Holder, to: Holder, amount: Amount) -> Result<()> {
        self.ensure_open(&from, asset)?;
        self.ensure_open(&to, asset)?;
        let available = self.balance(&from, &asset);
        let remaining = available
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance)?;
        self.balances.insert((from, asset), remaining);
        self.add(to, asset, amount)?;
        trace!(%asset, %from, %to, %amount, "transfer");
        Ok(())
    }

    fn mint_or_burn(
        &mut self,
        pool: PoolKey,
        account: AccountId,
        amount: Shares,
        change: SupplyChange,
    ) -> Result<()> {
        let supply = *self
            .supplies
            .get(&pool)
            .ok_or(AmmError::Ledger("share mint not opened"))?;
        let held = self.share_balance(&pool, &account);
        let (supply, held) = match change {
            SupplyChange::Mint => (supply.safe_add(&amount)?, held.safe_add(&amount)?),
            SupplyChange::Burn => {
                let held = held
                    .checked_sub(&amount)
                    .ok_or(AmmError::InsufficientLpBalance)?;
                (supply.safe_sub(&amount)?, held)
            }
        };
        self.supplies.insert(pool, supply);
        self.shares.insert((pool, account), held);
        trace!(%pool, %account, %amount, ?change, "supply change");
        Ok(())
    }

    fn open_custody(&mut self, pool: PoolKey, asset: AssetId) -> Result<()> {
        if !self.custody.insert((pool, asset)) {
            return Err(AmmError::Ledger("custody account already open"));
        }
        Ok(())
    }

    fn open_share_mint(&mut self, pool: PoolKey) -> Result<()> {
        if self.supplies.contains_key(&pool) {
            return Err(AmmError::Ledger("share mint already open"));
        }
        self.supplies.insert(pool, Shares::ZERO);
        Ok(())
    }

    fn commit(&mut self, effects: &[Effect]) -> Result<()> {
        let mut staged = self.clone();
        for effect in effects {
            staged.apply(effect)?;
        }
        *self = staged;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AssetPair, RegistryIndex};

    const X: AssetId = AssetId::from_bytes([1; 32]);
    const Y: AssetId = AssetId::from_bytes([2; 32]);
    const BOB: AccountId = AccountId::from_bytes([3; 32]);

    fn key() -> PoolKey {
        let Ok(pair) = AssetPair::new(X, Y) else {
            panic!("distinct assets");
        };
        PoolKey::new(RegistryIndex::new(0), pair)
    }

    fn opened() -> MemoryLedger {
        let mut ledger = MemoryLedger::new();
        let effects = [
            Effect::OpenCustody { pool: key(), asset: X },
            Effect::OpenCustody { pool: key(), asset: Y },
            Effect::OpenShareMint { pool: key() },
        ];
        let Ok(()) = ledger.commit(&effects) else {
            panic!("open accounts");
        };
        ledger
    }

    #[test]
    fn transfer_moves_balance() {
        let mut ledger = opened();
        let Ok(()) = ledger.credit(BOB, X, Amount::new(100)) else {
            panic!("credit");
        };
        let to = Holder::Custody(key());
        assert!(ledger.transfer(X, Holder::Account(BOB), to, Amount::new(40)).is_ok());
        assert_eq!(ledger.balance(&Holder::Account(BOB), &X), Amount::new(60));
        assert_eq!(ledger.balance(&to, &X), Amount::new(40));
        assert_eq!(ledger.total_of(&X), 100);
    }

    #[test]
    fn transfer_into_unopened_custody_fails() {
        let mut ledger = MemoryLedger::new();
        let Ok(()) = ledger.credit(BOB, X, Amount::new(1)) else {
            panic!("credit");
        };
        let r = ledger.transfer(X, Holder::Account(BOB), Holder::Custody(key()), Amount::new(1));
        assert_eq!(r, Err(AmmError::Ledger("custody account not opened")));
    }

    #[test]
    fn overdraft_fails() {
        let mut ledger = opened();
        let r = ledger.transfer(X, Holder::Account(BOB), Holder::Custody(key()), Amount::new(1));
        assert_eq!(r, Err(AmmError::InsufficientBalance));
    }

    #[test]
    fn mint_and_burn_track_supply() {
        let mut ledger = opened();
        assert!(ledger.mint_or_burn(key(), BOB, Shares::new(10), SupplyChange::Mint).is_ok());
        assert!(ledger.mint_or_burn(key(), BOB, Shares::new(4), SupplyChange::Burn).is_ok());
        assert_eq!(ledger.share_supply(&key()), Shares::new(6));
        assert_eq!(ledger.share_balance(&key(), &BOB), Shares::new(6));
        assert_eq!(
            ledger.mint_or_burn(key(), BOB, Shares::new(7), SupplyChange::Burn),
            Err(AmmError::InsufficientLpBalance)
        );
    }

    #[test]
    fn failed_commit_applies_nothing() {
        let mut ledger = opened();
        let Ok(()) = ledger.credit(BOB, X, Amount::new(10)) else {
            panic!("credit");
        };
        let effects = [
            Effect::Transfer {
                asset: X,
                from: Holder::Account(BOB),
                to: Holder::Custody(key()),
                amount: Amount::new(10),
            },
            Effect::Transfer {
                asset: Y,
                from: Holder::Account(BOB),
                to: Holder::Custody(key()),
                amount: Amount::new(1),
            },
        ];
        assert_eq!(ledger.commit(&effects), Err(AmmError::InsufficientBalance));
        assert_eq!(ledger.balance(&Holder::Account(BOB), &X), Amount::new(10));
        assert_eq!(ledger.balance(&Holder::Custody(key()), &X), Amount::ZERO);
    }

    #[test]
    fn reopening_fails() {
        let mut ledger = opened();
        assert!(ledger.open_custody(key(), X).is_err());
        assert!(ledger.open_share_mint(key()).is_err());
    }
}
