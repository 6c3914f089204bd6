//! Side effects the host applies to the token ledger.
//!
//! Engine operations never touch balances.  They return a list of
//! [`Effect`]s in application order and the host hands the whole list to
//! [`TokenLedger::commit`](crate::traits::TokenLedger::commit).

use core::fmt;

use crate::domain::{AccountId, Amount, AssetId, Shares};
use crate::state::PoolKey;

/// Owner of a balance in the token ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holder {
    /// A participant account.
    Account(AccountId),
    /// The custody account of a pool; its balance is the pool's reserve.
    Custody(PoolKey),
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(id) => write!(f, "account {id}"),
            Self::Custody(key) => write!(f, "custody {key}"),
        }
    }
}

/// Direction of a share-supply change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SupplyChange {
    /// Create shares and credit them to the account.
    Mint,
    /// Debit shares from the account and destroy them.
    Burn,
}

/// One ledger instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Open a zero-balance custody account for `asset` owned by `pool`.
    OpenCustody {
        /// Owning pool.
        pool: PoolKey,
        /// Asset held by the custody account.
        asset: AssetId,
    },
    /// Open the pool's share supply counter at zero.
    OpenShareMint {
        /// Owning pool.
        pool: PoolKey,
    },
    /// Move `amount` of `asset` from one holder to another.
    Transfer {
        /// Asset moved.
        asset: AssetId,
        /// Debited holder.
        from: Holder,
        /// Credited holder.
        to: Holder,
        /// Raw amount.
        amount: Amount,
    },
    /// Mint or burn `amount` of `pool`'s shares for `account`.
    Supply {
        /// Pool whose shares change.
        pool: PoolKey,
        /// Account credited (mint) or debited (burn).
        account: AccountId,
        /// Share count.
        amount: Shares,
        /// Mint or burn.
        change: SupplyChange,
    },
}

impl Effect {
    /// Transfer from a participant into a pool's custody.
    pub(crate) const fn deposit(
        pool: PoolKey,
        account: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Self {
        Self::Transfer {
            asset,
            from: Holder::Account(account),
            to: Holder::Custody(pool),
            amount,
        }
    }

    /// Transfer from a pool's custody to a participant.
    pub(crate) const fn payout(
        pool: PoolKey,
        account: AccountId,
        asset: AssetId,
        amount: Amount,
    ) -> Self {
        Self::Transfer {
            asset,
            from: Holder::Custody(pool),
            to: Holder::Account(account),
            amount,
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenCustody { pool, asset } => write!(f, "open custody {asset} for {pool}"),
            Self::OpenShareMint { pool } => write!(f, "open share mint for {pool}"),
            Self::Transfer {
                asset,
                from,
                to,
                amount,
            } => write!(f, "transfer {amount} of {asset} from {from} to {to}"),
            Self::Supply {
                pool,
                account,
                amount,
                change,
            } => match change {
                SupplyChange::Mint => write!(f, "mint {amount} shares of {pool} to {account}"),
                SupplyChange::Burn => write!(f, "burn {amount} shares of {pool} from {account}"),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AssetPair, RegistryIndex};

    fn key() -> PoolKey {
        let Ok(pair) = AssetPair::new(AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]))
        else {
            panic!("distinct assets");
        };
        PoolKey::new(RegistryIndex::new(0), pair)
    }

    #[test]
    fn deposit_and_payout_are_mirrored() {
        let alice = AccountId::from_bytes([7; 32]);
        let asset = AssetId::from_bytes([1; 32]);
        let Effect::Transfer { from, to, .. } = Effect::deposit(key(), alice, asset, Amount::new(5))
        else {
            panic!("expected Transfer");
        };
        let Effect::Transfer {
            from: back_from,
            to: back_to,
            ..
        } = Effect::payout(key(), alice, asset, Amount::new(5))
        else {
            panic!("expected Transfer");
        };
        assert_eq!(from, back_to);
        assert_eq!(to, back_from);
        assert_eq!(to, Holder::Custody(key()));
    }

    #[test]
    fn display_supply() {
        let e = Effect::Supply {
            pool: key(),
            account: AccountId::from_bytes([0xaa; 32]),
            amount: Shares::new(3),
            change: SupplyChange::Burn,
        };
        assert_eq!(
            e.to_string(),
            "burn 3 shares of #0:01010101…/02020202… from aaaaaaaa…"
        );
    }
}
