//! Snapshot builders shared by the engine's unit and property tests.

use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, FeeRate, RegistryIndex, Shares,
};
use crate::state::{PoolRecord, RegistryEntry, ReservePair, ShareLedger};

use super::{PoolContext, Wallet};

pub(crate) const ASSET_A: AssetId = AssetId::from_bytes([0xa1; 32]);
pub(crate) const ASSET_B: AssetId = AssetId::from_bytes([0xb2; 32]);
pub(crate) const ALICE: AccountId = AccountId::from_bytes([0x11; 32]);

pub(crate) fn pool(fee_bps: u16, reserve_a: u64, reserve_b: u64, supply: u64) -> PoolContext {
    let Ok(fee) = FeeRate::new(BasisPoints::new(fee_bps)) else {
        panic!("valid fee {fee_bps}");
    };
    let Ok(pair) = AssetPair::new(ASSET_A, ASSET_B) else {
        panic!("distinct assets");
    };
    let index = RegistryIndex::new(1);
    PoolContext::new(
        RegistryEntry::new(AccountId::from_bytes([0xee; 32]), index, fee),
        PoolRecord::new(index, pair),
        ReservePair::new(Amount::new(reserve_a), Amount::new(reserve_b)),
        ShareLedger::new(Shares::new(supply)),
    )
}

pub(crate) fn wallet(a: u64, b: u64, shares: u64) -> Wallet {
    Wallet::new(ALICE, Amount::new(a), Amount::new(b), Shares::new(shares))
}
