//! Pool lifecycle walkthrough.
//!
//! Creates a registry with a 0.30% fee, opens a pool, lets two providers
//! deposit, runs a few swaps in both directions and finally drains the
//! pool again, printing balances at every step.
//!
//! # Run
//!
//! ```bash
//! cargo run --example pool_lifecycle
//! ```

use pairpool::config::{PoolConfig, RegistryConfig};
use pairpool::domain::{AccountId, Amount, AssetId, BasisPoints, RegistryIndex, SwapDirection};
use pairpool::engine::Holder;
use pairpool::host::Exchange;
use pairpool::traits::TokenLedger;

const UNIT: u64 = 1_000_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Constant-product pool lifecycle ===\n");

    let admin = AccountId::from_bytes([0xad; 32]);
    let alice = AccountId::from_bytes([0x01; 32]);
    let bob = AccountId::from_bytes([0x02; 32]);
    let carol = AccountId::from_bytes([0x03; 32]);
    let usd = AssetId::from_bytes([0x0a; 32]);
    let eth = AssetId::from_bytes([0x0b; 32]);

    let mut ex = Exchange::in_memory();

    // ── 1. Registry and pool ────────────────────────────────────────────
    let index = RegistryIndex::new(1);
    let registry = ex.create_registry(&RegistryConfig::new(admin, BasisPoints::new(30), index))?;
    let record = ex.create_pool(&PoolConfig::new(index, usd, eth))?;
    let pool = record.key();
    println!("{registry}");
    println!("Pool {pool} is {}", ex.phase(&pool));

    // ── 2. Fund wallets ─────────────────────────────────────────────────
    for account in [alice, bob] {
        ex.ledger_mut().credit(account, usd, Amount::new(3_000 * UNIT))?;
        ex.ledger_mut().credit(account, eth, Amount::new(UNIT))?;
    }
    ex.ledger_mut().credit(carol, usd, Amount::new(500 * UNIT))?;

    // ── 3. Deposits ─────────────────────────────────────────────────────
    let first = ex.add_liquidity(&pool, alice, Amount::new(2_000 * UNIT), Amount::new(UNIT))?;
    println!("\nAlice minted {} shares", first.minted);

    let quote = ex.quote_deposit(&pool, Amount::new(3_000 * UNIT), Amount::new(UNIT / 2))?;
    println!(
        "Bob offers 3000 USD + 0.5 ETH, pool takes {} + {}",
        quote.used_a, quote.used_b
    );
    let second = ex.add_liquidity(&pool, bob, Amount::new(3_000 * UNIT), Amount::new(UNIT / 2))?;
    println!("Bob minted {} shares, reserves now {}", second.minted, second.reserves);

    // ── 4. Swaps ────────────────────────────────────────────────────────
    let quote = ex.quote_swap(&pool, SwapDirection::AToB, Amount::new(300 * UNIT))?;
    println!(
        "\nCarol quotes 300 USD → {} ETH (fee {})",
        quote.amount_out, quote.fee
    );
    let bought = ex.swap(
        &pool,
        carol,
        SwapDirection::AToB,
        Amount::new(300 * UNIT),
        quote.amount_out,
    )?;
    let sold = ex.swap(&pool, carol, SwapDirection::BToA, bought.amount_out, Amount::ZERO)?;
    println!(
        "Carol round-tripped and got back {} USD, reserves {}",
        sold.amount_out, sold.reserves
    );

    // ── 5. Withdrawals ──────────────────────────────────────────────────
    for (name, account) in [("Alice", alice), ("Bob", bob)] {
        let held = ex.ledger().share_balance(&pool, &account);
        let out = ex.withdraw_liquidity(&pool, account, held)?;
        println!(
            "\n{name} burned {} shares for {} USD + {} ETH",
            out.burned, out.amount_a, out.amount_b
        );
        let wallet_usd = ex.ledger().balance(&Holder::Account(account), &usd);
        let wallet_eth = ex.ledger().balance(&Holder::Account(account), &eth);
        println!("  wallet: {wallet_usd} USD, {wallet_eth} ETH");
    }

    let view = ex.pool_view(&pool)?;
    println!("\nPool {} with reserves {}", view.phase, view.reserves);
    Ok(())
}
