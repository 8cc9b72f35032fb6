//! Constant Product pool walkthrough (`x · y = k`).
//!
//! Initializes a pool from raw boundary inputs, seeds it, swaps in both
//! directions (once through a host), joins with an exact share count and
//! finally drains the pool.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=tandem_amm=debug cargo run --example constant_product --all-features
//! ```

use tandem_amm::config::{CurveInput, FeesInput};
use tandem_amm::domain::{AccountKey, Amount, Shares, SwapSpec, TradeDirection};
use tandem_amm::factory::PoolFactory;
use tandem_amm::traits::{LiquidityPool, SwapPool};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    println!("=== Constant Product pool (x · y = k) ===\n");

    // ── 1. Boundary inputs: 0.25% trade fee, 0.05% of it to the owner ──
    let fees = FeesInput {
        trade_fee_numerator: 25,
        trade_fee_denominator: 10_000,
        owner_trade_fee_numerator: 5,
        owner_trade_fee_denominator: 10_000,
        owner_withdraw_fee_numerator: 1,
        owner_withdraw_fee_denominator: 1_000,
        host_fee_numerator: 20,
        host_fee_denominator: 100,
    };
    let curve = CurveInput {
        curve_type: 0,
        curve_parameters: 0,
    };
    let authority = AccountKey::from_bytes([1u8; 32]);
    let fee_account = AccountKey::from_bytes([2u8; 32]);
    let host = AccountKey::from_bytes([3u8; 32]);

    // ── 2. Initialize through the factory ───────────────────────────────
    let mut pool = PoolFactory::from_inputs(fees, curve, authority, fee_account)?;
    println!("Pool created: curve={}, fees={}", pool.curve(), pool.fee_schedule());

    // ── 3. Seed the pool ────────────────────────────────────────────────
    let seed = pool.deposit(Amount::new(1_000_000), Amount::new(4_000_000))?;
    println!("\n--- Seed ---");
    println!("  {seed}");
    println!("  Spot price (B per A): {}", pool.spot_price(TradeDirection::AtoB)?);
    println!("  Invariant k:          {}", pool.invariant());

    // ── 4. Swap 10 000 A for B ──────────────────────────────────────────
    let quote = pool.swap(
        SwapSpec::exact_in(TradeDirection::AtoB, Amount::new(10_000))
            .with_minimum_out(Amount::new(39_000)),
    )?;
    println!("\n--- Swap: sell 10 000 A ---");
    println!("  {quote}");
    println!("  Fee account gets:     {}", quote.fee_account_amount());
    println!("  Invariant k:          {}", pool.invariant());

    // ── 5. Swap B back through a host ───────────────────────────────────
    let quote = pool.swap(
        SwapSpec::exact_in(TradeDirection::BtoA, Amount::new(20_000)).with_host(host),
    )?;
    println!("\n--- Swap: sell 20 000 B via host ---");
    println!("  {quote}");
    println!("  Host gets:            {}", quote.host_fee());

    // ── 6. A second provider joins with an exact share count ────────────
    let joined = pool.deposit_exact_shares(
        Shares::new(100_000),
        Amount::new(60_000),
        Amount::new(210_000),
    )?;
    println!("\n--- Deposit exact shares ---");
    println!("  {joined}");
    println!("  Share supply:         {}", pool.share_supply());

    // ── 7. The second provider leaves, paying the withdraw fee ──────────
    let left = pool.withdraw(joined.shares())?;
    println!("\n--- Withdraw second provider ---");
    println!("  {left}");

    // ── 8. The seed provider drains the pool ────────────────────────────
    let drained = pool.withdraw(seed.shares())?;
    println!("\n--- Withdraw seed provider ---");
    println!("  {drained}");
    let (ra, rb) = pool.reserves();
    println!("  Reserves now:         {ra} / {rb}");

    println!("\n=== Done ===");
    Ok(())
}
