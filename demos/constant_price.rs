//! Constant Price pool walkthrough.
//!
//! A fixed-rate pool where one token B is always worth four token A.
//! Shows swaps in both directions, the rejection of single-sided
//! liquidity on this curve, and a full withdrawal.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_price --all-features
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

    println!("=== Constant Price pool (1 B = 4 A) ===\n");

    // ── 1. Boundary inputs: 0.10% trade fee, price parameter 4 ──────────
    let fees = FeesInput {
        trade_fee_numerator: 10,
        trade_fee_denominator: 10_000,
        ..FeesInput::default()
    };
    let curve = CurveInput {
        curve_type: 1,
        curve_parameters: 4,
    };

    // ── 2. Initialize through the factory ───────────────────────────────
    let mut pool = PoolFactory::from_inputs(
        fees,
        curve,
        AccountKey::from_bytes([1u8; 32]),
        AccountKey::from_bytes([2u8; 32]),
    )?;
    println!("Pool created: curve={}", pool.curve());

    // ── 3. A zero price never makes it past validation ──────────────────
    let zero_price = CurveInput {
        curve_type: 1,
        curve_parameters: 0,
    };
    if let Err(err) = PoolFactory::from_inputs(
        fees,
        zero_price,
        AccountKey::from_bytes([1u8; 32]),
        AccountKey::from_bytes([2u8; 32]),
    ) {
        println!("Zero price rejected:  {err}");
    }

    // ── 4. Seed at the fixed ratio ──────────────────────────────────────
    let seed = pool.deposit(Amount::new(400_000), Amount::new(100_000))?;
    println!("\n--- Seed ---");
    println!("  {seed}");
    println!("  Price (A per B):      {}", pool.spot_price(TradeDirection::BtoA)?);

    // ── 5. Sell 1 000 B for A ───────────────────────────────────────────
    let quote = pool.swap(SwapSpec::exact_in(TradeDirection::BtoA, Amount::new(1_000)))?;
    println!("\n--- Swap: sell 1 000 B ---");
    println!("  {quote}");

    // ── 6. Sell 8 000 A for B ───────────────────────────────────────────
    let quote = pool.swap(SwapSpec::exact_in(TradeDirection::AtoB, Amount::new(8_000)))?;
    println!("\n--- Swap: sell 8 000 A ---");
    println!("  {quote}");
    let (ra, rb) = pool.reserves();
    println!("  Reserves now:         {ra} / {rb}");

    // ── 7. Single-sided liquidity is not offered on a fixed rate ────────
    if let Err(err) = pool.deposit_single(TradeDirection::AtoB, Amount::new(1_000), Shares::ZERO) {
        println!("\nSingle-sided deposit: {err}");
    }

    // ── 8. Withdraw everything ──────────────────────────────────────────
    let out = pool.withdraw(seed.shares())?;
    println!("\n--- Withdraw ---");
    println!("  {out}");
    println!("  Share supply:         {}", pool.share_supply());

    println!("\n=== Done ===");
    Ok(())
}
