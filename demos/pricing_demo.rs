// demos/pricing_demo.rs

//! Demonstration of Black-Scholes-Merton call/put pricing
//!
//! This example shows how to:
//! 1. Price an at-the-money option at the textbook reference point
//! 2. Check put-call parity on the rounded prices
//! 3. See how calls and puts react to spot and volatility
//! 4. Handle inputs outside the pricing domain

use anyhow::Result;
use bsm_heatmap::{price, price_unrounded, OptionParameters};

fn main() -> Result<()> {
    println!("Black-Scholes-Merton Pricing Demo");
    println!("=================================");

    let (s, k, t, r, vol) = (100.0, 100.0, 1.0, 0.05, 0.2);
    println!("\nStep 1: Reference point S={s}, K={k}, T={t}, r={r}, vol={vol}");
    let result = price(s, k, t, r, vol)?;
    println!("  {result}");

    let raw = price_unrounded(&OptionParameters::new(s, k, t, r, vol)?)?;
    println!(
        "  Unrounded: call={:.6}, put={:.6}",
        raw.call_price, raw.put_price
    );

    println!("\nStep 2: Put-call parity");
    let lhs = result.call_price - result.put_price;
    let rhs = s - k * (-r * t).exp();
    println!("  C - P = {lhs:.4}, S - K*exp(-rT) = {rhs:.4}, diff = {:.4}", lhs - rhs);

    println!("\nStep 3: Sensitivities");
    println!("  Spot | Call  | Put");
    for spot in [80.0, 90.0, 100.0, 110.0, 120.0] {
        let p = price(spot, k, t, r, vol)?;
        println!("  {spot:>4.0} | {:>5.2} | {:>5.2}", p.call_price, p.put_price);
    }
    println!("  Vol  | Call  | Put");
    for v in [0.1, 0.2, 0.3, 0.4] {
        let p = price(s, k, t, r, v)?;
        println!("  {v:>4.2} | {:>5.2} | {:>5.2}", p.call_price, p.put_price);
    }

    println!("\nStep 4: Invalid inputs");
    for (label, strike, vol) in [("K = 0", 0.0, 0.2), ("vol = 0", 100.0, 0.0)] {
        match price(s, strike, t, r, vol) {
            Ok(p) => println!("  {label}: unexpectedly priced {p}"),
            Err(e) => println!("  {label}: {e} -> \"{}\"", e.user_message()),
        }
    }

    Ok(())
}
