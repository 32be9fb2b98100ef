#![allow(dead_code)] // Each test crate uses a different subset of helpers

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Normal};

use bsm_heatmap::{OptionParameters, RawInputs};

/// Textbook at-the-money point: call 10.45, put 5.57.
pub fn reference_params() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).expect("reference point is valid")
}

/// Deterministic RNG so randomized sweeps are reproducible
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(123456)
}

/// Random point inside the ranges a user would realistically enter.
pub fn random_params(rng: &mut StdRng) -> OptionParameters {
    OptionParameters::new(
        rng.gen_range(10.0..150.0),
        rng.gen_range(10.0..150.0),
        rng.gen_range(0.05..3.0),
        rng.gen_range(-0.02..0.10),
        rng.gen_range(0.01..1.0),
    )
    .expect("sampled parameters are in the pricing domain")
}

/// Independent Black-Scholes-Merton prices using statrs' normal CDF.
pub fn statrs_prices(p: &OptionParameters) -> (f64, f64) {
    let n = Normal::new(0.0, 1.0).unwrap();
    let sqrt_t = p.time_to_maturity.sqrt();
    let d1 = ((p.spot / p.strike).ln()
        + (p.risk_free_rate + 0.5 * p.volatility * p.volatility) * p.time_to_maturity)
        / (p.volatility * sqrt_t);
    let d2 = d1 - p.volatility * sqrt_t;
    let df = (-p.risk_free_rate * p.time_to_maturity).exp();
    let call = p.spot * n.cdf(d1) - p.strike * df * n.cdf(d2);
    let put = p.strike * df * n.cdf(-d2) - p.spot * n.cdf(-d1);
    (call, put)
}

/// Form values for the five fields plus slider positions.
pub fn raw_inputs(fields: [&str; 5], spot: (f64, f64), vol_pct: (f64, f64)) -> RawInputs {
    RawInputs {
        spot: fields[0].to_string(),
        strike: fields[1].to_string(),
        time_to_maturity: fields[2].to_string(),
        risk_free_rate: fields[3].to_string(),
        volatility: fields[4].to_string(),
        spot_min: spot.0,
        spot_max: spot.1,
        vol_min_pct: vol_pct.0,
        vol_max_pct: vol_pct.1,
    }
}

pub fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: expected {expected}, got {actual} (tolerance {tol})"
    );
}
