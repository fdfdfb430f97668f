//! Property-based tests using proptest.
//!
//! These verify the arbitrage-consistency invariants across random inputs
//! rather than fixed examples: put-call parity, price bounds, and
//! monotonicity in forward and strike.
//!
//! Tolerances: parity is exact in the integer arithmetic by construction,
//! but the normal-CDF approximation (≈7.5e-8 absolute error) can flip the
//! wrapped-parity branch when the true put price is within that error of
//! zero, so parity is asserted to a small relative tolerance rather than a
//! single fixed-point unit. Bounds are asserted exactly — the engine clamps
//! guarantee them in integer space.

use black76::{Black76Engine, OptionQuote};
use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;
use proptest::prelude::*;

const SECONDS_PER_YEAR: u32 = 31_536_000;

/// 10^32, the canonical working unit.
fn unit() -> BigUint {
    BigUint::from(10u8).pow(32)
}

/// Build a quote at exponent 32 from hundredth-scaled inputs.
fn quote_from_cents(
    secs: u32,
    discount_pct: u32,
    vol_pct: u32,
    fwd_cents: u32,
    strike_cents: u32,
) -> OptionQuote {
    let cent = unit() / BigUint::from(100u8);
    OptionQuote {
        time_to_expiry_secs: secs,
        discount: BigUint::from(discount_pct) * &cent,
        volatility: BigUint::from(vol_pct) * &cent,
        forward: BigUint::from(fwd_cents) * &cent,
        strike: BigUint::from(strike_cents) * &cent,
        exponent: 32,
    }
}

/// Real-number view of a magnitude at scale 32.
fn as_real(v: &BigUint) -> f64 {
    v.to_f64().unwrap() / 1e32
}

// --- Property 1: put-call parity ---

proptest! {
    /// For non-degenerate inputs, `call − put == discounted_forward −
    /// discounted_strike` up to the CDF approximation tolerance.
    #[test]
    fn put_call_parity_holds(
        secs in 2_592_000u32..=2 * SECONDS_PER_YEAR,
        discount_pct in 50u32..=100,
        vol_pct in 20u32..=80,
        fwd_cents in 8_000u32..=12_000,
        strike_cents in 8_000u32..=12_000,
    ) {
        let engine = Black76Engine::new();
        let q = quote_from_cents(secs, discount_pct, vol_pct, fwd_cents, strike_cents);
        let r = engine.price(&q);

        let u = unit();
        let d_fwd = &q.forward * &q.discount / &u;
        let d_strike = &q.strike * &q.discount / &u;

        let lhs = BigInt::from(r.call) - BigInt::from(r.put);
        let rhs = BigInt::from(d_fwd.clone()) - BigInt::from(d_strike);
        let diff = (lhs - rhs).to_f64().unwrap().abs() / 1e32;

        let tolerance = 1e-5 * (as_real(&d_fwd) + 1.0);
        prop_assert!(
            diff <= tolerance,
            "parity violated by {diff} (tolerance {tolerance})"
        );
    }
}

// --- Property 2: bounds ---

proptest! {
    /// `0 ≤ call ≤ discounted_forward`, `0 ≤ put ≤ discounted_strike`,
    /// `0 ≤ delta ≤ discount`, exactly, for arbitrary field magnitudes and
    /// exponents on both sides of the canonical 32.
    #[test]
    fn results_are_bounded(
        secs in any::<u32>(),
        discount_raw in any::<u64>(),
        vol_raw in any::<u64>(),
        fwd_raw in any::<u128>(),
        strike_raw in any::<u128>(),
        exponent in 0u8..=64,
    ) {
        let engine = Black76Engine::new();
        let q = OptionQuote {
            time_to_expiry_secs: secs,
            discount: BigUint::from(discount_raw),
            volatility: BigUint::from(vol_raw),
            forward: BigUint::from(fwd_raw),
            strike: BigUint::from(strike_raw),
            exponent,
        };
        let r = engine.price(&q);

        let one = BigUint::from(10u8).pow(u32::from(exponent));
        let d_fwd = &q.forward * &q.discount / &one;
        let d_strike = &q.strike * &q.discount / &one;

        prop_assert!(r.call <= d_fwd, "call {} > discounted forward {}", r.call, d_fwd);
        prop_assert!(r.put <= d_strike, "put {} > discounted strike {}", r.put, d_strike);
        prop_assert!(r.delta <= q.discount, "delta {} > discount {}", r.delta, q.discount);
    }
}

// --- Property 3: monotonicity in forward ---

proptest! {
    /// Holding other inputs fixed, the call price is non-decreasing in the
    /// forward price (up to the CDF approximation tolerance).
    #[test]
    fn call_is_non_decreasing_in_forward(
        secs in 2_592_000u32..=2 * SECONDS_PER_YEAR,
        discount_pct in 50u32..=100,
        vol_pct in 20u32..=80,
        fwd_lo in 8_000u32..=12_000,
        fwd_step in 0u32..=2_000,
        strike_cents in 8_000u32..=12_000,
    ) {
        let engine = Black76Engine::new();
        let fwd_hi = fwd_lo + fwd_step;

        let lo = engine.price(&quote_from_cents(secs, discount_pct, vol_pct, fwd_lo, strike_cents));
        let hi = engine.price(&quote_from_cents(secs, discount_pct, vol_pct, fwd_hi, strike_cents));

        let call_lo = as_real(&lo.call);
        let call_hi = as_real(&hi.call);
        let slack = 1e-5 * (f64::from(fwd_hi) / 100.0);
        prop_assert!(
            call_hi + slack >= call_lo,
            "call decreased from {call_lo} to {call_hi} as forward rose"
        );
    }
}

// --- Property 4: monotonicity in strike ---

proptest! {
    /// Holding other inputs fixed, the call price is non-increasing in the
    /// strike price (up to the CDF approximation tolerance).
    #[test]
    fn call_is_non_increasing_in_strike(
        secs in 2_592_000u32..=2 * SECONDS_PER_YEAR,
        discount_pct in 50u32..=100,
        vol_pct in 20u32..=80,
        fwd_cents in 8_000u32..=12_000,
        strike_lo in 8_000u32..=12_000,
        strike_step in 0u32..=2_000,
    ) {
        let engine = Black76Engine::new();
        let strike_hi = strike_lo + strike_step;

        let lo = engine.price(&quote_from_cents(secs, discount_pct, vol_pct, fwd_cents, strike_lo));
        let hi = engine.price(&quote_from_cents(secs, discount_pct, vol_pct, fwd_cents, strike_hi));

        let call_lo = as_real(&lo.call);
        let call_hi = as_real(&hi.call);
        let slack = 1e-5 * (f64::from(fwd_cents) / 100.0);
        prop_assert!(
            call_hi <= call_lo + slack,
            "call rose from {call_lo} to {call_hi} as strike rose"
        );
    }
}

// --- Property 5: determinism ---

proptest! {
    /// Pricing the same quote twice yields byte-identical results.
    #[test]
    fn pricing_is_deterministic(
        secs in any::<u32>(),
        discount_raw in any::<u64>(),
        vol_raw in any::<u64>(),
        fwd_raw in any::<u128>(),
        strike_raw in any::<u128>(),
        exponent in 0u8..=64,
    ) {
        let engine = Black76Engine::new();
        let q = OptionQuote {
            time_to_expiry_secs: secs,
            discount: BigUint::from(discount_raw),
            volatility: BigUint::from(vol_raw),
            forward: BigUint::from(fwd_raw),
            strike: BigUint::from(strike_raw),
            exponent,
        };
        prop_assert_eq!(engine.price(&q), engine.price(&q));
    }
}
