//! Black-76 forward-option pricing in fixed-point arithmetic.
//!
//! Evaluates the closed-form European call/put/delta entirely on integer
//! magnitudes at the call's [`WorkingScale`]. The only real-number excursion
//! is the log/CDF seam: moneyness and the d1/d2 distances are converted to
//! doubles, pushed through `ln` and the [`NormalCdf`] primitive, and
//! truncated back onto the working scale.
//!
//! # Formula
//! ```text
//! d1 = (σ²T/2 − ln(K/F)) / σ√T        d2 = d1 − σ√T
//! call  = D·F·Φ(d1) − D·K·Φ(d2)
//! put   = call + D·(K − F)            (parity)
//! delta = D·Φ(d1)
//! ```
//!
//! Zero volatility and zero moneyness are substituted with one smallest unit
//! before any division; zero strike and zero forward short-circuit to their
//! exact degenerate results. There is no state: each call is a single pass
//! over a fresh quote.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

use crate::numerics::{AbramowitzStegunCdf, NormalCdf};
use crate::scale::WorkingScale;
use crate::types::{OptionQuote, PricingResult};

/// Seconds in a 365-day year, the annualization denominator.
pub const SECONDS_PER_YEAR: u32 = 31_536_000;

/// Total volatility (in working-scale units) at which Φ saturates and the
/// standardized call price pins to one.
const SATURATION_VOL: u32 = 24;

/// The in-process Black-76 pricing engine.
///
/// Generic over the normal-CDF seam; the default is the crate's
/// [`AbramowitzStegunCdf`]. The engine holds no per-call state, so one
/// instance can serve concurrent calls with different exponents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Black76Engine<C: NormalCdf = AbramowitzStegunCdf> {
    cdf: C,
}

impl Black76Engine {
    /// Engine with the default deterministic CDF.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: NormalCdf> Black76Engine<C> {
    /// Engine with a caller-supplied CDF implementation.
    pub fn with_cdf(cdf: C) -> Self {
        Self { cdf }
    }

    /// Price one quote: returns call, put, and delta at the quote's exponent.
    ///
    /// Pure and infallible: every arithmetic edge case is handled by an
    /// explicit substitution or early return, never an error.
    pub fn price(&self, quote: &OptionQuote) -> PricingResult {
        let scale = WorkingScale::for_exponent(quote.exponent);
        let unit = scale.unit().clone();

        let discount = scale.lift(&quote.discount);
        let volatility = scale.lift(&quote.volatility);
        let forward = scale.lift(&quote.forward);
        let strike = scale.lift(&quote.strike);

        #[cfg(feature = "logging")]
        tracing::debug!(
            secs = quote.time_to_expiry_secs,
            exponent = quote.exponent,
            working_exponent = scale.exponent(),
            "pricing quote"
        );

        let t_annualised =
            BigInt::from(quote.time_to_expiry_secs) * &unit / BigInt::from(SECONDS_PER_YEAR);
        let total_vol = &volatility * (&t_annualised * &unit).sqrt() / &unit;
        let fwd_discounted = &forward * &discount / &unit;

        if strike.is_zero() {
            // A zero strike makes the call worth the discounted forward
            // outright and the put worthless.
            return finalize(&scale, fwd_discounted, BigInt::zero(), discount);
        }

        let strike_discounted = &strike * &discount / &unit;
        if forward.is_zero() {
            return finalize(&scale, BigInt::zero(), strike_discounted, BigInt::zero());
        }

        let moneyness = &strike * &unit / &forward;
        let (std_call, std_delta) = self.standard_call(&scale, &moneyness, &total_vol);

        // Put-call parity at the standardized scale. The sum wraps at one
        // unit: at or above it the put carries the excess, below it the put
        // is exactly zero.
        let mut std_put = &std_call + &moneyness;
        if std_put >= unit {
            std_put -= &unit;
        } else {
            std_put = BigInt::zero();
        }

        let mut call = std_call * &fwd_discounted / &unit;
        let mut put = std_put * &fwd_discounted / &unit;
        let delta = std_delta * &discount / &unit;

        // Arbitrage clamps: a call is never worth more than the discounted
        // forward, a put never more than the discounted strike, delta never
        // more than the discount. The delta clamp also absorbs the one-ulp
        // excess of the real-number unit over 10^exponent when Φ hits 1.0
        // outside the saturation branch.
        if call > fwd_discounted {
            call = fwd_discounted;
        }
        if put > strike_discounted {
            put = strike_discounted;
        }
        let delta = delta.min(discount);

        finalize(&scale, call, put, delta)
    }

    /// Standardized call price and delta for a forward of one unit.
    ///
    /// Returns `(price, delta)` on the working scale, both in `[0, unit]`.
    fn standard_call(
        &self,
        scale: &WorkingScale,
        moneyness: &BigInt,
        total_vol: &BigInt,
    ) -> (BigInt, BigInt) {
        let unit = scale.unit();

        if *total_vol >= BigInt::from(SATURATION_VOL) * unit {
            // Φ(d1) and Φ(d2·m) have saturated: the standardized call and
            // delta both pin to full scale.
            return (unit.clone(), unit.clone());
        }

        // One smallest unit stands in for an exact zero. This only keeps the
        // divisions below defined; it does not change the formula's shape.
        let vol = if total_vol.is_zero() {
            BigInt::one()
        } else {
            total_vol.clone()
        };
        let m = if moneyness.is_zero() {
            BigInt::one()
        } else {
            moneyness.clone()
        };

        let k = scale.from_real(scale.to_real(&m).ln());
        let half_variance_time = (&vol / 2) * &vol / unit;
        let d1 = (half_variance_time - &k) * unit / &vol;
        let d2 = &d1 - &vol;

        let phi_d1 = scale.from_real(self.cdf.cdf(scale.to_real(&d1)));
        let phi_d2 = scale.from_real(self.cdf.cdf(scale.to_real(&d2)));

        let d2_term = &m * phi_d2 / unit;
        let price = if phi_d1 >= d2_term {
            &phi_d1 - d2_term
        } else {
            BigInt::zero()
        };
        (price, phi_d1)
    }
}

/// Lower the three working-scale values to the request exponent and strip
/// the (always non-negative) sign.
fn finalize(scale: &WorkingScale, call: BigInt, put: BigInt, delta: BigInt) -> PricingResult {
    PricingResult {
        call: unsigned(scale.lower(call)),
        put: unsigned(scale.lower(put)),
        delta: unsigned(scale.lower(delta)),
    }
}

/// Engine outputs are non-negative by construction; a negative value here
/// would be a violated invariant and clamps to zero.
fn unsigned(value: BigInt) -> BigUint {
    value.to_biguint().unwrap_or_default()
}
