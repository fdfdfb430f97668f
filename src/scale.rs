//! Call-local working scale and precision normalization.
//!
//! All internal arithmetic runs at one canonical decimal scale (exponent 32
//! by default). A request at a coarser exponent has its magnitudes lifted to
//! the canonical scale on entry and its results lowered back on exit; a
//! request at a finer exponent simply becomes the working scale for that
//! call.
//!
//! The scale and every derived constant live in a [`WorkingScale`] value
//! constructed fresh per call and threaded through the computation. Nothing
//! here is shared or mutated, so concurrent calls with different exponents
//! cannot interfere.

use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, ToPrimitive};

/// Canonical working exponent: internal math runs at `10^32` unless the
/// caller requests finer precision.
pub const DEFAULT_EXPONENT: u32 = 32;

/// The decimal scale of one pricing call and its derived constants.
#[derive(Debug, Clone)]
pub struct WorkingScale {
    /// Working exponent: `max(requested, 32)`.
    exponent: u32,
    /// Integer scale unit `10^exponent`.
    unit: BigInt,
    /// Approximate real-number view of the unit, for the log/CDF seam.
    unit_real: f64,
    /// `10^(32 − requested)` when the request is coarser than canonical.
    rescale: Option<BigInt>,
}

impl WorkingScale {
    /// Build the working scale for one request exponent.
    pub fn for_exponent(requested: u8) -> Self {
        let requested = u32::from(requested);
        let exponent = requested.max(DEFAULT_EXPONENT);
        let rescale = (requested < DEFAULT_EXPONENT)
            .then(|| BigInt::from(10u8).pow(DEFAULT_EXPONENT - requested));
        let unit = BigInt::from(10u8).pow(exponent);
        // Correctly-rounded double view of the exact integer unit. Exponents
        // are capped at 255, so this never overflows to infinity.
        let unit_real = unit.to_f64().unwrap_or(f64::MAX);
        Self {
            exponent,
            unit,
            unit_real,
            rescale,
        }
    }

    /// Working exponent for this call.
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Integer scale unit `10^exponent`.
    pub fn unit(&self) -> &BigInt {
        &self.unit
    }

    /// Re-express a request magnitude at the working scale.
    ///
    /// Magnitudes at or above the canonical exponent are already on scale;
    /// coarser ones are multiplied up by the rescale factor.
    pub fn lift(&self, magnitude: &BigUint) -> BigInt {
        let value = BigInt::from(magnitude.clone());
        match &self.rescale {
            Some(factor) => value * factor,
            None => value,
        }
    }

    /// Return a working-scale result to the request's exponent.
    ///
    /// The inverse of [`lift`](Self::lift): divides by the rescale factor
    /// when the request was coarser than canonical, identity otherwise.
    pub fn lower(&self, value: BigInt) -> BigInt {
        match &self.rescale {
            Some(factor) => value / factor,
            None => value,
        }
    }

    /// Real-number view of an on-scale value: `value / 10^exponent`.
    pub fn to_real(&self, value: &BigInt) -> f64 {
        value.to_f64().unwrap_or(0.0) / self.unit_real
    }

    /// Convert a real number back to the working scale, truncating toward
    /// zero. Non-finite inputs map to zero.
    pub fn from_real(&self, x: f64) -> BigInt {
        BigInt::from_f64(x * self.unit_real).unwrap_or_default()
    }
}
