//! Core domain types for the pricing request/response cycle.
//!
//! Quantities are fixed-point: an unsigned arbitrary-precision magnitude
//! ([`BigUint`]) paired with an implicit decimal scale `10^exponent`. The
//! exponent is carried once on the quote rather than on every field — all
//! five fixed-point fields of a request share the same scale by contract.
//!
//! # Scale discipline
//!
//! Two fixed-point values may only be added or compared when they share a
//! scale. Multiplying two on-scale values yields a value at twice the scale
//! and must be followed by a division by the scale unit; dividing requires a
//! pre-multiplication. The engine and [`WorkingScale`](crate::scale::WorkingScale)
//! enforce this discipline; these types just carry the magnitudes.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A decoded pricing request.
///
/// Ephemeral: constructed fresh from the request bytes, discarded after the
/// result is produced. All magnitudes are expressed at `10^exponent` except
/// `time_to_expiry_secs`, which is a plain count of seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Seconds until expiry. Not a fixed-point amount; never rescaled.
    pub time_to_expiry_secs: u32,
    /// Discount factor applied to forward and strike.
    pub discount: BigUint,
    /// Annualized volatility σ.
    pub volatility: BigUint,
    /// Forward price F.
    pub forward: BigUint,
    /// Strike price K.
    pub strike: BigUint,
    /// Decimal scale exponent of the five fixed-point fields.
    pub exponent: u8,
}

/// The three outputs of one pricing call, at the caller's requested exponent.
///
/// # Invariants (post-computation)
/// - `0 ≤ call ≤ discounted_forward`
/// - `0 ≤ put ≤ discounted_strike`
/// - `0 ≤ delta ≤ discount`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// European call price.
    pub call: BigUint,
    /// European put price.
    pub put: BigUint,
    /// Call delta, scaled by the discount factor.
    pub delta: BigUint,
}
