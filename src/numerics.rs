//! Deterministic standard-normal CDF primitive.
//!
//! Every validator must reproduce Φ(x) bit-for-bit, so the CDF is a
//! fixed-coefficient rational approximation rather than a hardware
//! transcendental whose last-bit rounding is unspecified. The engine takes
//! the CDF through a trait so deployments can substitute a different
//! deterministic approximation without touching the pricing code.
//!
//! # References
//! - Abramowitz, M. & Stegun, I. "Handbook of Mathematical Functions" (1972),
//!   formula 26.2.17 (max absolute error ≈ 7.5e-8)

/// Standard normal cumulative distribution function Φ(x).
///
/// # Thread Safety
/// Implementations must be `Send + Sync`: the CDF is the only object shared
/// between concurrent pricing calls and must therefore be stateless.
pub trait NormalCdf: Send + Sync {
    /// Φ(x) for mean 0, standard deviation 1. Must be deterministic across
    /// platforms and total on all finite inputs.
    fn cdf(&self, x: f64) -> f64;
}

/// Abramowitz-Stegun 26.2.17 rational approximation of Φ.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbramowitzStegunCdf;

/// Polynomial coefficients of A&S 26.2.17.
const A: [f64; 5] = [
    0.319381530,
    -0.356563782,
    1.781477937,
    -1.821255978,
    1.330274429,
];
/// Rational transform parameter of A&S 26.2.17.
const P: f64 = 0.2316419;
/// 1/√(2π).
const FRAC_1_SQRT_2_PI: f64 = 0.398942280401432677939946059934;
/// |x| beyond which Φ saturates at this approximation's precision.
const TAIL_CUTOFF: f64 = 38.0;

impl NormalCdf for AbramowitzStegunCdf {
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.5;
        }
        if x < -TAIL_CUTOFF {
            return 0.0;
        }
        if x > TAIL_CUTOFF {
            return 1.0;
        }

        // Symmetry fold: Φ(−x) = 1 − Φ(x).
        let (z, negated) = if x < 0.0 { (-x, true) } else { (x, false) };

        let t = 1.0 / (1.0 + P * z);
        let pdf = FRAC_1_SQRT_2_PI * (-0.5 * z * z).exp();
        let poly = t * (A[0] + t * (A[1] + t * (A[2] + t * (A[3] + t * A[4]))));
        let phi = 1.0 - pdf * poly;

        if negated { 1.0 - phi } else { phi }
    }
}
