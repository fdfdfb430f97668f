//! # black76
//!
//! Deterministic fixed-point Black-76 pricing precompile for shared
//! validation environments.
//!
//! Every participant in a validation network must derive the bit-identical
//! call/put/delta triple from the same request bytes. Floating-point
//! arithmetic cannot guarantee that across hardware and compilers, so the
//! core runs entirely on arbitrary-precision integers at a caller-chosen
//! decimal scale, with one tightly-bounded real-number seam for the log and
//! normal-CDF evaluations.
//!
//! ## Architecture
//!
//! - **`codec`** — Wire decoding (61-byte request) and encoding (96-byte response)
//! - **`scale`** — Call-local working scale and precision normalization
//! - **`engine`** — Fixed-point Black-76 call/put/delta evaluation
//! - **`numerics`** — Deterministic standard-normal CDF primitive
//! - **`precompile`** — The `required_gas`/`run` call contract and fault boundary
//!
//! ## Design
//!
//! - **No shared mutable state.** The working scale and its derived constants
//!   are built fresh per call and threaded through the computation, so
//!   concurrent calls with different exponents cannot interfere.
//! - **No panics escape.** Library code returns [`Result`]; the `run`
//!   boundary additionally contains unexpected faults and surfaces them as
//!   structured errors.
//! - **Traits at the seams.** The CDF ([`NormalCdf`]) and the call contract
//!   ([`PricingPrecompile`]) are traits, so deployments can substitute a
//!   different deterministic CDF or a delegated native engine. All trait
//!   implementations must be `Send + Sync`.
//! - **Edge cases by substitution.** Zero strike, zero forward, zero
//!   volatility, and zero time are handled by explicit early returns or
//!   one-unit substitutions, never raised as errors.
//!
//! ## Example
//!
//! ```
//! use black76::{Black76, PricingPrecompile};
//!
//! // 61-byte request: 1 week to expiry, everything else zero, exponent 32.
//! let mut request = vec![0u8; 61];
//! request[0..4].copy_from_slice(&604_800u32.to_be_bytes());
//! request[60] = 32;
//!
//! let precompile = Black76::new();
//! assert_eq!(precompile.required_gas(&request), black76::BLACK76_GAS);
//! let response = precompile.run(&request).unwrap();
//! assert_eq!(response.len(), 96);
//! ```

pub mod codec;
pub mod engine;
pub mod error;
pub mod numerics;
pub mod precompile;
pub mod scale;
pub mod types;

#[doc(inline)]
pub use engine::Black76Engine;
#[doc(inline)]
pub use error::{Black76Error, Result};
#[doc(inline)]
pub use numerics::{AbramowitzStegunCdf, NormalCdf};
#[doc(inline)]
pub use precompile::{Black76, PricingPrecompile, BLACK76_GAS};
#[doc(inline)]
pub use types::{OptionQuote, PricingResult};
