//! The precompile call contract: gas quoting and byte-in/byte-out pricing.
//!
//! A precompile is a built-in, native-speed operation exposed to a virtual
//! machine's instruction set. This module defines the capability as a trait
//! so a deployment can select between the in-process engine defined here and
//! a delegated native engine satisfying the same contract; both must produce
//! the canonical 96-byte success layout bit-for-bit.
//!
//! # Fault containment
//!
//! A single malformed or adversarial input must never crash the shared
//! execution environment. The pricing step runs under
//! [`std::panic::catch_unwind`]; an internal fault surfaces as a structured
//! [`Black76Error::InternalFault`] instead of being swallowed or allowed to
//! propagate into the host.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::codec::{decode_quote, encode_result};
use crate::engine::Black76Engine;
use crate::error::{Black76Error, Result};

/// Fixed gas cost of one pricing call. Quoted regardless of input and
/// callable before [`PricingPrecompile::run`].
pub const BLACK76_GAS: u64 = 300;

/// The pricing-engine capability: cost quote plus byte-level evaluation.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; calls with different inputs and
/// exponents may run concurrently and must not interfere.
pub trait PricingPrecompile: Send + Sync {
    /// Gas required to service `input`. A fixed constant for this
    /// precompile — never derived from the work performed.
    fn required_gas(&self, input: &[u8]) -> u64;

    /// Evaluate the request and return the 96-byte response.
    ///
    /// # Errors
    /// [`Black76Error::InvalidInputLength`] for a malformed request,
    /// [`Black76Error::InternalFault`] for a contained computational fault.
    fn run(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// In-process Black-76 precompile backed by [`Black76Engine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Black76 {
    engine: Black76Engine,
}

impl Black76 {
    /// Precompile with the default deterministic engine.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PricingPrecompile for Black76 {
    fn required_gas(&self, _input: &[u8]) -> u64 {
        BLACK76_GAS
    }

    fn run(&self, input: &[u8]) -> Result<Vec<u8>> {
        let quote = decode_quote(input)?;
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.engine.price(&quote)))
            .map_err(|payload| Black76Error::InternalFault {
                message: panic_message(payload.as_ref()),
            })?;
        Ok(encode_result(&result)?.to_vec())
    }
}

/// Best-effort extraction of a panic payload's message.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "pricing engine panicked".to_string()
    }
}
