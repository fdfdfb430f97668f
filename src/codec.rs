//! Wire codec: request decoding and response encoding.
//!
//! The request body is a fixed 61-byte layout of big-endian unsigned fields.
//! On-chain callers prepend a 4-byte function selector; it is dropped without
//! inspection — dispatching on it is the host's concern, not this crate's.
//!
//! ```text
//! [0,4)    time to expiry, seconds (u32)
//! [4,12)   discount factor         (u64-wide fixed point)
//! [12,28)  volatility              (u128-wide fixed point)
//! [28,44)  forward price           (u128-wide fixed point)
//! [44,60)  strike price            (u128-wide fixed point)
//! [60]     decimal scale exponent
//! ```
//!
//! The response is exactly 96 bytes: call, put, delta, each big-endian and
//! zero-padded to a 32-byte word.

use num_bigint::BigUint;

use crate::error::{Black76Error, Result};
use crate::types::{OptionQuote, PricingResult};

/// Length of the request body after any selector is stripped.
pub const BODY_LEN: usize = 61;
/// Length of the optional leading function selector.
pub const SELECTOR_LEN: usize = 4;
/// Width of one output word.
pub const WORD_LEN: usize = 32;
/// Length of a successful response: three 32-byte words.
pub const OUTPUT_LEN: usize = 3 * WORD_LEN;

/// Decode a request into an [`OptionQuote`].
///
/// If the input is longer than 61 bytes the first 4 are treated as a
/// caller-supplied selector and dropped; the remainder must then be exactly
/// 61 bytes. Inputs of 61 bytes or fewer must be exactly 61 bytes. All
/// fields are unsigned, so no value-range validation is needed.
///
/// # Errors
/// Returns [`Black76Error::InvalidInputLength`] when the length rule is
/// violated. `got` reports the original input length, selector included.
pub fn decode_quote(input: &[u8]) -> Result<OptionQuote> {
    let body = if input.len() > BODY_LEN {
        &input[SELECTOR_LEN..]
    } else {
        input
    };
    if body.len() != BODY_LEN {
        return Err(Black76Error::InvalidInputLength { got: input.len() });
    }

    let mut secs = [0u8; 4];
    secs.copy_from_slice(&body[0..4]);

    Ok(OptionQuote {
        time_to_expiry_secs: u32::from_be_bytes(secs),
        discount: BigUint::from_bytes_be(&body[4..12]),
        volatility: BigUint::from_bytes_be(&body[12..28]),
        forward: BigUint::from_bytes_be(&body[28..44]),
        strike: BigUint::from_bytes_be(&body[44..60]),
        exponent: body[60],
    })
}

/// Encode a [`PricingResult`] into the 96-byte response layout.
///
/// # Errors
/// Returns [`Black76Error::InternalFault`] if any magnitude needs more than
/// 32 bytes. The engine's arbitrage clamps and scale discipline bound every
/// well-formed result below this limit, so hitting it indicates a violated
/// invariant — it is surfaced rather than silently truncated.
pub fn encode_result(result: &PricingResult) -> Result<[u8; OUTPUT_LEN]> {
    let mut output = [0u8; OUTPUT_LEN];
    fill_word(&mut output[0..WORD_LEN], &result.call, "call")?;
    fill_word(&mut output[WORD_LEN..2 * WORD_LEN], &result.put, "put")?;
    fill_word(&mut output[2 * WORD_LEN..], &result.delta, "delta")?;
    Ok(output)
}

/// Write `value` big-endian, right-aligned into a zero-filled 32-byte word.
fn fill_word(word: &mut [u8], value: &BigUint, field: &str) -> Result<()> {
    let bytes = value.to_bytes_be();
    if bytes.len() > word.len() {
        return Err(Black76Error::InternalFault {
            message: format!(
                "{field} magnitude needs {} bytes, word is {}",
                bytes.len(),
                word.len()
            ),
        });
    }
    let start = word.len() - bytes.len();
    word[start..].copy_from_slice(&bytes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 61-byte body with recognizable field values.
    fn sample_body() -> Vec<u8> {
        let mut body = vec![0u8; BODY_LEN];
        body[0..4].copy_from_slice(&7u32.to_be_bytes());
        body[4..12].copy_from_slice(&99u64.to_be_bytes());
        body[12..28].copy_from_slice(&11u128.to_be_bytes());
        body[28..44].copy_from_slice(&22u128.to_be_bytes());
        body[44..60].copy_from_slice(&33u128.to_be_bytes());
        body[60] = 18;
        body
    }

    #[test]
    fn decodes_bare_body() {
        let quote = decode_quote(&sample_body()).unwrap();
        assert_eq!(quote.time_to_expiry_secs, 7);
        assert_eq!(quote.discount, BigUint::from(99u8));
        assert_eq!(quote.volatility, BigUint::from(11u8));
        assert_eq!(quote.forward, BigUint::from(22u8));
        assert_eq!(quote.strike, BigUint::from(33u8));
        assert_eq!(quote.exponent, 18);
    }

    #[test]
    fn decodes_selector_prefixed_body() {
        let mut input = vec![0xde, 0xad, 0xbe, 0xef];
        input.extend_from_slice(&sample_body());
        assert_eq!(input.len(), 65);
        let quote = decode_quote(&input).unwrap();
        assert_eq!(quote.exponent, 18);
    }

    #[test]
    fn rejects_short_and_long_bodies() {
        for len in [0, 60, 62, 64, 66, 100] {
            let err = decode_quote(&vec![0u8; len]).unwrap_err();
            match err {
                Black76Error::InvalidInputLength { got } => assert_eq!(got, len),
                other => panic!("expected InvalidInputLength, got {other:?}"),
            }
        }
    }

    #[test]
    fn encodes_right_aligned_words() {
        let result = PricingResult {
            call: BigUint::from(0x0102u16),
            put: BigUint::from(0u8),
            delta: BigUint::from(0xffu8),
        };
        let out = encode_result(&result).unwrap();
        assert_eq!(out.len(), OUTPUT_LEN);
        assert_eq!(&out[30..32], &[0x01, 0x02]);
        assert!(out[0..30].iter().all(|&b| b == 0));
        assert!(out[32..64].iter().all(|&b| b == 0));
        assert_eq!(out[95], 0xff);
        assert!(out[64..95].iter().all(|&b| b == 0));
    }

    #[test]
    fn encode_surfaces_overflowing_magnitude() {
        let too_wide = BigUint::from_bytes_be(&[1u8; 33]);
        let result = PricingResult {
            call: too_wide,
            put: BigUint::from(0u8),
            delta: BigUint::from(0u8),
        };
        let err = encode_result(&result).unwrap_err();
        assert!(matches!(err, Black76Error::InternalFault { .. }));
    }

    #[test]
    fn max_word_value_encodes() {
        let max = BigUint::from_bytes_be(&[0xff; 32]);
        let result = PricingResult {
            call: max.clone(),
            put: max.clone(),
            delta: max,
        };
        let out = encode_result(&result).unwrap();
        assert!(out.iter().all(|&b| b == 0xff));
    }
}
