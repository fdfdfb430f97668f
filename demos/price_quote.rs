//! Price a single forward-option quote through the byte-level contract.
//!
//! Builds a 61-byte request at exponent 18 (F = 120, K = 100, σ = 0.35,
//! T = 0.5y, D = 0.97), runs it through the precompile, and prints the
//! decoded call/put/delta.

use black76::{Black76, PricingPrecompile};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

fn main() {
    let exponent = 18u8;
    let one = BigUint::from(10u8).pow(u32::from(exponent));

    let mut request = vec![0u8; 61];
    request[0..4].copy_from_slice(&15_768_000u32.to_be_bytes()); // half a year
    fill_be(&mut request[4..12], &(BigUint::from(97u8) * &one / BigUint::from(100u8)));
    fill_be(&mut request[12..28], &(BigUint::from(35u8) * &one / BigUint::from(100u8)));
    fill_be(&mut request[28..44], &(BigUint::from(120u8) * &one));
    fill_be(&mut request[44..60], &(BigUint::from(100u8) * &one));
    request[60] = exponent;

    let precompile = Black76::new();
    println!("gas: {}", precompile.required_gas(&request));

    let response = precompile.run(&request).expect("valid 61-byte request");
    let scale = 10f64.powi(i32::from(exponent as i8));
    for (name, word) in [("call", &response[0..32]), ("put", &response[32..64]), ("delta", &response[64..96])] {
        let value = BigUint::from_bytes_be(word).to_f64().unwrap_or(f64::NAN) / scale;
        println!("{name}: {value:.6}");
    }
}

fn fill_be(field: &mut [u8], value: &BigUint) {
    let bytes = value.to_bytes_be();
    let start = field.len() - bytes.len();
    field[start..].copy_from_slice(&bytes);
}
