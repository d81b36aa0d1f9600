//! Canonical encodings for field elements at the crate's byte boundaries.
//!
//! Arithmetic itself lives on [`ark_bn254::Fr`] (Montgomery form), with
//! [`ark_ff::UniformRand`] as the uniform sampler over `[0, r)`; this module
//! only adds the conversions the SRS loader and the contract-facing verifier
//! need: big-endian 32-byte words and 0x-prefixed hex coordinates.

use ark_bn254::{Fq, Fr};
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

use crate::consts::BYTES_PER_WORD;
use crate::errors::VerifyError;

/// Canonical 32-byte big-endian encoding of a scalar.
pub fn scalar_to_word(x: &Fr) -> [u8; BYTES_PER_WORD] {
    let mut word = [0u8; BYTES_PER_WORD];
    word.copy_from_slice(&x.into_bigint().to_bytes_be());
    word
}

/// Canonical 32-byte big-endian encoding of a base-field coordinate.
pub fn base_to_word(x: &Fq) -> [u8; BYTES_PER_WORD] {
    let mut word = [0u8; BYTES_PER_WORD];
    word.copy_from_slice(&x.into_bigint().to_bytes_be());
    word
}

/// Whether a big-endian word is strictly below the scalar modulus r.
///
/// Words are fixed-width, so lexicographic comparison is numeric comparison.
pub fn word_in_scalar_range(word: &[u8; BYTES_PER_WORD]) -> bool {
    let modulus = Fr::MODULUS.to_bytes_be();
    word.as_slice() < modulus.as_slice()
}

/// Decodes a big-endian word as a canonical scalar.
///
/// The contract boundary requires every word, scalar or coordinate, to be
/// strictly below r; `name` identifies the offending input in the error.
pub fn word_to_scalar(
    word: &[u8; BYTES_PER_WORD],
    name: &'static str,
) -> Result<Fr, VerifyError> {
    if !word_in_scalar_range(word) {
        return Err(VerifyError::OutOfRange { name });
    }
    Ok(Fr::from_be_bytes_mod_order(word))
}

/// Decodes a big-endian word as a curve coordinate.
///
/// The same strict-below-r range check applies (r < q, so the decoded value is
/// always a canonical base-field element as well).
pub fn word_to_base(word: &[u8; BYTES_PER_WORD], name: &'static str) -> Result<Fq, VerifyError> {
    if !word_in_scalar_range(word) {
        return Err(VerifyError::OutOfRange { name });
    }
    Ok(Fq::from_be_bytes_mod_order(word))
}

/// Parses a 0x-prefixed big-endian hex string as a canonical base-field
/// element, rejecting values at or above the base modulus.
pub fn base_from_hex(s: &str) -> Option<Fq> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.is_empty() {
        return None;
    }
    let value = BigUint::parse_bytes(digits.as_bytes(), 16)?;
    let modulus: BigUint = Fq::MODULUS.into();
    if value >= modulus {
        return None;
    }
    Some(Fq::from(value))
}
