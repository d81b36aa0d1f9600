//! Pairing primitives and curve-point validation.
//!
//! Group arithmetic itself is the arkworks surface on [`ark_bn254`]; the
//! scheme only ever consumes the pairing through the two shapes here, a
//! batched product check and a pair-and-compare.

use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr};
use ark_std::Zero;

use crate::errors::CurveError;

/// Returns true iff the product of pairings over all pairs is the identity
/// in GT.
///
/// This is the native form of the EIP-197 precompile check. The empty product
/// is rejected rather than vacuously true.
pub fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> Result<bool, CurveError> {
    if pairs.is_empty() {
        return Err(CurveError::EmptyPairing);
    }
    let g1: Vec<G1Affine> = pairs.iter().map(|(a, _)| *a).collect();
    let g2: Vec<G2Affine> = pairs.iter().map(|(_, b)| *b).collect();
    Ok(Bn254::multi_pairing(g1, g2).is_zero())
}

/// Pair-and-compare: e(a1, a2) == e(b1, b2).
///
/// Computed as e(a1, a2) * e(-b1, b2) == 1 so a single Miller loop batch and
/// final exponentiation suffice.
pub fn pairings_equal(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    Bn254::multi_pairing([a1, -b1], [a2, b2]).is_zero()
}

/// Validates that a G1 point is on the curve and in the prime-order subgroup.
///
/// The identity passes: commitments to the zero polynomial are legitimate.
pub fn check_g1(point: &G1Affine) -> Result<(), CurveError> {
    if point.is_zero() {
        return Ok(());
    }
    if !point.is_on_curve() {
        return Err(CurveError::NotOnCurve);
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CurveError::NotInSubgroup);
    }
    Ok(())
}

/// Validates that a G2 point is on the twist and in the prime-order subgroup.
pub fn check_g2(point: &G2Affine) -> Result<(), CurveError> {
    if point.is_zero() {
        return Ok(());
    }
    if !point.is_on_curve() {
        return Err(CurveError::NotOnCurve);
    }
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CurveError::NotInSubgroup);
    }
    Ok(())
}
