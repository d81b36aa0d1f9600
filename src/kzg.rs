//! Commitment and proof generation.
//!
//! Commitments are multi-scalar multiplications of coefficient vectors
//! against the SRS powers; proofs are commitments to quotient polynomials.
//! The single-point witness lives in G1. The multi-point witness lives in G2
//! deliberately: its verifier pairs the vanishing-polynomial commitment (G1)
//! against the proof, so the group roles cannot be swapped.

use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_std::One;
use tracing::debug_span;

use crate::errors::{KzgError, SrsError};
use crate::polynomial::Polynomial;
use crate::srs::SRS;

/// Commits to a coefficient vector in G1: `sum coeffs[i] * g1[i]`.
///
/// The empty and all-zero vectors commit to the identity.
pub fn commit_g1(srs: &SRS, poly: &Polynomial<Fr>) -> Result<G1Affine, KzgError> {
    let coeffs = poly.coeffs();
    let bases = srs.g1_powers();
    if coeffs.len() > bases.len() {
        return Err(SrsError::CapacityExceeded {
            requested: coeffs.len(),
            available: bases.len(),
        }
        .into());
    }
    if coeffs.is_empty() {
        return Ok(G1Affine::zero());
    }
    let commitment = G1Projective::msm(&bases[..coeffs.len()], coeffs)
        .map_err(|e| KzgError::Msm(e.to_string()))?;
    Ok(commitment.into_affine())
}

/// Commits to a coefficient vector in G2, against the G2 powers.
pub fn commit_g2(srs: &SRS, poly: &Polynomial<Fr>) -> Result<G2Affine, KzgError> {
    let coeffs = poly.coeffs();
    let bases = srs.g2_powers();
    if coeffs.len() > bases.len() {
        return Err(SrsError::CapacityExceeded {
            requested: coeffs.len(),
            available: bases.len(),
        }
        .into());
    }
    if coeffs.is_empty() {
        return Ok(G2Affine::zero());
    }
    let commitment = G2Projective::msm(&bases[..coeffs.len()], coeffs)
        .map_err(|e| KzgError::Msm(e.to_string()))?;
    Ok(commitment.into_affine())
}

/// Interpolates the polynomial taking `values[i]` at abscissa `i`.
///
/// The result has exactly `values.len()` coefficients, so it commits against
/// the same number of SRS powers as the value vector is long.
pub fn gen_coefficients(values: &[Fr]) -> Result<Polynomial<Fr>, KzgError> {
    let xs: Vec<Fr> = (0..values.len() as u64).map(Fr::from).collect();
    Ok(Polynomial::interpolate(&xs, values)?)
}

/// Produces the single-point witness for `p(z)`.
///
/// The quotient `q(x) = (p(x) - p(z)) / (x - z)` always divides exactly,
/// since subtracting the evaluation plants a root at `z`; the proof is its
/// G1 commitment.
pub fn prove(srs: &SRS, poly: &Polynomial<Fr>, z: &Fr) -> Result<G1Affine, KzgError> {
    let y = poly.eval(z);
    let shifted = poly.sub(&Polynomial::new(vec![y]));
    let quotient = shifted.div(&Polynomial::new(vec![-*z, Fr::one()]))?;
    commit_g1(srs, &quotient)
}

/// Produces the multi-point witness for the evaluations of `p` on `points`.
///
/// With `i(x)` interpolating the claimed values and `z(x)` vanishing on the
/// point set, `q(x) = (p(x) - i(x)) / z(x)` divides exactly and the proof is
/// its G2 commitment.
pub fn prove_multi(
    srs: &SRS,
    poly: &Polynomial<Fr>,
    points: &[Fr],
) -> Result<G2Affine, KzgError> {
    let span = debug_span!("prove_multi", points = points.len()).entered();
    let values: Vec<Fr> = points.iter().map(|z| poly.eval(z)).collect();
    let interpolant = Polynomial::interpolate(points, &values)?;
    let vanishing = Polynomial::zero_poly(points);
    let quotient = poly.sub(&interpolant).div(&vanishing)?;
    drop(span);
    commit_g2(srs, &quotient)
}
