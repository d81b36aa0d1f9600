//! Proof verification.
//!
//! The boolean verifiers here are total over anything an adversary can
//! supply: invalid points, mismatched shapes, and out-of-range words all
//! verify `false`. `Err` is reserved for local misconfiguration, and only the
//! contract-bound word decoder raises [`VerifyError::OutOfRange`].

use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_serialize::CanonicalDeserialize;
use ark_std::Zero;

use crate::consts::{BYTES_PER_WORD, SIZE_OF_G1_AFFINE_COMPRESSED};
use crate::errors::{PolyError, VerifyError};
use crate::kzg;
use crate::pairing::{check_g1, check_g2, pairing_check, pairings_equal};
use crate::polynomial::Polynomial;
use crate::scalar;
use crate::srs::SRS;

/// Checks a single-point claim `p(z) = y` against a commitment.
///
/// Verifies `e(C - y*G1, G2) == e(proof, [tau]_2 - z*G2)`. The degree-one
/// power is read straight from the SRS; the `z*G2` term is a single scalar
/// multiplication of the generator, never a general MSM.
pub fn verify(srs: &SRS, commitment: &G1Affine, proof: &G1Affine, z: &Fr, y: &Fr) -> bool {
    if check_g1(commitment).is_err() || check_g1(proof).is_err() {
        return false;
    }
    let Some(tau_g2) = srs.g2_power(1) else {
        return false;
    };

    let value_g1 = (G1Affine::generator() * y).into_affine();
    let commit_minus_value = (*commitment - value_g1).into_affine();

    let z_g2 = (G2Affine::generator() * z).into_affine();
    let x_minus_z = (*tau_g2 - z_g2).into_affine();

    pairings_equal(commit_minus_value, G2Affine::generator(), *proof, x_minus_z)
}

/// The same single-point check in the pairing-precompile's product form:
/// `e(z*proof + C - y*G1, G2) * e(-proof, [tau]_2) == 1`.
///
/// Yields the same boolean as [`verify`] on every input; this is the shape an
/// EIP-197 caller submits (see [`crate::eip197::pack_pairs`]).
pub fn verify_eip197(srs: &SRS, commitment: &G1Affine, proof: &G1Affine, z: &Fr, y: &Fr) -> bool {
    if check_g1(commitment).is_err() || check_g1(proof).is_err() {
        return false;
    }
    let Some(tau_g2) = srs.g2_power(1) else {
        return false;
    };

    let value_g1 = (G1Affine::generator() * y).into_affine();
    let accumulated = (*proof * z + *commitment - value_g1).into_affine();
    let pairs = [
        (accumulated, G2Affine::generator()),
        (-*proof, *tau_g2),
    ];
    pairing_check(&pairs).unwrap_or(false)
}

/// The single-point check over natively compressed points, the 32-byte wire
/// form off-chain callers exchange commitments and proofs in.
///
/// Decompression validates curve and subgroup membership; bytes that do not
/// decode to a valid point verify `false`.
pub fn verify_compressed(
    srs: &SRS,
    commitment_bytes: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    proof_bytes: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    z: &Fr,
    y: &Fr,
) -> bool {
    let Ok(commitment) = G1Affine::deserialize_compressed(&commitment_bytes[..]) else {
        return false;
    };
    let Ok(proof) = G1Affine::deserialize_compressed(&proof_bytes[..]) else {
        return false;
    };
    verify(srs, &commitment, &proof, z, y)
}

/// Checks a multi-point claim: `p(z_j) = y_j` for every j.
///
/// Recomputes the interpolant `i(x)` and the vanishing polynomial `z(x)` from
/// the claims, commits both in G1, and verifies
/// `e(-[z]_1, proof) * e(C - [i]_1, G2) == 1`. Adversarial input shapes
/// (bad points, duplicate indices, mismatched lengths) verify `false`;
/// `Err` means the SRS cannot cover the claim set.
pub fn verify_multi(
    srs: &SRS,
    commitment: &G1Affine,
    proof: &G2Affine,
    points: &[Fr],
    values: &[Fr],
) -> Result<bool, VerifyError> {
    if check_g1(commitment).is_err() || check_g2(proof).is_err() {
        return Ok(false);
    }
    if points.len() != values.len() {
        return Ok(false);
    }

    let interpolant = match Polynomial::interpolate(points, values) {
        Ok(p) => p,
        Err(PolyError::DuplicateAbscissa(..)) => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    let vanishing = Polynomial::zero_poly(points);

    let interpolant_c = kzg::commit_g1(srs, &interpolant)?;
    let vanishing_c = kzg::commit_g1(srs, &vanishing)?;

    let commit_minus_interpolant = (*commitment - interpolant_c).into_affine();
    let pairs = [
        (-vanishing_c, *proof),
        (commit_minus_interpolant, G2Affine::generator()),
    ];
    Ok(pairing_check(&pairs)?)
}

/// A single-point claim as it crosses the contract boundary: six 32-byte
/// big-endian words `(Cx, Cy, proof_x, proof_y, z, y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimWords {
    pub commitment: [[u8; BYTES_PER_WORD]; 2],
    pub proof: [[u8; BYTES_PER_WORD]; 2],
    pub index: [u8; BYTES_PER_WORD],
    pub value: [u8; BYTES_PER_WORD],
}

fn g1_from_words(
    words: &[[u8; BYTES_PER_WORD]; 2],
    names: [&'static str; 2],
) -> Result<G1Affine, VerifyError> {
    let x = scalar::word_to_base(&words[0], names[0])?;
    let y = scalar::word_to_base(&words[1], names[1])?;
    if x.is_zero() && y.is_zero() {
        // the precompile convention for the identity
        return Ok(G1Affine::zero());
    }
    Ok(G1Affine::new_unchecked(x, y))
}

/// Contract-bound form of the single-point check: every word must be strictly
/// below the scalar modulus, and any violation raises
/// [`VerifyError::OutOfRange`] naming the input.
pub fn check_claim_words(srs: &SRS, claim: &ClaimWords) -> Result<bool, VerifyError> {
    let commitment = g1_from_words(&claim.commitment, ["commitment.x", "commitment.y"])?;
    let proof = g1_from_words(&claim.proof, ["proof.x", "proof.y"])?;
    let z = scalar::word_to_scalar(&claim.index, "index")?;
    let y = scalar::word_to_scalar(&claim.value, "value")?;
    Ok(verify(srs, &commitment, &proof, &z, &y))
}

/// Total form of [`check_claim_words`]: out-of-range words verify `false`.
pub fn verify_claim_words(srs: &SRS, claim: &ClaimWords) -> bool {
    check_claim_words(srs, claim).unwrap_or(false)
}

/// Parameter block for an on-chain multi-point verifier.
///
/// Carries the claim plus the interpolating and vanishing polynomials in
/// canonical fixed-length coefficient form: `i_coeffs` has exactly k
/// coefficients (degree < k) and `z_coeffs` exactly k+1 with leading
/// coefficient 1, for k claimed points. A consumer may length-check both in
/// addition to range-checking each coefficient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiClaimParams {
    pub commitment: G1Affine,
    pub proof: G2Affine,
    pub indices: Vec<Fr>,
    pub values: Vec<Fr>,
    pub i_coeffs: Vec<Fr>,
    pub z_coeffs: Vec<Fr>,
}

/// Packs a multi-point claim for an on-chain caller, appending the
/// interpolant and vanishing coefficient vectors the contract re-checks
/// instead of recomputing.
pub fn gen_multi_claim_params(
    commitment: &G1Affine,
    proof: &G2Affine,
    points: &[Fr],
    values: &[Fr],
) -> Result<MultiClaimParams, VerifyError> {
    let interpolant = Polynomial::interpolate(points, values)?;
    let vanishing = Polynomial::zero_poly(points);
    Ok(MultiClaimParams {
        commitment: *commitment,
        proof: *proof,
        indices: points.to_vec(),
        values: values.to_vec(),
        i_coeffs: interpolant.into_coeffs(),
        z_coeffs: vanishing.into_coeffs(),
    })
}
