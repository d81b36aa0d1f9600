//! ## Library Design / Architecture
//!
//! KZG polynomial commitments over BN254: commit to a polynomial with a
//! single G1 element, then attest its evaluations at one or many points with
//! a single-element witness a verifier checks by pairings.
//!
//! ### Data pipeline
//!
//! > value vector -> [polynomial::Polynomial] (interpolation) ->
//! > commitment (G1) / witness (G1 or G2) -> pairing check -> bool
//!
//! - Values: scalar-field elements, interpreted as evaluations of a
//!   polynomial on the abscissae 0..n-1 ([kzg::gen_coefficients]).
//! - Polynomial: dense coefficient vector over the BN254 scalar field.
//! - [srs::SRS]: powers of the ceremony secret in both groups, loaded from a
//!   converted Perpetual Powers of Tau transcript and validated once at
//!   startup. Shared read-only by every prover and verifier call.
//! - Commitment / witness: multi-scalar multiplications of coefficients
//!   against the SRS powers ([kzg::commit_g1], [kzg::commit_g2]).
//!
//! The single-point witness commits the quotient `(p(x) - p(z)) / (x - z)`
//! in G1; the multi-point witness commits `(p(x) - i(x)) / z(x)` in G2, where
//! `i` interpolates the claims and `z` vanishes on the index set. The
//! verifiers in [verify] reduce each claim to one or two pairings, either
//! natively or in the product form the EIP-197 precompile consumes
//! ([eip197] has the byte layout).
//!
//! ### Example
//!
//! ```rust
//! use ark_bn254::Fr;
//! use evm_kzg_bn254::{kzg, srs::SRS, verify};
//!
//! // Test parameters from a known secret; production loads a ceremony
//! // transcript with `SRS::load`.
//! let srs = SRS::insecure_from_tau(Fr::from(1234u64), 16, 16);
//!
//! let values: Vec<Fr> = (1u64..=8).map(Fr::from).collect();
//! let poly = kzg::gen_coefficients(&values).unwrap();
//! let commitment = kzg::commit_g1(&srs, &poly).unwrap();
//!
//! let z = Fr::from(3u64);
//! let proof = kzg::prove(&srs, &poly, &z).unwrap();
//! assert!(verify::verify(&srs, &commitment, &proof, &z, &poly.eval(&z)));
//! ```

pub mod consts;
pub mod eip197;
pub mod errors;
pub mod kzg;
pub mod pairing;
pub mod polynomial;
pub mod scalar;
pub mod srs;
pub mod verify;
