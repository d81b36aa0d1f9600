use ark_bn254::{Fq, Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::UniformRand;
use ark_std::{test_rng, One};
use lazy_static::lazy_static;

use evm_kzg_bn254::errors::{KzgError, SrsError};
use evm_kzg_bn254::kzg;
use evm_kzg_bn254::polynomial::Polynomial;
use evm_kzg_bn254::srs::SRS;
use evm_kzg_bn254::verify;

lazy_static! {
    // Throwaway parameters from a fixed secret; large enough for every case
    // below.
    static ref TEST_SRS: SRS = SRS::insecure_from_tau(Fr::from(999_983u64), 32, 32);
}

fn poly(coeffs: &[u64]) -> Polynomial<Fr> {
    Polynomial::new(coeffs.iter().map(|&c| Fr::from(c)).collect())
}

fn random_poly(len: usize) -> Polynomial<Fr> {
    let mut rng = test_rng();
    Polynomial::new((0..len).map(|_| Fr::rand(&mut rng)).collect())
}

#[test]
fn test_single_point_round_trip() {
    let mut rng = test_rng();
    for len in [1usize, 2, 3, 8, 17, 33] {
        let p = random_poly(len);
        let commitment = kzg::commit_g1(&TEST_SRS, &p).unwrap();
        let z = Fr::rand(&mut rng);
        let y = p.eval(&z);
        let proof = kzg::prove(&TEST_SRS, &p, &z).unwrap();
        assert!(verify::verify(&TEST_SRS, &commitment, &proof, &z, &y));
        assert!(verify::verify_eip197(&TEST_SRS, &commitment, &proof, &z, &y));
    }
}

#[test]
fn test_known_answer() {
    // p = 5 + 2x^2 + x^3, z = 6, y = 293
    let p = poly(&[5, 0, 2, 1]);
    let z = Fr::from(6u64);
    let y = Fr::from(293u64);
    assert_eq!(p.eval(&z), y);

    let commitment = kzg::commit_g1(&TEST_SRS, &p).unwrap();
    let proof = kzg::prove(&TEST_SRS, &p, &z).unwrap();
    assert!(verify::verify(&TEST_SRS, &commitment, &proof, &z, &y));

    // the proof commits the quotient x^2 + 8x + 48
    let quotient_commitment = kzg::commit_g1(&TEST_SRS, &poly(&[48, 8, 1])).unwrap();
    assert_eq!(proof, quotient_commitment);
}

#[test]
fn test_wrong_value_rejected() {
    let p = poly(&[5, 0, 2, 1]);
    let z = Fr::from(6u64);
    let commitment = kzg::commit_g1(&TEST_SRS, &p).unwrap();
    let proof = kzg::prove(&TEST_SRS, &p, &z).unwrap();

    let wrong_y = Fr::from(294u64);
    assert!(!verify::verify(&TEST_SRS, &commitment, &proof, &z, &wrong_y));
    assert!(!verify::verify_eip197(&TEST_SRS, &commitment, &proof, &z, &wrong_y));
}

#[test]
fn test_wrong_index_rejected() {
    let p = poly(&[5, 0, 2, 1]);
    let z = Fr::from(6u64);
    let y = Fr::from(293u64);
    let commitment = kzg::commit_g1(&TEST_SRS, &p).unwrap();
    let proof = kzg::prove(&TEST_SRS, &p, &z).unwrap();

    let wrong_z = Fr::from(7u64);
    assert!(!verify::verify(&TEST_SRS, &commitment, &proof, &wrong_z, &y));
    assert!(!verify::verify_eip197(&TEST_SRS, &commitment, &proof, &wrong_z, &y));
}

#[test]
fn test_tampered_proof_rejected() {
    let p = poly(&[5, 0, 2, 1]);
    let z = Fr::from(6u64);
    let y = Fr::from(293u64);
    let commitment = kzg::commit_g1(&TEST_SRS, &p).unwrap();
    let proof = kzg::prove(&TEST_SRS, &p, &z).unwrap();

    // nudging a coordinate knocks the point off the curve or onto a wrong one
    let tampered = G1Affine::new_unchecked(proof.x + Fq::one(), proof.y);
    assert!(!verify::verify(&TEST_SRS, &commitment, &tampered, &z, &y));
    assert!(!verify::verify_eip197(&TEST_SRS, &commitment, &tampered, &z, &y));

    // a valid but unrelated point fails the pairing equation instead
    let unrelated = G1Affine::generator();
    assert!(!verify::verify(&TEST_SRS, &commitment, &unrelated, &z, &y));
}

#[test]
fn test_commitment_homomorphism() {
    let mut rng = test_rng();
    let p = random_poly(9);
    let q = random_poly(6);

    let cp = kzg::commit_g1(&TEST_SRS, &p).unwrap();
    let cq = kzg::commit_g1(&TEST_SRS, &q).unwrap();
    let csum = kzg::commit_g1(&TEST_SRS, &p.add(&q)).unwrap();
    assert_eq!((cp + cq).into_affine(), csum);

    let alpha = Fr::rand(&mut rng);
    let cscaled = kzg::commit_g1(&TEST_SRS, &p.scale(&alpha)).unwrap();
    assert_eq!((cp * alpha).into_affine(), cscaled);
}

#[test]
fn test_gen_coefficients_hits_values() {
    let mut rng = test_rng();
    let values: Vec<Fr> = (0..10).map(|_| Fr::rand(&mut rng)).collect();
    let p = kzg::gen_coefficients(&values).unwrap();
    assert_eq!(p.len(), values.len());
    for (i, v) in values.iter().enumerate() {
        assert_eq!(p.eval(&Fr::from(i as u64)), *v);
    }
}

#[test]
fn test_multi_point_round_trip() {
    let p = random_poly(11);
    let points: Vec<Fr> = (0u64..9).map(Fr::from).collect();
    let values: Vec<Fr> = points.iter().map(|z| p.eval(z)).collect();

    let commitment = kzg::commit_g1(&TEST_SRS, &p).unwrap();
    let proof = kzg::prove_multi(&TEST_SRS, &p, &points).unwrap();
    assert_eq!(
        verify::verify_multi(&TEST_SRS, &commitment, &proof, &points, &values),
        Ok(true)
    );
}

#[test]
fn test_multi_point_tampered_proof_rejected() {
    let p = random_poly(11);
    let points: Vec<Fr> = (0u64..9).map(Fr::from).collect();
    let values: Vec<Fr> = points.iter().map(|z| p.eval(z)).collect();

    let commitment = kzg::commit_g1(&TEST_SRS, &p).unwrap();
    let proof = kzg::prove_multi(&TEST_SRS, &p, &points).unwrap();

    // swapping the two coordinates leaves the twist
    let swapped = G2Affine::new_unchecked(proof.y, proof.x);
    assert_eq!(
        verify::verify_multi(&TEST_SRS, &commitment, &swapped, &points, &values),
        Ok(false)
    );

    let mut wrong_values = values.clone();
    wrong_values[3] += Fr::one();
    assert_eq!(
        verify::verify_multi(&TEST_SRS, &commitment, &proof, &points, &wrong_values),
        Ok(false)
    );
}

#[test]
fn test_multi_point_shape_mismatches_verify_false() {
    let p = random_poly(8);
    let points: Vec<Fr> = (0u64..4).map(Fr::from).collect();
    let values: Vec<Fr> = points.iter().map(|z| p.eval(z)).collect();
    let commitment = kzg::commit_g1(&TEST_SRS, &p).unwrap();
    let proof = kzg::prove_multi(&TEST_SRS, &p, &points).unwrap();

    assert_eq!(
        verify::verify_multi(&TEST_SRS, &commitment, &proof, &points, &values[..3]),
        Ok(false)
    );

    let mut duplicated = points.clone();
    duplicated[1] = duplicated[0];
    assert_eq!(
        verify::verify_multi(&TEST_SRS, &commitment, &proof, &duplicated, &values),
        Ok(false)
    );
}

#[test]
fn test_zero_polynomial_commits_to_identity() {
    assert_eq!(
        kzg::commit_g1(&TEST_SRS, &Polynomial::zero()).unwrap(),
        G1Affine::zero()
    );
    assert_eq!(
        kzg::commit_g1(&TEST_SRS, &poly(&[0, 0, 0])).unwrap(),
        G1Affine::zero()
    );
    assert_eq!(
        kzg::commit_g2(&TEST_SRS, &Polynomial::zero()).unwrap(),
        G2Affine::zero()
    );
}

#[test]
fn test_commit_capacity_exceeded() {
    let too_long = random_poly(34);
    assert_eq!(
        kzg::commit_g1(&TEST_SRS, &too_long),
        Err(KzgError::Srs(SrsError::CapacityExceeded {
            requested: 34,
            available: 33,
        }))
    );
}
