//! The structured reference string: the scheme's root of trust.
//!
//! Production transcripts are converted offline from the Perpetual Powers of
//! Tau ceremony, challenge #46 (Blake2b `939038cd…444dfbed`); nothing else
//! should ship. The loader treats every failure as fatal misconfiguration —
//! an SRS is validated once at startup and shared read-only from then on.
//!
//! Transcript format, as emitted by the converter: a JSON array per group.
//! G1 rows are `[x_hex, y_hex]`; G2 rows are `[x0_hex, x1_hex, y0_hex,
//! y1_hex]` where the coordinate is `x0 + x1*u` (real part first). All values
//! are 0x-prefixed big-endian hex.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ark_bn254::{Fq2, Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_std::One;
use rayon::prelude::*;
use tracing::debug;

use crate::errors::{CurveError, SrsError};
use crate::pairing::{check_g1, check_g2};
use crate::scalar;

/// Powers of the ceremony secret in both groups.
///
/// `g1[i] = tau^i * G1` and `g2[i] = tau^i * G2`, with the canonical
/// generators at index 0. Immutable after construction; prover and verifier
/// calls may share a reference freely across threads.
#[derive(Clone, Debug, PartialEq)]
pub struct SRS {
    g1: Vec<G1Affine>,
    g2: Vec<G2Affine>,
}

fn malformed(index: usize, reason: impl ToString) -> SrsError {
    SrsError::Malformed {
        index,
        reason: reason.to_string(),
    }
}

fn curve_reason(err: CurveError) -> String {
    match err {
        CurveError::NotOnCurve => "not on the curve".to_string(),
        CurveError::NotInSubgroup => "not in the prime-order subgroup".to_string(),
        CurveError::EmptyPairing => "empty pairing".to_string(),
    }
}

fn read_rows<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, SrsError> {
    let file = File::open(path).map_err(|e| SrsError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| SrsError::Io(format!("{}: {e}", path.display())))
}

fn parse_g1(index: usize, row: &[String; 2]) -> Result<G1Affine, SrsError> {
    let x = scalar::base_from_hex(&row[0])
        .ok_or_else(|| malformed(index, "invalid g1 x coordinate"))?;
    let y = scalar::base_from_hex(&row[1])
        .ok_or_else(|| malformed(index, "invalid g1 y coordinate"))?;
    let point = G1Affine::new_unchecked(x, y);
    check_g1(&point).map_err(|e| malformed(index, curve_reason(e)))?;
    Ok(point)
}

fn parse_g2(index: usize, row: &[String; 4]) -> Result<G2Affine, SrsError> {
    let x0 = scalar::base_from_hex(&row[0])
        .ok_or_else(|| malformed(index, "invalid g2 x0 coordinate"))?;
    let x1 = scalar::base_from_hex(&row[1])
        .ok_or_else(|| malformed(index, "invalid g2 x1 coordinate"))?;
    let y0 = scalar::base_from_hex(&row[2])
        .ok_or_else(|| malformed(index, "invalid g2 y0 coordinate"))?;
    let y1 = scalar::base_from_hex(&row[3])
        .ok_or_else(|| malformed(index, "invalid g2 y1 coordinate"))?;
    let point = G2Affine::new_unchecked(Fq2::new(x0, x1), Fq2::new(y0, y1));
    check_g2(&point).map_err(|e| malformed(index, curve_reason(e)))?;
    Ok(point)
}

impl SRS {
    /// Loads and validates a converted ceremony transcript.
    ///
    /// `cap_g1` and `cap_g2` are the highest power indices to retain, so
    /// `cap + 1` points are read from each file. Validation order per group:
    /// capacity against the file, hex and curve/subgroup membership for every
    /// point (with the offending index on failure), then the canonical
    /// generator at index 0.
    pub fn load(
        g1_path: impl AsRef<Path>,
        g2_path: impl AsRef<Path>,
        cap_g1: usize,
        cap_g2: usize,
    ) -> Result<Self, SrsError> {
        if cap_g1 < 1 {
            return Err(SrsError::InsufficientCapacity { got: cap_g1 });
        }
        if cap_g2 < 1 {
            return Err(SrsError::InsufficientCapacity { got: cap_g2 });
        }

        let g1_rows: Vec<[String; 2]> = read_rows(g1_path.as_ref())?;
        if cap_g1 + 1 > g1_rows.len() {
            return Err(SrsError::CapacityExceeded {
                requested: cap_g1 + 1,
                available: g1_rows.len(),
            });
        }
        let g2_rows: Vec<[String; 4]> = read_rows(g2_path.as_ref())?;
        if cap_g2 + 1 > g2_rows.len() {
            return Err(SrsError::CapacityExceeded {
                requested: cap_g2 + 1,
                available: g2_rows.len(),
            });
        }

        // Deterministic ordering: indexed parallel map, ordered collect.
        let g1: Vec<G1Affine> = g1_rows[..cap_g1 + 1]
            .par_iter()
            .enumerate()
            .map(|(i, row)| parse_g1(i, row))
            .collect::<Result<_, _>>()?;
        let g2: Vec<G2Affine> = g2_rows[..cap_g2 + 1]
            .par_iter()
            .enumerate()
            .map(|(i, row)| parse_g2(i, row))
            .collect::<Result<_, _>>()?;

        if g1[0] != G1Affine::generator() {
            return Err(malformed(0, "g1 transcript does not start at the generator"));
        }
        if g2[0] != G2Affine::generator() {
            return Err(malformed(0, "g2 transcript does not start at the generator"));
        }

        debug!(
            g1_powers = g1.len(),
            g2_powers = g2.len(),
            "srs transcript loaded and validated"
        );
        Ok(Self { g1, g2 })
    }

    /// Builds an SRS from a known secret. Test and bench setups only: anyone
    /// holding `tau` can forge proofs against these parameters.
    pub fn insecure_from_tau(tau: Fr, cap_g1: usize, cap_g2: usize) -> Self {
        let mut g1 = Vec::with_capacity(cap_g1 + 1);
        let mut g2 = Vec::with_capacity(cap_g2 + 1);

        let mut power = Fr::one();
        for _ in 0..=cap_g1 {
            g1.push(G1Affine::generator() * power);
            power *= tau;
        }
        let mut power = Fr::one();
        for _ in 0..=cap_g2 {
            g2.push(G2Affine::generator() * power);
            power *= tau;
        }

        Self {
            g1: G1Projective::normalize_batch(&g1),
            g2: G2Projective::normalize_batch(&g2),
        }
    }

    /// All retained G1 powers, generator first.
    pub fn g1_powers(&self) -> &[G1Affine] {
        &self.g1
    }

    /// All retained G2 powers, generator first.
    pub fn g2_powers(&self) -> &[G2Affine] {
        &self.g2
    }

    pub fn g1_power(&self, i: usize) -> Option<&G1Affine> {
        self.g1.get(i)
    }

    pub fn g2_power(&self, i: usize) -> Option<&G2Affine> {
        self.g2.get(i)
    }

    /// `[tau]_2`, the degree-one G2 power the single-point verifier pairs
    /// against.
    pub fn g2_tau(&self) -> G2Affine {
        self.g2[1]
    }

    /// Highest G1 power index (maximum committable degree in G1).
    pub fn max_degree_g1(&self) -> usize {
        self.g1.len() - 1
    }

    /// Highest G2 power index (maximum committable degree in G2).
    pub fn max_degree_g2(&self) -> usize {
        self.g2.len() - 1
    }
}
