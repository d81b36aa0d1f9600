//! Byte packing for the EIP-197 pairing precompile.
//!
//! Each (A in G1, B in G2) pair contributes 192 bytes of calldata: A.x, A.y,
//! then B's x and y with the imaginary component first, all as 32-byte
//! big-endian words. Internally G2 coordinates live as `c0 + c1*u` with the
//! real part first; the swap happens only here, at the boundary.

use ark_bn254::{Fq, G1Affine, G2Affine};
use ark_ec::AffineRepr;

use crate::consts::{BYTES_PER_WORD, EIP197_PAIR_SIZE};
use crate::scalar::base_to_word;

fn push_base(out: &mut Vec<u8>, c: &Fq) {
    out.extend_from_slice(&base_to_word(c));
}

fn push_zero_word(out: &mut Vec<u8>) {
    out.extend_from_slice(&[0u8; BYTES_PER_WORD]);
}

/// Serialises a G1 point as two words. The identity encodes as zero words,
/// matching the precompile's convention.
pub fn pack_g1(out: &mut Vec<u8>, point: &G1Affine) {
    if point.is_zero() {
        push_zero_word(out);
        push_zero_word(out);
    } else {
        push_base(out, &point.x);
        push_base(out, &point.y);
    }
}

/// Serialises a G2 point as four words, imaginary components first.
pub fn pack_g2(out: &mut Vec<u8>, point: &G2Affine) {
    if point.is_zero() {
        for _ in 0..4 {
            push_zero_word(out);
        }
    } else {
        push_base(out, &point.x.c1);
        push_base(out, &point.x.c0);
        push_base(out, &point.y.c1);
        push_base(out, &point.y.c0);
    }
}

/// Packs pairing inputs into the precompile's calldata layout, 192 bytes per
/// pair.
pub fn pack_pairs(pairs: &[(G1Affine, G2Affine)]) -> Vec<u8> {
    let mut out = Vec::with_capacity(pairs.len() * EIP197_PAIR_SIZE);
    for (a, b) in pairs {
        pack_g1(&mut out, a);
        pack_g2(&mut out, b);
    }
    out
}
