/// Number of bytes in one big-endian EVM word.
pub const BYTES_PER_WORD: usize = 32;

/// Each (G1, G2) pair contributes six words to the pairing-precompile payload.
pub const EIP197_PAIR_SIZE: usize = 6 * BYTES_PER_WORD;

/// Size of a natively compressed G1 point, the wire form off-chain callers
/// exchange commitments and proofs in.
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 32;
