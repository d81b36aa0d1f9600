use thiserror::Error;

/// Errors from scalar-field arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Zero has no multiplicative inverse.
    #[error("zero has no inverse in the field")]
    NoInverse,
}

/// Errors from dense-polynomial algebra.
///
/// Division and interpolation have exact preconditions; violating them is
/// either a caller bug or adversarial input, and both surface as tagged
/// variants rather than panics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Long division finished with a nonzero remainder.
    #[error("polynomial division left a nonzero remainder")]
    InexactDivision,

    /// Two interpolation abscissae coincide.
    #[error("interpolation abscissae at positions {0} and {1} collide")]
    DuplicateAbscissa(usize, usize),

    /// The divisor is the zero polynomial.
    #[error("division by the zero polynomial")]
    ZeroDivisor,

    /// Abscissa and ordinate vectors have different lengths.
    #[error("abscissa and ordinate counts differ")]
    LengthMismatch,

    /// Wraps errors originating from field arithmetic.
    #[error("field error: {0}")]
    Field(#[from] FieldError),
}

/// Errors from curve-point validation and the pairing primitives.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The point does not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// The point is on the curve but outside the prime-order subgroup.
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,

    /// A pairing product over zero pairs is undefined.
    #[error("pairing check called with an empty pair list")]
    EmptyPairing,
}

/// Errors raised while loading the structured reference string.
///
/// All of these indicate misconfiguration rather than attack and are fatal at
/// startup.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SrsError {
    /// A transcript point failed validation (bad hex, off-curve, wrong
    /// subgroup, or a generator mismatch at index 0).
    #[error("srs point {index} malformed: {reason}")]
    Malformed { index: usize, reason: String },

    /// More powers were requested than the transcript holds.
    #[error("requested {requested} powers but the transcript holds {available}")]
    CapacityExceeded { requested: usize, available: usize },

    /// The verifier needs the degree-one powers; a capacity below 1 cannot
    /// support the scheme.
    #[error("capacity must retain at least powers 0 and 1, got highest index {got}")]
    InsufficientCapacity { got: usize },

    /// The transcript file could not be read or parsed as JSON.
    #[error("failed to read srs transcript: {0}")]
    Io(String),
}

/// Umbrella error for commitment and proving operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// Wraps errors originating from field arithmetic.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Wraps errors originating from polynomial algebra.
    #[error("polynomial error: {0}")]
    Poly(#[from] PolyError),

    /// Wraps errors originating from the SRS provider.
    #[error("srs error: {0}")]
    Srs(#[from] SrsError),

    /// Multi-scalar multiplication rejected its inputs.
    #[error("msm error: {0}")]
    Msm(String),
}

/// Errors at the verifier boundary.
///
/// The boolean verifiers are total over adversarial bytes and reserve `Err`
/// for local misconfiguration; only the contract-bound word decoder raises
/// [`VerifyError::OutOfRange`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum VerifyError {
    /// An input word is not a canonical scalar-field element.
    #[error("input `{name}` is out of range for the scalar field")]
    OutOfRange { name: &'static str },

    /// Wraps errors originating from polynomial algebra.
    #[error("polynomial error: {0}")]
    Poly(#[from] PolyError),

    /// Wraps errors originating from the pairing layer.
    #[error("curve error: {0}")]
    Curve(#[from] CurveError),

    /// Wraps errors originating from commitment operations.
    #[error("kzg error: {0}")]
    Kzg(#[from] KzgError),
}
