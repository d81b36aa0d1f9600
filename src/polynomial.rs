//! Dense univariate polynomials over a prime field.
//!
//! Coefficient i sits at position i. Trailing zeros are permitted: the vector
//! length is the logical degree bound, not the exact degree, and none of the
//! operations normalise away high zero coefficients behind the caller's back.

use ark_ff::PrimeField;
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use ark_std::{vec, vec::Vec, One, Zero};

use crate::errors::{FieldError, PolyError};

/// Below this product length schoolbook multiplication wins over the domain
/// transforms.
const FFT_MUL_MIN_LEN: usize = 64;

/// A dense polynomial with coefficients in `F`.
///
/// The crate instantiates this with [`ark_bn254::Fr`]; the type stays generic
/// so the algebra can be unit-tested over a small prime where results are
/// checkable by hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<F: PrimeField> {
    coeffs: Vec<F>,
}

impl<F: PrimeField> Polynomial<F> {
    pub fn new(coeffs: Vec<F>) -> Self {
        Self { coeffs }
    }

    /// The zero polynomial, represented with no coefficients.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<F> {
        self.coeffs
    }

    /// Number of stored coefficients (the logical degree bound).
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Whether every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Exact degree, ignoring trailing zeros. `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|c| !c.is_zero())
    }

    /// Evaluates at `x` by Horner's rule.
    pub fn eval(&self, x: &F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(F::zero(), |acc, c| acc * x + c)
    }

    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut coeffs = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coeffs.get(i).copied().unwrap_or_else(F::zero);
            let b = other.coeffs.get(i).copied().unwrap_or_else(F::zero);
            coeffs.push(a + b);
        }
        Self { coeffs }
    }

    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut coeffs = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.coeffs.get(i).copied().unwrap_or_else(F::zero);
            let b = other.coeffs.get(i).copied().unwrap_or_else(F::zero);
            coeffs.push(a - b);
        }
        Self { coeffs }
    }

    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -*c).collect(),
        }
    }

    /// Multiplies every coefficient by `k`.
    pub fn scale(&self, k: &F) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| *c * k).collect(),
        }
    }

    /// Polynomial product.
    ///
    /// Schoolbook for short operands; once the product length justifies it and
    /// the field provides a large enough evaluation domain, the product goes
    /// through FFT, pointwise multiplication, and IFFT instead. Both paths
    /// compute the identical coefficients.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let result_len = self.coeffs.len() + other.coeffs.len() - 1;

        if result_len >= FFT_MUL_MIN_LEN {
            if let Some(domain) = GeneralEvaluationDomain::<F>::new(result_len) {
                let mut lhs = domain.fft(&self.coeffs);
                let rhs = domain.fft(&other.coeffs);
                for (l, r) in lhs.iter_mut().zip(rhs.iter()) {
                    *l *= r;
                }
                let mut coeffs = domain.ifft(&lhs);
                coeffs.truncate(result_len);
                return Self { coeffs };
            }
        }

        let mut coeffs = vec![F::zero(); result_len];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += *a * b;
            }
        }
        Self { coeffs }
    }

    /// Exact division, high coefficients first.
    ///
    /// Fails with [`PolyError::ZeroDivisor`] when `divisor` is the zero
    /// polynomial and [`PolyError::InexactDivision`] when a nonzero remainder
    /// survives. The quotient has `len(self) - len(divisor) + 1` coefficients
    /// against the divisor's effective (trailing-zero-stripped) length.
    pub fn div(&self, divisor: &Self) -> Result<Self, PolyError> {
        let dlen = divisor
            .coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .map(|i| i + 1)
            .ok_or(PolyError::ZeroDivisor)?;
        let lead_inv = divisor.coeffs[dlen - 1]
            .inverse()
            .ok_or(FieldError::NoInverse)?;

        let mut rem = self.coeffs.clone();
        if rem.len() < dlen {
            if rem.iter().any(|c| !c.is_zero()) {
                return Err(PolyError::InexactDivision);
            }
            return Ok(Self::zero());
        }

        let qlen = rem.len() - dlen + 1;
        let mut quotient = vec![F::zero(); qlen];
        for k in (0..qlen).rev() {
            let coeff = rem[k + dlen - 1] * lead_inv;
            quotient[k] = coeff;
            if coeff.is_zero() {
                continue;
            }
            for (j, d) in divisor.coeffs[..dlen].iter().enumerate() {
                rem[k + j] -= coeff * d;
            }
        }

        if rem.iter().any(|c| !c.is_zero()) {
            return Err(PolyError::InexactDivision);
        }
        Ok(Self { coeffs: quotient })
    }

    /// Lagrange interpolation through the points `(xs[i], ys[i])`.
    ///
    /// Returns the unique polynomial of degree < n with `p(xs[i]) = ys[i]`,
    /// as exactly n coefficients. All abscissae must be distinct.
    pub fn interpolate(xs: &[F], ys: &[F]) -> Result<Self, PolyError> {
        if xs.len() != ys.len() {
            return Err(PolyError::LengthMismatch);
        }
        for i in 0..xs.len() {
            for j in (i + 1)..xs.len() {
                if xs[i] == xs[j] {
                    return Err(PolyError::DuplicateAbscissa(i, j));
                }
            }
        }
        if xs.is_empty() {
            return Ok(Self::zero());
        }

        // M(x) = prod (x - x_i); each basis numerator M/(x - x_i) divides out
        // exactly, and its value at x_i is the barycentric denominator.
        let master = Self::zero_poly(xs);
        let mut acc = Self {
            coeffs: vec![F::zero(); xs.len()],
        };
        for (x_i, y_i) in xs.iter().zip(ys.iter()) {
            let numerator = master.div(&Self::new(vec![-*x_i, F::one()]))?;
            let denom = numerator.eval(x_i);
            let weight = *y_i * denom.inverse().ok_or(FieldError::NoInverse)?;
            for (a, n) in acc.coeffs.iter_mut().zip(numerator.coeffs.iter()) {
                *a += weight * n;
            }
        }
        Ok(acc)
    }

    /// The vanishing polynomial `prod (x - z_i)` of a point set.
    ///
    /// Monic of degree `points.len()`; the empty product is the constant 1.
    pub fn zero_poly(points: &[F]) -> Self {
        let mut acc = Self::new(vec![F::one()]);
        for z in points {
            acc = acc.mul(&Self::new(vec![-*z, F::one()]));
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{Fp64, MontBackend, MontConfig};
    use ark_std::One;

    // Small prime field for hand-checkable algebra.
    #[derive(MontConfig)]
    #[modulus = "127"]
    #[generator = "3"]
    struct F127Config;
    type F127 = Fp64<MontBackend<F127Config, 1>>;

    fn poly(coeffs: &[u64]) -> Polynomial<F127> {
        Polynomial::new(coeffs.iter().map(|&c| F127::from(c)).collect())
    }

    fn elems(values: &[u64]) -> Vec<F127> {
        values.iter().map(|&v| F127::from(v)).collect()
    }

    #[test]
    fn interpolates_small_prime_vector() {
        let xs = elems(&[0, 1, 2]);
        let ys = elems(&[5, 25, 125]);
        let p = Polynomial::interpolate(&xs, &ys).unwrap();
        assert_eq!(p, poly(&[5, 107, 40]));
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_eq!(p.eval(x), *y);
        }
    }

    #[test]
    fn interpolation_rejects_colliding_abscissae() {
        let xs = elems(&[1, 2, 1]);
        let ys = elems(&[3, 4, 5]);
        assert_eq!(
            Polynomial::interpolate(&xs, &ys),
            Err(PolyError::DuplicateAbscissa(0, 2))
        );
    }

    #[test]
    fn interpolation_rejects_mismatched_lengths() {
        assert_eq!(
            Polynomial::interpolate(&elems(&[1, 2]), &elems(&[3])),
            Err(PolyError::LengthMismatch)
        );
    }

    #[test]
    fn horner_matches_naive_evaluation() {
        let p = poly(&[7, 0, 3, 9, 1]);
        for x in 0u64..127 {
            let x = F127::from(x);
            let mut naive = F127::zero();
            let mut pow = F127::one();
            for c in p.coeffs() {
                naive += *c * pow;
                pow *= x;
            }
            assert_eq!(p.eval(&x), naive);
        }
    }

    #[test]
    fn addition_pads_the_shorter_operand() {
        let a = poly(&[1, 2]);
        let b = poly(&[10, 20, 30]);
        assert_eq!(a.add(&b), poly(&[11, 22, 30]));
        assert_eq!(b.sub(&a), poly(&[9, 18, 30]));
    }

    #[test]
    fn schoolbook_product() {
        // (1 + x)(2 + 3x) = 2 + 5x + 3x^2
        assert_eq!(poly(&[1, 1]).mul(&poly(&[2, 3])), poly(&[2, 5, 3]));
        assert!(poly(&[0, 0]).mul(&poly(&[2, 3])).is_zero());
    }

    #[test]
    fn exact_division_and_remainder_detection() {
        // (2 + 5x + 3x^2) / (1 + x) = 2 + 3x
        let q = poly(&[2, 5, 3]).div(&poly(&[1, 1])).unwrap();
        assert_eq!(q, poly(&[2, 3]));

        assert_eq!(
            poly(&[3, 5, 3]).div(&poly(&[1, 1])),
            Err(PolyError::InexactDivision)
        );
        assert_eq!(poly(&[1]).div(&poly(&[0, 0])), Err(PolyError::ZeroDivisor));
    }

    #[test]
    fn division_strips_divisor_trailing_zeros() {
        let q = poly(&[2, 5, 3]).div(&poly(&[1, 1, 0, 0])).unwrap();
        assert_eq!(q, poly(&[2, 3]));
    }

    #[test]
    fn dividing_shorter_by_longer_requires_zero_dividend() {
        assert_eq!(
            poly(&[0, 0]).div(&poly(&[1, 2, 3])).unwrap(),
            Polynomial::zero()
        );
        assert_eq!(
            poly(&[1]).div(&poly(&[1, 2, 3])),
            Err(PolyError::InexactDivision)
        );
    }

    #[test]
    fn vanishing_polynomial_has_the_given_roots() {
        let points = elems(&[3, 11, 40]);
        let z = Polynomial::zero_poly(&points);
        assert_eq!(z.degree(), Some(3));
        assert_eq!(*z.coeffs().last().unwrap(), F127::one());
        for p in &points {
            assert_eq!(z.eval(p), F127::zero());
        }
        assert_eq!(Polynomial::<F127>::zero_poly(&[]), poly(&[1]));
    }

    #[test]
    fn shifted_polynomial_divides_by_linear_factor() {
        let p = poly(&[9, 4, 0, 17, 2]);
        for z in 0u64..16 {
            let z = F127::from(z);
            let shifted = p.sub(&Polynomial::new(vec![p.eval(&z)]));
            let q = shifted.div(&Polynomial::new(vec![-z, F127::one()])).unwrap();
            assert_eq!(q.len(), p.len() - 1);
            // q * (x - z) reassembles the shifted polynomial
            let back = q.mul(&Polynomial::new(vec![-z, F127::one()]));
            assert_eq!(back.add(&Polynomial::new(vec![p.eval(&z)])), p);
        }
    }
}
