//! Univariate polynomials in `x` with exact rational coefficients

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Polynomial stored as ascending coefficients with no trailing zeros.
/// The zero polynomial has no coefficients at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    coeffs: Vec<BigRational>,
}

impl Polynomial {
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    pub fn constant(value: BigRational) -> Self {
        Self::from_coefficients(vec![value])
    }

    /// The polynomial `x`
    pub fn x() -> Self {
        Self::from_coefficients(vec![BigRational::zero(), BigRational::one()])
    }

    /// Build from ascending coefficients, trimming trailing zeros
    pub fn from_coefficients(mut coeffs: Vec<BigRational>) -> Self {
        while coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Build from ascending integer coefficients: `[b, a]` is `ax + b`
    pub fn from_integers(coeffs: &[i64]) -> Self {
        Self::from_coefficients(
            coeffs
                .iter()
                .map(|&c| BigRational::from_integer(BigInt::from(c)))
                .collect(),
        )
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial, `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn coefficient(&self, power: usize) -> BigRational {
        self.coeffs
            .get(power)
            .cloned()
            .unwrap_or_else(BigRational::zero)
    }

    pub fn coefficients(&self) -> &[BigRational] {
        &self.coeffs
    }

    pub fn leading_coefficient(&self) -> Option<&BigRational> {
        self.coeffs.last()
    }

    pub fn scale(&self, factor: &BigRational) -> Self {
        Self::from_coefficients(self.coeffs.iter().map(|c| c * factor).collect())
    }

    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Self::one();
        for _ in 0..exponent {
            result = &result * self;
        }
        result
    }

    /// Scale so the leading coefficient is 1. The zero polynomial stays zero.
    pub fn monic(&self) -> Self {
        match self.leading_coefficient() {
            Some(lead) => self.scale(&lead.recip()),
            None => Self::zero(),
        }
    }

    /// Euclidean division. Returns `None` when dividing by zero.
    pub fn div_rem(&self, divisor: &Polynomial) -> Option<(Polynomial, Polynomial)> {
        let divisor_degree = divisor.degree()?;
        let divisor_lead = divisor.leading_coefficient()?.clone();

        let mut remainder = self.coeffs.clone();
        let quotient_len = (self.coeffs.len() + 1).saturating_sub(divisor.coeffs.len());
        let mut quotient = vec![BigRational::zero(); quotient_len];

        while remainder.len() > divisor_degree && !remainder.is_empty() {
            let shift = remainder.len() - 1 - divisor_degree;
            let factor = remainder[remainder.len() - 1].clone() / &divisor_lead;
            for (i, c) in divisor.coeffs.iter().enumerate() {
                remainder[shift + i] -= c * &factor;
            }
            quotient[shift] = factor;
            remainder.pop();
            while remainder.last().is_some_and(Zero::is_zero) {
                remainder.pop();
            }
        }

        Some((
            Polynomial::from_coefficients(quotient),
            Polynomial::from_coefficients(remainder),
        ))
    }

    /// Monic greatest common divisor. `gcd(0, 0)` is zero.
    pub fn gcd(&self, other: &Polynomial) -> Polynomial {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let remainder = match a.div_rem(&b) {
                Some((_, r)) => r,
                None => break,
            };
            a = b;
            b = remainder;
        }
        a.monic()
    }

    /// Horner evaluation at an exact point
    pub fn evaluate(&self, x: &BigRational) -> BigRational {
        self.coeffs
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, c| acc * x + c)
    }

    /// Horner evaluation in floating point, for plotting
    pub fn evaluate_f64(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + c.to_f64().unwrap_or(f64::NAN))
    }

    /// Smallest positive multiple of this polynomial with integer coefficients
    /// whose gcd is 1. Zero maps to an empty vector.
    pub(crate) fn primitive_integer_coefficients(&self) -> Vec<BigInt> {
        primitive_integers(&self.coeffs, &BigRational::one())
    }

    /// Render with a coefficient style
    pub(crate) fn write_terms(&self, f: &mut impl fmt::Write, latex: bool) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (power, coeff) in self.coeffs.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }
            let negative = coeff.is_negative();
            match (first, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            first = false;

            let magnitude = coeff.abs();
            if power == 0 || !magnitude.is_one() {
                write_magnitude(f, &magnitude, power > 0, latex)?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                p if latex => write!(f, "x^{{{}}}", p)?,
                p => write!(f, "x^{}", p)?,
            }
        }
        Ok(())
    }

    pub fn to_latex(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_terms(&mut out, true);
        out
    }

    /// Number of nonzero terms
    pub(crate) fn term_count(&self) -> usize {
        self.coeffs.iter().filter(|c| !c.is_zero()).count()
    }
}

/// Multiply a list of rationals by a common positive factor so all become
/// coprime integers, keeping the sign of `sign_reference`.
pub(crate) fn primitive_integers(values: &[BigRational], sign_reference: &BigRational) -> Vec<BigInt> {
    if values.iter().all(Zero::is_zero) {
        return Vec::new();
    }
    let lcm = values
        .iter()
        .fold(BigInt::one(), |acc, v| num_integer_lcm(&acc, v.denom()));
    let integers: Vec<BigInt> = values
        .iter()
        .map(|v| (v * BigRational::from_integer(lcm.clone())).to_integer())
        .collect();
    let gcd = integers
        .iter()
        .fold(BigInt::zero(), |acc, v| num_integer_gcd(&acc, v));
    let sign = if sign_reference.is_negative() {
        -BigInt::one()
    } else {
        BigInt::one()
    };
    integers.into_iter().map(|v| v / &gcd * &sign).collect()
}

fn num_integer_gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

fn num_integer_lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    (a / num_integer_gcd(a, b) * b).abs()
}

fn write_magnitude(
    f: &mut impl fmt::Write,
    magnitude: &BigRational,
    before_variable: bool,
    latex: bool,
) -> fmt::Result {
    if magnitude.is_integer() {
        write!(f, "{}", magnitude.numer())
    } else if latex {
        write!(f, "\\frac{{{}}}{{{}}}", magnitude.numer(), magnitude.denom())
    } else if before_variable {
        write!(f, "({}/{})", magnitude.numer(), magnitude.denom())
    } else {
        write!(f, "{}/{}", magnitude.numer(), magnitude.denom())
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_terms(f, false)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::from_coefficients(
            (0..len)
                .map(|i| self.coefficient(i) + rhs.coefficient(i))
                .collect(),
        )
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::from_coefficients(
            (0..len)
                .map(|i| self.coefficient(i) - rhs.coefficient(i))
                .collect(),
        )
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![BigRational::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::from_coefficients(coeffs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::from_coefficients(self.coeffs.iter().map(|c| -c).collect())
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}
