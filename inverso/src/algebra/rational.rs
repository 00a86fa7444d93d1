//! Rational functions: quotients of polynomials kept in canonical form
//!
//! Every value is normalized on construction: numerator and denominator
//! share no common factor and the denominator is monic. Two rational
//! functions are equal as functions exactly when their canonical forms
//! are equal, and `f - g` simplifies to the zero function exactly when
//! its numerator is the zero polynomial.

use super::polynomial::{primitive_integers, Polynomial};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalFunction {
    numerator: Polynomial,
    denominator: Polynomial,
}

impl RationalFunction {
    /// Build `numerator / denominator` in canonical form.
    /// Returns `None` when the denominator is the zero polynomial.
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        if numerator.is_zero() {
            return Some(Self::zero());
        }

        let common = numerator.gcd(&denominator);
        let (numerator, _) = numerator.div_rem(&common)?;
        let (denominator, _) = denominator.div_rem(&common)?;

        let lead = denominator.leading_coefficient()?.recip();
        Some(Self {
            numerator: numerator.scale(&lead),
            denominator: denominator.scale(&lead),
        })
    }

    pub fn zero() -> Self {
        Self {
            numerator: Polynomial::zero(),
            denominator: Polynomial::one(),
        }
    }

    pub fn constant(value: BigRational) -> Self {
        Self::from_polynomial(Polynomial::constant(value))
    }

    pub fn x() -> Self {
        Self::from_polynomial(Polynomial::x())
    }

    pub fn from_polynomial(polynomial: Polynomial) -> Self {
        Self {
            numerator: polynomial,
            denominator: Polynomial::one(),
        }
    }

    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    /// True when the function is identically zero
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// True when the canonical denominator is a constant, i.e. the
    /// function is a polynomial in disguise.
    pub fn is_polynomial(&self) -> bool {
        self.denominator.degree() == Some(0)
    }

    /// Division; `None` when dividing by the zero function
    pub fn checked_div(&self, other: &RationalFunction) -> Option<RationalFunction> {
        if other.is_zero() {
            return None;
        }
        let numerator = &self.numerator * &other.denominator;
        let denominator = &self.denominator * &other.numerator;
        Self::new(numerator, denominator)
    }

    pub fn pow(&self, exponent: u32) -> RationalFunction {
        Self {
            numerator: self.numerator.pow(exponent),
            denominator: self.denominator.pow(exponent),
        }
    }

    /// Functional equivalence: the difference simplifies to zero
    pub fn is_equivalent(&self, other: &RationalFunction) -> bool {
        (self - other).is_zero()
    }

    /// Evaluate in floating point. Poles evaluate to a non-finite value.
    pub fn evaluate_f64(&self, x: f64) -> f64 {
        self.numerator.evaluate_f64(x) / self.denominator.evaluate_f64(x)
    }

    /// Numerator and denominator scaled by one common factor so that all
    /// coefficients are coprime integers with a positive leading
    /// denominator coefficient.
    pub fn integer_form(&self) -> (Polynomial, Polynomial) {
        let mut all: Vec<BigRational> = self.numerator.coefficients().to_vec();
        let split = all.len();
        all.extend(self.denominator.coefficients().iter().cloned());

        let integers = primitive_integers(&all, &BigRational::one());
        if integers.is_empty() {
            return (Polynomial::zero(), Polynomial::one());
        }
        let to_poly = |values: &[BigInt]| {
            Polynomial::from_coefficients(
                values
                    .iter()
                    .map(|v| BigRational::from_integer(v.clone()))
                    .collect(),
            )
        };
        (to_poly(&integers[..split]), to_poly(&integers[split..]))
    }

    pub fn to_latex(&self) -> String {
        if self.is_polynomial() {
            return self.numerator.to_latex();
        }
        let (numerator, denominator) = self.integer_form();
        format!(
            "\\frac{{{}}}{{{}}}",
            numerator.to_latex(),
            denominator.to_latex()
        )
    }
}

impl fmt::Display for RationalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_polynomial() {
            return write!(f, "{}", self.numerator);
        }
        let (numerator, denominator) = self.integer_form();
        write_grouped(f, &numerator)?;
        write!(f, "/")?;
        write_grouped(f, &denominator)
    }
}

fn write_grouped(f: &mut fmt::Formatter<'_>, polynomial: &Polynomial) -> fmt::Result {
    let bare = polynomial.term_count() == 1
        && (polynomial.degree() == Some(0)
            || polynomial.leading_coefficient().is_some_and(One::is_one));
    if bare {
        write!(f, "{}", polynomial)
    } else {
        write!(f, "({})", polynomial)
    }
}

impl Default for RationalFunction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Polynomial> for RationalFunction {
    fn from(polynomial: Polynomial) -> Self {
        Self::from_polynomial(polynomial)
    }
}

impl From<i64> for RationalFunction {
    fn from(value: i64) -> Self {
        Self::constant(BigRational::from_integer(BigInt::from(value)))
    }
}

impl Add for &RationalFunction {
    type Output = RationalFunction;

    fn add(self, rhs: &RationalFunction) -> RationalFunction {
        let numerator =
            &(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator);
        let denominator = &self.denominator * &rhs.denominator;
        RationalFunction::new(numerator, denominator).unwrap_or_default()
    }
}

impl Sub for &RationalFunction {
    type Output = RationalFunction;

    fn sub(self, rhs: &RationalFunction) -> RationalFunction {
        self + &(-rhs)
    }
}

impl Mul for &RationalFunction {
    type Output = RationalFunction;

    fn mul(self, rhs: &RationalFunction) -> RationalFunction {
        let numerator = &self.numerator * &rhs.numerator;
        let denominator = &self.denominator * &rhs.denominator;
        RationalFunction::new(numerator, denominator).unwrap_or_default()
    }
}

impl Neg for &RationalFunction {
    type Output = RationalFunction;

    fn neg(self) -> RationalFunction {
        RationalFunction {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}
