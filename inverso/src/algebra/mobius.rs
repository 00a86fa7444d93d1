use super::{Polynomial, RationalFunction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coefficients of `(ax + b)/(cx + d)`, without any invariant attached.
///
/// Problems, canonical inverses and user answers all share this shape;
/// `Problem` adds the invertibility guarantees on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mobius {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl Mobius {
    pub const fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }

    pub fn from_array([a, b, c, d]: [i64; 4]) -> Self {
        Self { a, b, c, d }
    }

    pub fn to_array(self) -> [i64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// `ad - bc`, computed without overflow
    pub fn determinant(&self) -> i128 {
        self.a as i128 * self.d as i128 - self.b as i128 * self.c as i128
    }

    pub fn is_degenerate(&self) -> bool {
        self.determinant() == 0
    }

    /// Swap-and-negate rule: the inverse of `(ax + b)/(cx + d)` is
    /// `(-dx + b)/(cx - a)`. `None` if negation overflows.
    pub fn inverse(&self) -> Option<Mobius> {
        Some(Mobius {
            a: self.d.checked_neg()?,
            b: self.b,
            c: self.c,
            d: self.a.checked_neg()?,
        })
    }

    /// Multiply all four coefficients by `factor`
    pub(crate) fn scaled(&self, factor: i64) -> Option<Mobius> {
        Some(Mobius {
            a: self.a.checked_mul(factor)?,
            b: self.b.checked_mul(factor)?,
            c: self.c.checked_mul(factor)?,
            d: self.d.checked_mul(factor)?,
        })
    }

    /// True when both coefficient vectors are nonzero multiples of each other
    pub fn is_proportional_to(&self, other: &Mobius) -> bool {
        let u = self.to_array().map(i128::from);
        let v = other.to_array().map(i128::from);
        if u.iter().all(|&x| x == 0) || v.iter().all(|&x| x == 0) {
            return false;
        }
        (0..4).all(|i| (i + 1..4).all(|j| u[i] * v[j] == u[j] * v[i]))
    }

    pub fn numerator(&self) -> Polynomial {
        Polynomial::from_integers(&[self.b, self.a])
    }

    pub fn denominator(&self) -> Polynomial {
        Polynomial::from_integers(&[self.d, self.c])
    }

    /// The exact rational function; `None` when `c = d = 0`
    pub fn to_rational_function(&self) -> Option<RationalFunction> {
        RationalFunction::new(self.numerator(), self.denominator())
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a as f64 * x + self.b as f64) / (self.c as f64 * x + self.d as f64)
    }

    /// Root of the denominator, `-d/c`
    pub fn vertical_asymptote(&self) -> Option<f64> {
        (self.c != 0).then(|| -(self.d as f64) / self.c as f64)
    }

    /// Ratio of leading coefficients, `a/c`
    pub fn horizontal_asymptote(&self) -> Option<f64> {
        (self.c != 0).then(|| self.a as f64 / self.c as f64)
    }

    /// Typeset as written, without simplification
    pub fn to_latex(&self) -> String {
        format!(
            "\\frac{{{}}}{{{}}}",
            self.numerator().to_latex(),
            self.denominator().to_latex()
        )
    }
}

impl fmt::Display for Mobius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})/({})", self.numerator(), self.denominator())
    }
}

impl From<[i64; 4]> for Mobius {
    fn from(coefficients: [i64; 4]) -> Self {
        Self::from_array(coefficients)
    }
}
