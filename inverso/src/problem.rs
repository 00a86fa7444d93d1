//! Exercise problems: invertible functions `(ax + b)/(cx + d)` with `c ≠ 0`

use crate::algebra::{Mobius, RationalFunction};
use crate::{InversoError, InversoResult, QuizConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A function `f(x) = (ax + b)/(cx + d)` guaranteed to satisfy
/// `c ≠ 0` and `ad - bc ≠ 0`, so it has an inverse of the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Mobius", into = "Mobius")]
pub struct Problem {
    function: Mobius,
}

impl Problem {
    pub fn new(a: i64, b: i64, c: i64, d: i64) -> InversoResult<Self> {
        Self::try_from(Mobius::new(a, b, c, d))
    }

    /// Draw coefficients uniformly from the configured range until the
    /// function is invertible. `c` is drawn from the range without zero.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &QuizConfig) -> InversoResult<Self> {
        config.validate()?;
        let (lo, hi) = (config.min_coefficient, config.max_coefficient);

        for attempt in 1..=config.max_generation_attempts {
            let a = rng.gen_range(lo..=hi);
            let b = rng.gen_range(lo..=hi);
            let c = draw_nonzero(rng, lo, hi);
            let d = rng.gen_range(lo..=hi);

            match Problem::new(a, b, c, d) {
                Ok(problem) => {
                    debug!(attempt, %problem, "generated problem");
                    return Ok(problem);
                }
                Err(_) => debug!(attempt, a, b, c, d, "rejected degenerate coefficients"),
            }
        }

        Err(InversoError::Engine(format!(
            "No invertible function found in {} attempts over [{}, {}]",
            config.max_generation_attempts, lo, hi
        )))
    }

    pub fn a(&self) -> i64 {
        self.function.a
    }

    pub fn b(&self) -> i64 {
        self.function.b
    }

    pub fn c(&self) -> i64 {
        self.function.c
    }

    pub fn d(&self) -> i64 {
        self.function.d
    }

    pub fn function(&self) -> Mobius {
        self.function
    }

    /// `(-d, b, c, -a)`, obtained by solving `y = f(x)` for `x`
    pub fn canonical_inverse(&self) -> Mobius {
        // Construction rejects i64::MIN, so negation cannot overflow
        Mobius::new(-self.d(), self.b(), self.c(), -self.a())
    }

    pub fn rational_function(&self) -> RationalFunction {
        // c ≠ 0, so the denominator is never the zero polynomial
        self.function
            .to_rational_function()
            .unwrap_or_default()
    }

    pub fn inverse_rational_function(&self) -> RationalFunction {
        self.canonical_inverse()
            .to_rational_function()
            .unwrap_or_default()
    }

    pub fn to_latex(&self) -> String {
        format!("f(x) = {}", self.function.to_latex())
    }
}

impl TryFrom<Mobius> for Problem {
    type Error = InversoError;

    fn try_from(function: Mobius) -> Result<Self, Self::Error> {
        if function.c == 0 {
            return Err(InversoError::InvalidProblem(format!(
                "{} has c = 0; the denominator needs an x term",
                function
            )));
        }
        if function.is_degenerate() {
            return Err(InversoError::InvalidProblem(format!(
                "{} has ad - bc = 0 and is constant, so it has no inverse",
                function
            )));
        }
        if function.to_array().contains(&i64::MIN) {
            return Err(InversoError::InvalidProblem(format!(
                "coefficient {} is out of range",
                i64::MIN
            )));
        }
        Ok(Self { function })
    }
}

impl From<Problem> for Mobius {
    fn from(problem: Problem) -> Self {
        problem.function
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) = {}", self.function)
    }
}

fn draw_nonzero<R: Rng + ?Sized>(rng: &mut R, lo: i64, hi: i64) -> i64 {
    // Uniform over [lo, hi] \ {0} without rejection: skip over zero
    let (lo, hi) = (i128::from(lo), i128::from(hi));
    let has_zero = lo <= 0 && 0 <= hi;
    let count = hi - lo + 1 - i128::from(has_zero);
    let mut value = lo + rng.gen_range(0..count);
    if has_zero && value >= 0 {
        value += 1;
    }
    value as i64
}
