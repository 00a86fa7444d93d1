//! Grading of claimed inverses
//!
//! Answers are compared as functions, not as coefficient lists: the
//! difference between the claimed inverse and the canonical one must
//! simplify to zero. Any nonzero common scaling of the right coefficients
//! is therefore accepted. Grading never fails; anything that cannot be
//! read or simplified is an incorrect answer.

use crate::algebra::Mobius;
use crate::parser::parse_rational_function;
use crate::{InversoError, Problem, QuizConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Claimed inverse `(Ax + B)/(Cx + D)` as typed into four integer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserAnswer {
    #[serde(rename = "A")]
    pub a: i64,
    #[serde(rename = "B")]
    pub b: i64,
    #[serde(rename = "C")]
    pub c: i64,
    #[serde(rename = "D")]
    pub d: i64,
}

impl Default for UserAnswer {
    /// `(0x + 0)/(1x + 0)`: C starts at 1 so the blank form is well formed
    fn default() -> Self {
        Self {
            a: 0,
            b: 0,
            c: 1,
            d: 0,
        }
    }
}

impl UserAnswer {
    pub fn new(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }

    pub fn as_mobius(&self) -> Mobius {
        Mobius::new(self.a, self.b, self.c, self.d)
    }

    pub fn get(&self, slot: Coefficient) -> i64 {
        match slot {
            Coefficient::A => self.a,
            Coefficient::B => self.b,
            Coefficient::C => self.c,
            Coefficient::D => self.d,
        }
    }

    /// Copy with one field replaced
    pub fn with(mut self, slot: Coefficient, value: i64) -> Self {
        match slot {
            Coefficient::A => self.a = value,
            Coefficient::B => self.b = value,
            Coefficient::C => self.c = value,
            Coefficient::D => self.d = value,
        }
        self
    }
}

impl From<Mobius> for UserAnswer {
    fn from(m: Mobius) -> Self {
        Self::new(m.a, m.b, m.c, m.d)
    }
}

impl fmt::Display for UserAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_mobius())
    }
}

/// One of the four answer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coefficient {
    A,
    B,
    C,
    D,
}

impl Coefficient {
    pub const ALL: [Coefficient; 4] = [
        Coefficient::A,
        Coefficient::B,
        Coefficient::C,
        Coefficient::D,
    ];

    /// Field label as shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Coefficient::A => "numerator x coefficient (A)",
            Coefficient::B => "numerator constant (B)",
            Coefficient::C => "denominator x coefficient (C)",
            Coefficient::D => "denominator constant (D)",
        }
    }
}

impl FromStr for Coefficient {
    type Err = InversoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Coefficient::A),
            "B" | "b" => Ok(Coefficient::B),
            "C" | "c" => Ok(Coefficient::C),
            "D" | "d" => Ok(Coefficient::D),
            other => Err(InversoError::Engine(format!(
                "Unknown coefficient '{}', expected one of A, B, C, D",
                other
            ))),
        }
    }
}

/// Worked solution shown after a wrong answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub function: Mobius,
    pub inverse: Mobius,
}

impl Explanation {
    pub fn for_problem(problem: &Problem) -> Self {
        Self {
            function: problem.function(),
            inverse: problem.canonical_inverse(),
        }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Mobius { a, d, .. } = self.function;
        let inv = self.inverse;
        writeln!(f, "For f(x) = {}:", self.function)?;
        writeln!(
            f,
            "  * swap the positions of a = {} and d = {} and flip their signs",
            a, d
        )?;
        writeln!(f, "  * swapped values: -d = {}, -a = {}", inv.a, inv.d)?;
        writeln!(
            f,
            "The coefficients are A = {}, B = {}, C = {}, D = {}, so",
            inv.a, inv.b, inv.c, inv.d
        )?;
        write!(f, "  f^-1(x) = {}", inv)
    }
}

/// Outcome of grading one answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    /// Denominator without an x term: the answer is not of the form
    /// `(Ax + B)/(Cx + D)` with `C ≠ 0`
    NotRationalForm,
    Incorrect { explanation: Explanation },
    /// The typed formula could not be read or simplified
    Malformed { message: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    pub fn message(&self) -> String {
        match self {
            Verdict::Correct => "Correct! You have mastered the inverse formula.".to_string(),
            Verdict::NotRationalForm => "Incorrect. For f^-1(x) to stay a rational function, \
                 the x coefficient of the denominator (C) must be nonzero."
                .to_string(),
            Verdict::Incorrect { .. } => {
                "Incorrect. Check the formula once more and try again.".to_string()
            }
            Verdict::Malformed { message } => {
                format!("Incorrect. The formula could not be read: {}", message)
            }
        }
    }

    pub fn explanation(&self) -> Option<&Explanation> {
        match self {
            Verdict::Incorrect { explanation } => Some(explanation),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())?;
        if let Some(explanation) = self.explanation() {
            write!(f, "\n\n{}", explanation)?;
        }
        Ok(())
    }
}

/// Correctness plus whether the comparison graph may be shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub correct: bool,
    pub graph_visible: bool,
    pub verdict: Verdict,
}

impl From<Verdict> for Grade {
    fn from(verdict: Verdict) -> Self {
        let correct = verdict.is_correct();
        Self {
            correct,
            graph_visible: correct,
            verdict,
        }
    }
}

/// Grade four typed coefficients against the problem's inverse
pub fn check_answer(problem: &Problem, answer: &UserAnswer) -> Grade {
    if answer.c == 0 {
        debug!(%problem, %answer, "rejected answer with C = 0");
        return Verdict::NotRationalForm.into();
    }

    let expected = problem.inverse_rational_function();
    let verdict = match answer.as_mobius().to_rational_function() {
        Some(claimed) if claimed.is_equivalent(&expected) => Verdict::Correct,
        _ => Verdict::Incorrect {
            explanation: Explanation::for_problem(problem),
        },
    };

    debug!(%problem, %answer, correct = verdict.is_correct(), "graded answer");
    verdict.into()
}

/// Grade an inverse typed as a formula, e.g. `(x + 1)/(3x - 2)`
pub fn check_formula(problem: &Problem, formula: &str, config: &QuizConfig) -> Grade {
    let verdict = match parse_rational_function(formula, config) {
        Err(err) => Verdict::Malformed {
            message: err.message().to_string(),
        },
        Ok(claimed) if claimed.is_polynomial() => Verdict::NotRationalForm,
        Ok(claimed) if claimed.is_equivalent(&problem.inverse_rational_function()) => {
            Verdict::Correct
        }
        Ok(_) => Verdict::Incorrect {
            explanation: Explanation::for_problem(problem),
        },
    };

    debug!(%problem, formula, correct = verdict.is_correct(), "graded formula");
    verdict.into()
}
