//! # Inverso Engine
//!
//! **Inverse-function drills with exact grading**
//!
//! Inverso generates functions of the form `f(x) = (ax + b)/(cx + d)`, grades
//! a learner's claimed inverse by symbolic simplification, and builds the
//! graph model that compares `f` with `f⁻¹` once the answer is right.
//!
//! ## Quick Start
//!
//! ```rust
//! use inverso::{check_answer, InversoResult, Problem, UserAnswer};
//!
//! fn main() -> InversoResult<()> {
//!     let problem = Problem::new(2, 1, 3, -1)?;
//!
//!     // Any nonzero multiple of (1, 1, 3, -2) is accepted
//!     let grade = check_answer(&problem, &UserAnswer::new(2, 2, 6, -4));
//!     assert!(grade.correct);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Problems
//! A `Problem` holds four integer coefficients with `c ≠ 0` and
//! `ad - bc ≠ 0`. Its inverse is `(-dx + b)/(cx - a)`.
//!
//! ### Grading
//! Answers are turned into exact rational functions over ℚ and compared by
//! simplifying their difference. Answers may also be typed as formulas such
//! as `(x + 1)/(3x - 2)`.
//!
//! ### Sessions
//! A `SessionState` is an immutable value advanced by `Event`s. The graph is
//! only rendered from the `GradedCorrect` state.
//!
//! ### Extras
//! The `lotto` and `quadratic` modules hold two small standalone exercises:
//! a 6/45 lottery ticket generator and a `y = ax²` explorer quiz.

pub mod algebra;
pub mod ast;
pub mod error;
pub mod grading;
pub mod graph;
pub mod limits;
pub mod lotto;
pub mod parser;
pub mod problem;
pub mod quadratic;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use algebra::{Mobius, Polynomial, RationalFunction};
pub use ast::{Expr, ExprKind, Span};
pub use error::InversoError;
pub use grading::{check_answer, check_formula, Coefficient, Explanation, Grade, UserAnswer, Verdict};
pub use graph::{render, Graph};
pub use limits::QuizConfig;
pub use lotto::{LottoDraw, Rank, Ticket};
pub use parser::{parse_coefficients, parse_formula, parse_rational_function};
pub use problem::Problem;
pub use quadratic::Parabola;
pub use session::{Event, GradeState, SessionState};

/// Result type for Inverso operations
pub type InversoResult<T> = Result<T, InversoError>;

#[cfg(test)]
mod tests;
