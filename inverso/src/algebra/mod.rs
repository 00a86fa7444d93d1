//! Exact symbolic algebra for linear-over-linear functions
//!
//! Polynomials carry `BigRational` coefficients so that simplification is
//! exact over the rationals; floating point only appears when sampling
//! points for graphs.

pub mod mobius;
pub mod polynomial;
pub mod rational;

pub use mobius::Mobius;
pub use polynomial::Polynomial;
pub use rational::RationalFunction;
