use crate::{InversoError, InversoResult};
use serde::{Deserialize, Serialize};

/// Knobs for problem generation, formula input and graph sampling
///
/// The defaults reproduce the classroom setup: single-digit coefficients,
/// 300 samples per curve branch and a window padded by 5 units
/// horizontally and 10 vertically around the asymptotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Smallest coefficient the generator may draw
    pub min_coefficient: i64,

    /// Largest coefficient the generator may draw
    pub max_coefficient: i64,

    /// Upper bound on rejection-sampling rounds before giving up
    /// Real usage: ~1.1 rounds on average, Limit: 10 000
    pub max_generation_attempts: usize,

    /// Points sampled on each side of a vertical asymptote
    pub samples_per_branch: usize,

    /// Horizontal padding of the graph window beyond the asymptotes
    pub horizontal_margin: f64,

    /// Vertical padding of the graph window beyond the asymptotes
    pub vertical_margin: f64,

    /// Maximum length of a typed formula in bytes
    /// Real usage: ~15 bytes, Limit: 256
    pub max_formula_bytes: usize,

    /// Maximum nesting depth of a typed formula
    pub max_expression_depth: usize,

    /// Maximum polynomial degree a typed formula may expand to
    /// Real usage: 1, Limit: 32
    pub max_formula_degree: u64,

    /// Maximum number of lottery tickets per request
    pub max_lotto_tickets: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            min_coefficient: -5,
            max_coefficient: 5,
            max_generation_attempts: 10_000,
            samples_per_branch: 300,
            horizontal_margin: 5.0,
            vertical_margin: 10.0,
            max_formula_bytes: 256,
            max_expression_depth: 32,
            max_formula_degree: 32,
            max_lotto_tickets: 5,
        }
    }
}

impl QuizConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the configuration can produce problems and graphs
    pub fn validate(&self) -> InversoResult<()> {
        if self.min_coefficient > self.max_coefficient {
            return Err(InversoError::Config(format!(
                "coefficient range is empty: min {} > max {}",
                self.min_coefficient, self.max_coefficient
            )));
        }
        if self.min_coefficient == 0 && self.max_coefficient == 0 {
            return Err(InversoError::Config(
                "coefficient range must contain a nonzero value for c".to_string(),
            ));
        }
        if self.max_generation_attempts == 0 {
            return Err(InversoError::Config(
                "max_generation_attempts must be at least 1".to_string(),
            ));
        }
        if self.samples_per_branch < 2 {
            return Err(InversoError::Config(format!(
                "samples_per_branch must be at least 2, got {}",
                self.samples_per_branch
            )));
        }
        if !(self.horizontal_margin > 0.0 && self.vertical_margin > 0.0) {
            return Err(InversoError::Config(
                "graph margins must be positive".to_string(),
            ));
        }
        if self.max_formula_degree == 0 {
            return Err(InversoError::Config(
                "max_formula_degree must be at least 1".to_string(),
            ));
        }
        if self.max_lotto_tickets == 0 {
            return Err(InversoError::Config(
                "max_lotto_tickets must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
