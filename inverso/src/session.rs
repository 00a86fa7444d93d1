//! Quiz sessions as immutable values
//!
//! A session is advanced by applying an `Event`, which yields the next
//! session. Nothing is mutated in place, so a state can be stored,
//! serialized or replayed freely.

use crate::grading::{check_answer, check_formula, Coefficient, Grade, UserAnswer, Verdict};
use crate::{InversoResult, Problem, QuizConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Where the current answer stands.
///
/// `GradedCorrect` is the only state in which the graph is drawn. A new
/// problem always returns to `Ungraded`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GradeState {
    #[default]
    Ungraded,
    GradedIncorrect {
        verdict: Verdict,
    },
    GradedCorrect,
}

impl GradeState {
    pub fn is_graded(&self) -> bool {
        !matches!(self, GradeState::Ungraded)
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, GradeState::GradedCorrect)
    }

    pub fn graph_visible(&self) -> bool {
        self.is_correct()
    }

    /// The grading result that produced this state, if any
    pub fn grade(&self) -> Option<Grade> {
        match self {
            GradeState::Ungraded => None,
            GradeState::GradedIncorrect { verdict } => Some(verdict.clone().into()),
            GradeState::GradedCorrect => Some(Verdict::Correct.into()),
        }
    }
}

impl From<Grade> for GradeState {
    fn from(grade: Grade) -> Self {
        if grade.correct {
            GradeState::GradedCorrect
        } else {
            GradeState::GradedIncorrect {
                verdict: grade.verdict,
            }
        }
    }
}

/// User interactions that drive a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    NewProblem,
    SetAnswer { answer: UserAnswer },
    SetCoefficient { slot: Coefficient, value: i64 },
    Check,
    CheckFormula { formula: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub problem: Problem,
    pub answer: UserAnswer,
    /// Written out for display but never read back: a grade only comes
    /// from running the checker, so a restored session starts `Ungraded`.
    #[serde(default, skip_deserializing)]
    pub grade: GradeState,
}

impl SessionState {
    /// A session for a given problem with a blank answer
    pub fn with_problem(problem: Problem) -> Self {
        Self {
            problem,
            answer: UserAnswer::default(),
            grade: GradeState::Ungraded,
        }
    }

    /// Fresh session with a newly generated problem
    pub fn start<R: Rng + ?Sized>(rng: &mut R, config: &QuizConfig) -> InversoResult<Self> {
        let problem = Problem::generate(rng, config)?;
        info!(%problem, "session started");
        Ok(Self::with_problem(problem))
    }

    /// Apply one event and return the resulting session.
    ///
    /// Only `NewProblem` consults the random source and only it can fail,
    /// when the configuration admits no invertible problem.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        event: &Event,
        rng: &mut R,
        config: &QuizConfig,
    ) -> InversoResult<Self> {
        let next = match event {
            Event::NewProblem => {
                let problem = Problem::generate(rng, config)?;
                info!(%problem, "new problem");
                Self::with_problem(problem)
            }
            Event::SetAnswer { answer } => self.with_answer(*answer),
            Event::SetCoefficient { slot, value } => {
                self.with_answer(self.answer.with(*slot, *value))
            }
            Event::Check => Self {
                grade: check_answer(&self.problem, &self.answer).into(),
                ..self.clone()
            },
            Event::CheckFormula { formula } => Self {
                grade: check_formula(&self.problem, formula, config).into(),
                ..self.clone()
            },
        };
        Ok(next)
    }

    /// Editing the answer invalidates an earlier grade; re-entering the
    /// same values keeps it.
    fn with_answer(&self, answer: UserAnswer) -> Self {
        if answer == self.answer {
            return self.clone();
        }
        Self {
            answer,
            grade: GradeState::Ungraded,
            ..self.clone()
        }
    }
}
