//! Explorer for parabolas `y = ax²` and its two-question quiz

use crate::graph::{Point, Window};
use crate::{InversoError, InversoResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

pub const MIN_A: f64 = -5.0;
pub const MAX_A: f64 = 5.0;
pub const DEFAULT_SAMPLES: usize = 400;

/// Fixed square window used for every parabola so shapes stay comparable
pub const WINDOW: Window = Window {
    x_min: -10.0,
    x_max: 10.0,
    y_min: -10.0,
    y_max: 10.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parabola {
    a: f64,
}

impl Parabola {
    pub fn new(a: f64) -> InversoResult<Self> {
        if !(MIN_A..=MAX_A).contains(&a) {
            return Err(InversoError::Config(format!(
                "Coefficient a must lie in [{}, {}], got {}",
                MIN_A, MAX_A, a
            )));
        }
        Ok(Self { a })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x * x
    }

    /// Evenly spaced samples over the window's x range, endpoints included
    pub fn sample(&self, points: usize) -> Vec<Point> {
        let steps = points.saturating_sub(1).max(1) as f64;
        (0..points)
            .map(|i| {
                let x = WINDOW.x_min + WINDOW.width() * i as f64 / steps;
                Point {
                    x,
                    y: self.evaluate(x),
                }
            })
            .collect()
    }

    pub fn shape(&self) -> Convexity {
        if self.a > 0.0 {
            Convexity::OpensUpward
        } else if self.a < 0.0 {
            Convexity::OpensDownward
        } else {
            Convexity::Flat
        }
    }
}

/// Direction in which the parabola opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convexity {
    OpensUpward,
    OpensDownward,
    Flat,
}

impl FromStr for Convexity {
    type Err = InversoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_answer(s).as_str() {
            "up" | "upward" | "opensupward" | "아래로볼록" => Ok(Convexity::OpensUpward),
            "down" | "downward" | "opensdownward" | "위로볼록" => Ok(Convexity::OpensDownward),
            "flat" | "none" | "볼록하지않음" => Ok(Convexity::Flat),
            _ => Err(InversoError::Engine(format!(
                "Unknown choice '{}', expected up, down or flat",
                s.trim()
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizVerdict {
    Correct,
    /// The answer describes the opposite trend
    Misconception,
    Incorrect,
}

impl QuizVerdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, QuizVerdict::Correct)
    }
}

const NARROWER: [&str; 7] = [
    "좁아진다",
    "좁아짐",
    "좁아",
    "가늘어진다",
    "narrower",
    "narrows",
    "thinner",
];

const WIDER: [&str; 7] = [
    "넓어진다",
    "넓어짐",
    "넓어",
    "두꺼워진다",
    "wider",
    "widens",
    "broader",
];

/// Question 1: which way does `y = ax²` open when `a > 0`?
pub fn check_convexity(choice: Convexity) -> QuizVerdict {
    if choice == Convexity::OpensUpward {
        QuizVerdict::Correct
    } else {
        QuizVerdict::Incorrect
    }
}

/// Question 2: what happens to the width as `|a|` grows?
pub fn check_width(answer: &str) -> QuizVerdict {
    let cleaned = normalize_answer(answer);
    if NARROWER.iter().any(|keyword| cleaned.contains(keyword)) {
        QuizVerdict::Correct
    } else if WIDER.contains(&cleaned.as_str()) {
        QuizVerdict::Misconception
    } else {
        QuizVerdict::Incorrect
    }
}

pub fn convexity_feedback(verdict: QuizVerdict) -> &'static str {
    match verdict {
        QuizVerdict::Correct => "Correct! When a > 0 the parabola opens upward.",
        _ => "Incorrect. Look at the graph again for a > 0.",
    }
}

pub fn width_feedback(verdict: QuizVerdict) -> &'static str {
    match verdict {
        QuizVerdict::Correct => "Correct! The larger |a| is, the narrower the parabola.",
        QuizVerdict::Misconception => {
            "Incorrect. The parabola gets wider as |a| gets smaller; \
             watch what happens when |a| grows."
        }
        QuizVerdict::Incorrect => {
            "Incorrect. Watch how the width changes as the value of |a| changes."
        }
    }
}

/// Lowercase with all whitespace removed
fn normalize_answer(answer: &str) -> String {
    static WHITESPACE: OnceLock<Option<Regex>> = OnceLock::new();
    let stripped = match WHITESPACE.get_or_init(|| Regex::new(r"\s+").ok()) {
        Some(re) => re.replace_all(answer, "").into_owned(),
        None => answer.split_whitespace().collect(),
    };
    stripped.to_lowercase()
}
