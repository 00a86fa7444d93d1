//! Graph model comparing a function with its inverse
//!
//! Produces sampled curves, asymptotes and the `y = x` reference line.
//! Drawing the model is left to the caller.

use crate::algebra::Mobius;
use crate::session::SessionState;
use crate::{Problem, QuizConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned viewing window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Window {
    pub fn contains(&self, point: Point) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Asymptote line `x = value` or `y = value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asymptote {
    pub orientation: Orientation,
    pub value: f64,
    /// Which curve the line belongs to
    pub curve: String,
}

/// One function drawn as two branches split at its vertical asymptote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub label: String,
    pub function: Mobius,
    pub vertical_asymptote: f64,
    pub horizontal_asymptote: f64,
    /// Left branch on `(x_min, va)`, right branch on `(va, x_max]`
    pub branches: [Vec<Point>; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub window: Window,
    pub original: Curve,
    pub inverse: Curve,
    pub asymptotes: Vec<Asymptote>,
    /// Endpoints of `y = x` clipped to the window
    pub symmetry_line: [Point; 2],
}

impl Graph {
    /// Build the comparison graph for a problem, regardless of grading
    pub fn for_problem(problem: &Problem, config: &QuizConfig) -> Graph {
        let f = problem.function();
        let inv = problem.canonical_inverse();

        // c ≠ 0 for both, so both asymptotes exist
        let f_va = -(f.d as f64) / f.c as f64;
        let f_ha = f.a as f64 / f.c as f64;
        let inv_va = -(inv.d as f64) / inv.c as f64;
        let inv_ha = inv.a as f64 / inv.c as f64;

        let xs = [f_va, inv_va];
        let ys = [f_ha, inv_ha];
        let window = Window {
            x_min: min(&xs) - config.horizontal_margin,
            x_max: max(&xs) + config.horizontal_margin,
            y_min: min(&ys) - config.vertical_margin,
            y_max: max(&ys) + config.vertical_margin,
        };

        let original = sample_curve("f", f, f_va, f_ha, &window, config.samples_per_branch);
        let inverse = sample_curve(
            "f^-1",
            inv,
            inv_va,
            inv_ha,
            &window,
            config.samples_per_branch,
        );

        let asymptotes = vec![
            asymptote(Orientation::Vertical, f_va, "f"),
            asymptote(Orientation::Horizontal, f_ha, "f"),
            asymptote(Orientation::Vertical, inv_va, "f^-1"),
            asymptote(Orientation::Horizontal, inv_ha, "f^-1"),
        ];

        let low = window.x_min.max(window.y_min);
        let high = window.x_max.min(window.y_max);
        let symmetry_line = [Point { x: low, y: low }, Point { x: high, y: high }];

        Graph {
            window,
            original,
            inverse,
            asymptotes,
            symmetry_line,
        }
    }
}

/// The graph for a session, only once the answer was graded correct
pub fn render(state: &SessionState, config: &QuizConfig) -> Option<Graph> {
    state
        .grade
        .graph_visible()
        .then(|| Graph::for_problem(&state.problem, config))
}

fn sample_curve(
    label: &str,
    function: Mobius,
    vertical_asymptote: f64,
    horizontal_asymptote: f64,
    window: &Window,
    samples: usize,
) -> Curve {
    let n = samples as f64;
    let left_span = vertical_asymptote - window.x_min;
    let right_span = window.x_max - vertical_asymptote;

    // Both intervals stay open at the asymptote
    let left = (0..samples)
        .map(|i| window.x_min + left_span * i as f64 / n)
        .collect::<Vec<_>>();
    let right = (1..=samples)
        .map(|i| vertical_asymptote + right_span * i as f64 / n)
        .collect::<Vec<_>>();

    let to_points = |xs: Vec<f64>| {
        xs.into_iter()
            .map(|x| Point {
                x,
                y: function.evaluate(x),
            })
            .filter(|p| p.y.is_finite())
            .collect::<Vec<_>>()
    };

    Curve {
        label: label.to_string(),
        function,
        vertical_asymptote,
        horizontal_asymptote,
        branches: [to_points(left), to_points(right)],
    }
}

fn asymptote(orientation: Orientation, value: f64, curve: &str) -> Asymptote {
    Asymptote {
        orientation,
        value,
        curve: curve.to_string(),
    }
}

fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
