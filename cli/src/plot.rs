//! SVG export for the graph model and the parabola explorer

use inverso::graph::{Asymptote, Curve, Graph, Orientation, Point, Window};
use inverso::quadratic::{self, Parabola};
use std::fmt::Write;

const SIZE: f64 = 600.0;
const PADDING: f64 = 20.0;

const ORIGINAL_COLOR: &str = "#1f77b4";
const INVERSE_COLOR: &str = "#d62728";
const SYMMETRY_COLOR: &str = "#7f7f7f";
const AXIS_COLOR: &str = "#000000";

/// Maps window coordinates to SVG pixels, y growing upward
struct Canvas {
    window: Window,
    body: String,
}

impl Canvas {
    fn new(window: Window) -> Self {
        Self {
            window,
            body: String::new(),
        }
    }

    fn px(&self, x: f64) -> f64 {
        PADDING + (x - self.window.x_min) / self.window.width() * (SIZE - 2.0 * PADDING)
    }

    fn py(&self, y: f64) -> f64 {
        PADDING + (self.window.y_max - y) / self.window.height() * (SIZE - 2.0 * PADDING)
    }

    fn line(&mut self, from: Point, to: Point, color: &str, dash: Option<&str>) {
        let dash = dash
            .map(|pattern| format!(r#" stroke-dasharray="{}""#, pattern))
            .unwrap_or_default();
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1"{}/>"#,
            self.px(from.x),
            self.py(from.y),
            self.px(to.x),
            self.py(to.y),
            color,
            dash
        );
    }

    /// Draw points as polylines, breaking wherever the curve leaves the window
    fn polyline(&mut self, points: &[Point], color: &str) {
        for run in visible_runs(points, &self.window) {
            if run.len() < 2 {
                continue;
            }
            let coords = run
                .iter()
                .map(|p| format!("{:.2},{:.2}", self.px(p.x), self.py(p.y)))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(
                self.body,
                r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
                coords, color
            );
        }
    }

    fn axes(&mut self) {
        let w = self.window;
        if (w.y_min..=w.y_max).contains(&0.0) {
            self.line(
                Point { x: w.x_min, y: 0.0 },
                Point { x: w.x_max, y: 0.0 },
                AXIS_COLOR,
                None,
            );
        }
        if (w.x_min..=w.x_max).contains(&0.0) {
            self.line(
                Point { x: 0.0, y: w.y_min },
                Point { x: 0.0, y: w.y_max },
                AXIS_COLOR,
                None,
            );
        }
    }

    fn asymptote(&mut self, asymptote: &Asymptote, color: &str) {
        let w = self.window;
        let (from, to) = match asymptote.orientation {
            Orientation::Vertical => (
                Point {
                    x: asymptote.value,
                    y: w.y_min,
                },
                Point {
                    x: asymptote.value,
                    y: w.y_max,
                },
            ),
            Orientation::Horizontal => (
                Point {
                    x: w.x_min,
                    y: asymptote.value,
                },
                Point {
                    x: w.x_max,
                    y: asymptote.value,
                },
            ),
        };
        self.line(from, to, color, Some("6 4"));
    }

    fn legend(&mut self, entries: &[(&str, &str)]) {
        for (row, (label, color)) in entries.iter().enumerate() {
            let y = PADDING + 16.0 * (row as f64 + 1.0);
            let _ = writeln!(
                self.body,
                r#"<text x="{:.2}" y="{:.2}" fill="{}" font-family="sans-serif" font-size="13">{}</text>"#,
                SIZE - PADDING - 150.0,
                y,
                color,
                escape(label)
            );
        }
    }

    fn finish(self) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
                "\n",
                r#"<rect width="100%" height="100%" fill="white"/>"#,
                "\n{body}</svg>\n"
            ),
            size = SIZE,
            body = self.body
        )
    }
}

/// Render the comparison of f and f^-1
pub fn graph_to_svg(graph: &Graph) -> String {
    let mut canvas = Canvas::new(graph.window);
    canvas.axes();

    let [low, high] = graph.symmetry_line;
    canvas.line(low, high, SYMMETRY_COLOR, Some("2 3"));

    for asymptote in &graph.asymptotes {
        let color = if asymptote.curve == graph.original.label {
            ORIGINAL_COLOR
        } else {
            INVERSE_COLOR
        };
        canvas.asymptote(asymptote, color);
    }

    draw_curve(&mut canvas, &graph.original, ORIGINAL_COLOR);
    draw_curve(&mut canvas, &graph.inverse, INVERSE_COLOR);

    let original = format!("f(x) = {}", graph.original.function);
    let inverse = format!("f^-1(x) = {}", graph.inverse.function);
    canvas.legend(&[
        (original.as_str(), ORIGINAL_COLOR),
        (inverse.as_str(), INVERSE_COLOR),
        ("y = x", SYMMETRY_COLOR),
    ]);
    canvas.finish()
}

/// Render y = ax² on the fixed explorer window
pub fn parabola_to_svg(parabola: &Parabola, samples: usize) -> String {
    let mut canvas = Canvas::new(quadratic::WINDOW);
    canvas.axes();
    canvas.polyline(&parabola.sample(samples), ORIGINAL_COLOR);

    let label = format!("y = {}x²", parabola.a());
    canvas.legend(&[(label.as_str(), ORIGINAL_COLOR)]);
    canvas.finish()
}

fn draw_curve(canvas: &mut Canvas, curve: &Curve, color: &str) {
    for branch in &curve.branches {
        canvas.polyline(branch, color);
    }
}

fn visible_runs<'a>(points: &'a [Point], window: &Window) -> Vec<&'a [Point]> {
    points
        .split(|p| !window.contains(*p))
        .filter(|run| !run.is_empty())
        .collect()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use inverso::{Problem, QuizConfig};

    fn sample_graph() -> Graph {
        Graph::for_problem(&Problem::new(2, 1, 3, -1).unwrap(), &QuizConfig::default())
    }

    #[test]
    fn test_graph_svg_structure() {
        let svg = graph_to_svg(&sample_graph());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(ORIGINAL_COLOR));
        assert!(svg.contains(INVERSE_COLOR));
        assert!(svg.contains("y = x"));
    }

    #[test]
    fn test_asymptotes_are_dashed() {
        let svg = graph_to_svg(&sample_graph());
        assert_eq!(svg.matches(r#"stroke-dasharray="6 4""#).count(), 4);
        assert_eq!(svg.matches(r#"stroke-dasharray="2 3""#).count(), 1);
    }

    #[test]
    fn test_branches_do_not_join_across_asymptote() {
        let graph = sample_graph();
        let svg = graph_to_svg(&graph);
        // One polyline per branch at least
        assert!(svg.matches("<polyline").count() >= 4);
    }

    #[test]
    fn test_visible_runs_split_outside_points() {
        let window = Window {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        };
        let points = [
            Point { x: -0.5, y: 0.0 },
            Point { x: -0.4, y: 0.1 },
            Point { x: 0.0, y: 5.0 },
            Point { x: 0.4, y: 0.1 },
        ];
        let runs = visible_runs(&points, &window);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 1);
    }

    #[test]
    fn test_parabola_svg() {
        let svg = parabola_to_svg(&Parabola::new(0.5).unwrap(), 100);
        assert!(svg.contains("<polyline"));
        assert!(svg.contains("y = 0.5x²"));
    }

    #[test]
    fn test_legend_escapes_markup() {
        assert_eq!(escape("a<b & c>d"), "a&lt;b &amp; c&gt;d");
    }
}
