use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use crossterm::style::Stylize;
use inverso::lotto::{LottoDraw, Ticket, TicketResult};
use inverso::quadratic::{self, Convexity, Parabola, QuizVerdict};
use inverso::{Grade, GradeState, Problem, SessionState};
use std::io::IsTerminal;

pub struct Formatter {
    color: bool,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(std::io::stdout().is_terminal())
    }
}

impl Formatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn format_problem(&self, problem: &Problem) -> String {
        let mut output = format!("Find the inverse of {}\n", problem);

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(
            ["a", "b", "c", "d"]
                .into_iter()
                .map(|name| Cell::new(name).set_alignment(CellAlignment::Center))
                .collect::<Vec<_>>(),
        ));
        table.add_row(Row::from(
            problem
                .function()
                .to_array()
                .into_iter()
                .map(|value| Cell::new(value).set_alignment(CellAlignment::Right))
                .collect::<Vec<_>>(),
        ));

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    pub fn format_grade(&self, grade: &Grade) -> String {
        let mut output = self.paint(&grade.verdict.message(), grade.correct);
        output.push('\n');

        if let Some(explanation) = grade.verdict.explanation() {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.add_row(Row::from(vec![Cell::new(explanation)]));
            output.push_str(&table.to_string());
            output.push('\n');
        }

        if grade.graph_visible {
            output.push_str("The graph of f and f^-1 is now unlocked.\n");
        }
        output
    }

    pub fn format_session(&self, state: &SessionState) -> String {
        let status = match &state.grade {
            GradeState::Ungraded => "not checked yet".to_string(),
            GradeState::GradedIncorrect { .. } => self.paint("incorrect", false),
            GradeState::GradedCorrect => self.paint("correct", true),
        };

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.add_row(Row::from(vec![
            Cell::new("Problem"),
            Cell::new(&state.problem),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Your answer"),
            Cell::new(format!("f^-1(x) = {}", state.answer)),
        ]));
        table.add_row(Row::from(vec![Cell::new("Status"), Cell::new(status)]));

        format!("{}\n", table)
    }

    pub fn format_tickets(&self, draw: &LottoDraw, results: &[(Ticket, TicketResult)]) -> String {
        let mut output = format!(
            "Round {} ({}): {} + bonus {}\n",
            draw.round,
            draw.date.format("%Y-%m-%d"),
            draw.numbers,
            draw.bonus
        );

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#"),
            Cell::new("Numbers").set_alignment(CellAlignment::Left),
            Cell::new("Matched"),
            Cell::new("Prize").set_alignment(CellAlignment::Left),
        ]));

        for (index, (ticket, result)) in results.iter().enumerate() {
            let matched = if result.bonus_matched {
                format!("{} + bonus", result.matched)
            } else {
                result.matched.to_string()
            };
            table.add_row(Row::from(vec![
                Cell::new(index + 1),
                Cell::new(ticket),
                Cell::new(matched).set_alignment(CellAlignment::Right),
                Cell::new(&result.rank),
            ]));
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    pub fn format_parabola(
        &self,
        parabola: &Parabola,
        convexity: Option<QuizVerdict>,
        width: Option<QuizVerdict>,
    ) -> String {
        let shape = match parabola.shape() {
            Convexity::OpensUpward => "opens upward",
            Convexity::OpensDownward => "opens downward",
            Convexity::Flat => "is the line y = 0",
        };
        let mut output = format!("y = {}x² {}\n", parabola.a(), shape);

        if let Some(verdict) = convexity {
            output.push_str(&self.paint(quadratic::convexity_feedback(verdict), verdict.is_correct()));
            output.push('\n');
        }
        if let Some(verdict) = width {
            output.push_str(&self.paint(quadratic::width_feedback(verdict), verdict.is_correct()));
            output.push('\n');
        }
        output
    }

    fn paint(&self, text: &str, good: bool) -> String {
        match (self.color, good) {
            (false, _) => text.to_string(),
            (true, true) => text.green().bold().to_string(),
            (true, false) => text.red().bold().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inverso::{check_answer, UserAnswer};

    fn plain() -> Formatter {
        Formatter::new(false)
    }

    fn sample_problem() -> Problem {
        Problem::new(2, 1, 3, -1).unwrap()
    }

    #[test]
    fn test_problem_table() {
        let output = plain().format_problem(&sample_problem());
        assert!(output.starts_with("Find the inverse of f(x) = (2x + 1)/(3x - 1)"));
        assert!(output.contains("-1"));
    }

    #[test]
    fn test_correct_grade() {
        let grade = check_answer(&sample_problem(), &UserAnswer::new(2, 2, 6, -4));
        let output = plain().format_grade(&grade);
        assert!(output.contains("Correct!"));
        assert!(output.contains("unlocked"));
    }

    #[test]
    fn test_wrong_grade_shows_explanation() {
        let grade = check_answer(&sample_problem(), &UserAnswer::new(1, 1, 3, 2));
        let output = plain().format_grade(&grade);
        assert!(output.starts_with("Incorrect."));
        assert!(output.contains("A = 1, B = 1, C = 3, D = -2"));
        assert!(!output.contains("unlocked"));
    }

    #[test]
    fn test_session_status() {
        let state = SessionState::with_problem(sample_problem());
        let output = plain().format_session(&state);
        assert!(output.contains("not checked yet"));
        assert!(output.contains("f^-1(x) = (0)/(x)"));
    }

    #[test]
    fn test_ticket_table() {
        let draw = LottoDraw::latest();
        let ticket = Ticket::new([3, 15, 27, 33, 34, 37]).unwrap();
        let result = draw.check(&ticket);
        let output = plain().format_tickets(&draw, &[(ticket, result)]);
        assert!(output.starts_with("Round 1195 (2025-10-25)"));
        assert!(output.contains("5 + bonus"));
        assert!(output.contains("2nd prize"));
    }

    #[test]
    fn test_parabola_feedback() {
        let parabola = Parabola::new(-1.5).unwrap();
        let output = plain().format_parabola(
            &parabola,
            Some(QuizVerdict::Correct),
            Some(QuizVerdict::Misconception),
        );
        assert!(output.starts_with("y = -1.5x² opens downward"));
        assert!(output.contains("Correct! When a > 0"));
        assert!(output.contains("wider as |a| gets smaller"));
    }

    #[test]
    fn test_color_only_when_enabled() {
        let grade = check_answer(&sample_problem(), &UserAnswer::new(1, 1, 3, -2));
        assert!(!plain().format_grade(&grade).contains('\u{1b}'));
        assert!(Formatter::new(true).format_grade(&grade).contains("Correct!"));
    }
}
