use crate::formatter::Formatter;
use crate::plot;
use anyhow::{Context, Result};
use inquire::{CustomType, Select, Text};
use inverso::{render, Coefficient, Event, QuizConfig, SessionState, UserAnswer};
use rand::Rng;
use std::fmt;
use std::fs;
use tracing::debug;

const GRAPH_FILE: &str = "inverso-graph.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    EnterAnswer,
    EnterFormula,
    NewProblem,
    Plot,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::EnterAnswer => "Enter the coefficients A, B, C, D",
            Action::EnterFormula => "Type the inverse as a formula",
            Action::NewProblem => "New problem",
            Action::Plot => "Save the graph of f and f^-1",
            Action::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

/// Actions on offer for a session; plotting appears once the answer is correct
fn available_actions(state: &SessionState) -> Vec<Action> {
    let mut actions = vec![Action::EnterAnswer, Action::EnterFormula, Action::NewProblem];
    if state.grade.graph_visible() {
        actions.push(Action::Plot);
    }
    actions.push(Action::Quit);
    actions
}

pub fn run_quiz<R: Rng>(rng: &mut R, config: &QuizConfig) -> Result<()> {
    let formatter = Formatter::default();
    let mut state = SessionState::start(rng, config)?;

    println!(
        "Write the inverse as f^-1(x) = (Ax + B)/(Cx + D).\n\n{}",
        formatter.format_problem(&state.problem)
    );

    loop {
        let action = Select::new("What next?", available_actions(&state))
            .with_help_message("Use arrow keys to navigate, Enter to select")
            .prompt()
            .context("Failed to get action selection")?;
        debug!(?action, "selected");

        let event = match action {
            Action::EnterAnswer => {
                let answer = prompt_answer(&state.answer)?;
                state = state.apply(&Event::SetAnswer { answer }, rng, config)?;
                Event::Check
            }
            Action::EnterFormula => {
                let formula = Text::new("f^-1(x) =")
                    .with_help_message("Example: (x + 1)/(3x - 2)")
                    .prompt()
                    .context("Failed to get formula")?;
                Event::CheckFormula { formula }
            }
            Action::NewProblem => Event::NewProblem,
            Action::Plot => {
                if let Some(graph) = render(&state, config) {
                    fs::write(GRAPH_FILE, plot::graph_to_svg(&graph))
                        .with_context(|| format!("Failed to write {}", GRAPH_FILE))?;
                    println!("Wrote graph to {}\n", GRAPH_FILE);
                }
                continue;
            }
            Action::Quit => return Ok(()),
        };

        state = state.apply(&event, rng, config)?;

        match (&event, state.grade.grade()) {
            (Event::NewProblem, _) => print!("{}", formatter.format_problem(&state.problem)),
            (_, Some(grade)) => print!("{}", formatter.format_grade(&grade)),
            (_, None) => {}
        }
        println!();
    }
}

fn prompt_answer(current: &UserAnswer) -> Result<UserAnswer> {
    let mut answer = *current;
    for slot in Coefficient::ALL {
        let value = CustomType::<i64>::new(&format!("{} =", slot.label()))
            .with_default(current.get(slot))
            .with_error_message("Please type an integer")
            .prompt()
            .with_context(|| format!("Failed to get value for {}", slot.label()))?;
        answer = answer.with(slot, value);
    }
    Ok(answer)
}
