use crate::graph::render;
use crate::{Event, InversoError, QuizConfig, SessionState, UserAnswer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmQuiz {
    state: SessionState,
    rng: StdRng,
    config: QuizConfig,
}

#[wasm_bindgen]
impl WasmQuiz {
    /// The browser has no entropy source wired in, so the page passes a seed
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<WasmQuiz, JsValue> {
        console_error_panic_hook::set_once();

        let config = QuizConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let state = SessionState::start(&mut rng, &config).map_err(to_js_error)?;
        Ok(WasmQuiz { state, rng, config })
    }

    /// Current session: problem, answer and grade
    #[wasm_bindgen(js_name = problem)]
    pub fn problem(&self) -> String {
        to_json(&serde_json::json!({
            "success": true,
            "problem": self.state.problem,
            "text": self.state.problem.to_string(),
            "latex": self.state.problem.to_latex(),
            "answer": self.state.answer,
            "grade": self.state.grade,
            "error": serde_json::Value::Null
        }))
    }

    #[wasm_bindgen(js_name = setAnswer)]
    pub fn set_answer(&mut self, a: i32, b: i32, c: i32, d: i32) -> String {
        let answer = UserAnswer::new(a.into(), b.into(), c.into(), d.into());
        self.step(&Event::SetAnswer { answer })
    }

    #[wasm_bindgen(js_name = check)]
    pub fn check(&mut self) -> String {
        self.step(&Event::Check)
    }

    #[wasm_bindgen(js_name = checkFormula)]
    pub fn check_formula(&mut self, formula: &str) -> String {
        self.step(&Event::CheckFormula {
            formula: formula.to_string(),
        })
    }

    #[wasm_bindgen(js_name = newProblem)]
    pub fn new_problem(&mut self) -> String {
        self.step(&Event::NewProblem)
    }

    /// Graph model, or `null` until the answer is graded correct
    #[wasm_bindgen(js_name = graph)]
    pub fn graph(&self) -> String {
        to_json(&serde_json::json!({
            "success": true,
            "graph": render(&self.state, &self.config),
            "error": serde_json::Value::Null
        }))
    }
}

impl WasmQuiz {
    fn step(&mut self, event: &Event) -> String {
        match self.state.apply(event, &mut self.rng, &self.config) {
            Ok(next) => {
                self.state = next;
                let grade = self.state.grade.grade();
                to_json(&serde_json::json!({
                    "success": true,
                    "state": self.state,
                    "message": grade.as_ref().map(|g| g.verdict.to_string()),
                    "error": serde_json::Value::Null
                }))
            }
            Err(e) => to_json(&serde_json::json!({
                "success": false,
                "state": serde_json::Value::Null,
                "message": serde_json::Value::Null,
                "error": format_error(&e)
            })),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| {
        r#"{"success":false,"error":"Failed to serialize response"}"#.to_string()
    })
}

fn to_js_error(error: InversoError) -> JsValue {
    JsValue::from_str(&format_error(&error))
}

fn format_error(error: &InversoError) -> String {
    match error {
        InversoError::Parse(details) => format!("Parse Error: {}", details.message),
        InversoError::InvalidProblem(msg) => format!("Invalid Problem: {}", msg),
        InversoError::Config(msg) => format!("Configuration Error: {}", msg),
        InversoError::Engine(msg) => format!("Engine Error: {}", msg),
    }
}
