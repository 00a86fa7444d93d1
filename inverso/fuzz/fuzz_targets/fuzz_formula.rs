#![no_main]

use inverso::{check_formula, parse_rational_function, Problem, QuizConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let config = QuizConfig::default();

        let _ = parse_rational_function(s, &config);

        if let Ok(problem) = Problem::new(2, 1, 3, -1) {
            let _ = check_formula(&problem, s, &config);
        }
    }
});
