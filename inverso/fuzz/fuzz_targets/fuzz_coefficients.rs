#![no_main]

use inverso::{check_answer, parse_coefficients, Problem, UserAnswer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok([a, b, c, d]) = parse_coefficients(s) {
            if let Ok(problem) = Problem::new(a, b, c, d) {
                let inverse = problem.canonical_inverse();
                assert!(check_answer(&problem, &UserAnswer::from(inverse)).correct);
            }
        }
    }
});
