#![no_main]

use inverso::{parse_rational_function, QuizConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|depth: u8| {
    let depth = (depth as usize % 50) + 1;

    let mut expr = String::from("x");
    for _ in 0..depth {
        expr = format!("(1/({} + 1))", expr);
    }

    let _ = parse_rational_function(&expr, &QuizConfig::default());
});
