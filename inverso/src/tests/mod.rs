
// Parser tests
mod error;

mod problem;

// Extra exercises
mod lotto;
mod quadratic;
