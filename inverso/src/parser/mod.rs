use crate::algebra::RationalFunction;
use crate::ast::{Expr, Span};
use crate::error::InversoError;
use crate::limits::QuizConfig;
use pest::error::{InputLocation, LineColLocation};
use pest::Parser;
use pest_derive::Parser;
use std::sync::Arc;

pub mod evaluate;
pub mod formula;

pub(crate) const FORMULA_SOURCE: &str = "<formula>";
pub(crate) const COEFFICIENTS_SOURCE: &str = "<coefficients>";

#[derive(Parser)]
#[grammar = "src/parser/formula.pest"]
pub struct FormulaParser;

/// Parse a formula in `x` such as `(x + 1)/(3x - 2)`
pub fn parse_formula(input: &str, config: &QuizConfig) -> Result<Expr, InversoError> {
    let source: Arc<str> = Arc::from(input);

    if input.len() > config.max_formula_bytes {
        return Err(InversoError::parse_with_suggestion(
            format!(
                "Formula is {} bytes long, the limit is {} bytes",
                input.len(),
                config.max_formula_bytes
            ),
            Span::at(config.max_formula_bytes),
            FORMULA_SOURCE,
            source,
            "Enter the inverse in the form (Ax + B)/(Cx + D)",
        ));
    }

    let mut pairs = FormulaParser::parse(Rule::formula, input)
        .map_err(|e| from_pest_error(e, FORMULA_SOURCE, &source))?;

    let formula = pairs
        .next()
        .ok_or_else(|| InversoError::Engine("Empty parse result for formula".to_string()))?;
    let expression = formula
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::expression)
        .ok_or_else(|| InversoError::Engine("Formula without expression".to_string()))?;

    let builder = formula::ExprBuilder::new(FORMULA_SOURCE, source.clone());
    let expr = builder.expression(expression)?;

    if expr.depth() > config.max_expression_depth {
        return Err(InversoError::parse_with_suggestion(
            format!(
                "Formula nests {} levels deep, the limit is {}",
                expr.depth(),
                config.max_expression_depth
            ),
            expr.span.clone(),
            FORMULA_SOURCE,
            source,
            "Remove redundant parentheses",
        ));
    }

    let degree = expr.degree_bound();
    if degree > config.max_formula_degree {
        return Err(InversoError::parse_with_suggestion(
            format!(
                "Formula expands to degree up to {}, the limit is {}",
                degree, config.max_formula_degree
            ),
            expr.span.clone(),
            FORMULA_SOURCE,
            source,
            "The inverse only needs degree 1: (Ax + B)/(Cx + D)",
        ));
    }

    Ok(expr)
}

/// Parse and simplify a formula into a canonical rational function
pub fn parse_rational_function(
    input: &str,
    config: &QuizConfig,
) -> Result<RationalFunction, InversoError> {
    let expr = parse_formula(input, config)?;
    evaluate::to_rational_function(&expr, FORMULA_SOURCE, &Arc::from(input))
}

/// Parse four comma-separated integers, e.g. `2, 1, 3, -1`
pub fn parse_coefficients(input: &str) -> Result<[i64; 4], InversoError> {
    let source: Arc<str> = Arc::from(input);

    let mut pairs = FormulaParser::parse(Rule::coefficients, input)
        .map_err(|e| from_pest_error(e, COEFFICIENTS_SOURCE, &source))?;
    let list = pairs
        .next()
        .ok_or_else(|| InversoError::Engine("Empty parse result for coefficients".to_string()))?;

    let mut values = [0i64; 4];
    let mut count = 0;
    for pair in list.into_inner() {
        if pair.as_rule() != Rule::integer {
            continue;
        }
        let value = pair.as_str().parse::<i64>().map_err(|_| {
            InversoError::parse(
                format!("Coefficient '{}' does not fit in 64 bits", pair.as_str()),
                Span::from_pest_span(pair.as_span()),
                COEFFICIENTS_SOURCE,
                source.clone(),
            )
        })?;
        if let Some(slot) = values.get_mut(count) {
            *slot = value;
        }
        count += 1;
    }

    if count != 4 {
        return Err(InversoError::Engine(format!(
            "Expected 4 coefficients, found {}",
            count
        )));
    }
    Ok(values)
}

fn from_pest_error(
    error: pest::error::Error<Rule>,
    source_id: &str,
    source: &Arc<str>,
) -> InversoError {
    let error = error.renamed_rules(|rule| match rule {
        Rule::number | Rule::integer => "a number".to_string(),
        Rule::variable => "x".to_string(),
        Rule::add_op => "`+` or `-`".to_string(),
        Rule::mul_op => "`*` or `/`".to_string(),
        Rule::negation => "`-`".to_string(),
        Rule::EOI => "end of input".to_string(),
        other => format!("{:?}", other),
    });

    let (start, end) = match error.location {
        InputLocation::Pos(pos) => (pos, pos),
        InputLocation::Span((start, end)) => (start, end),
    };
    let (line, col) = match error.line_col {
        LineColLocation::Pos(pos) => pos,
        LineColLocation::Span(start, _) => start,
    };

    let suggestion = if source_id == COEFFICIENTS_SOURCE {
        "Write four integers separated by commas, e.g. 2,1,3,-1"
    } else {
        "Write a formula in x, e.g. (x + 1)/(3x - 2)"
    };

    InversoError::parse_with_suggestion(
        error.variant.message().to_string(),
        Span {
            start,
            end,
            line,
            col,
        },
        source_id,
        source.clone(),
        suggestion,
    )
}
