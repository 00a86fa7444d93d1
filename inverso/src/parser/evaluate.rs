//! Symbolic evaluation of formula trees into canonical rational functions

use crate::algebra::RationalFunction;
use crate::ast::{BinaryOp, Expr, ExprKind};
use crate::error::InversoError;
use num_bigint::BigInt;
use num_rational::BigRational;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Simplify an expression tree to `numerator / denominator` form.
///
/// Fails when a divisor simplifies to the zero function, e.g. `1/(x - x)`.
pub fn to_rational_function(
    expr: &Expr,
    source_id: &str,
    source: &Arc<str>,
) -> Result<RationalFunction, InversoError> {
    match &expr.kind {
        ExprKind::Number(value) => Ok(RationalFunction::constant(decimal_to_rational(value))),
        ExprKind::Variable => Ok(RationalFunction::x()),
        ExprKind::Negate(inner) => Ok(-&to_rational_function(inner, source_id, source)?),
        ExprKind::Power(base, exponent) => {
            Ok(to_rational_function(base, source_id, source)?.pow(*exponent))
        }
        ExprKind::Binary(left, op, right) => {
            let l = to_rational_function(left, source_id, source)?;
            let r = to_rational_function(right, source_id, source)?;
            match op {
                BinaryOp::Add => Ok(&l + &r),
                BinaryOp::Subtract => Ok(&l - &r),
                BinaryOp::Multiply => Ok(&l * &r),
                BinaryOp::Divide => l.checked_div(&r).ok_or_else(|| {
                    let divisor = source
                        .get(right.span.start..right.span.end)
                        .map(str::to_string)
                        .unwrap_or_else(|| right.to_string());
                    InversoError::parse_with_suggestion(
                        format!("Division by zero: '{}' simplifies to 0", divisor),
                        right.span.clone(),
                        source_id,
                        source.clone(),
                        "The denominator must not vanish identically",
                    )
                }),
            }
        }
    }
}

/// Exact value of a decimal literal: mantissa / 10^scale
pub fn decimal_to_rational(value: &Decimal) -> BigRational {
    let denominator = num_traits::pow(BigInt::from(10), value.scale() as usize);
    BigRational::new(BigInt::from(value.mantissa()), denominator)
}
