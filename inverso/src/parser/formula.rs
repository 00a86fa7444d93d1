use crate::ast::{BinaryOp, Expr, ExprKind, Span};
use crate::error::InversoError;
use crate::parser::Rule;
use pest::iterators::Pair;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

/// Exponents above this are rejected; answers never need more than a square
pub(crate) const MAX_EXPONENT: u32 = 16;

/// Turns pest pairs into `Expr` trees, keeping spans for diagnostics
pub(crate) struct ExprBuilder {
    source_id: &'static str,
    source: Arc<str>,
}

impl ExprBuilder {
    pub(crate) fn new(source_id: &'static str, source: Arc<str>) -> Self {
        Self { source_id, source }
    }

    // expression = { negation? ~ term ~ (add_op ~ negation? ~ term)* }
    pub(crate) fn expression(&self, pair: Pair<Rule>) -> Result<Expr, InversoError> {
        let mut acc: Option<Expr> = None;
        let mut op = BinaryOp::Add;
        let mut negation: Option<Span> = None;

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::negation => negation = Some(Span::from_pest_span(inner.as_span())),
                Rule::add_op => {
                    op = if inner.as_str() == "-" {
                        BinaryOp::Subtract
                    } else {
                        BinaryOp::Add
                    };
                }
                Rule::term => {
                    let mut term = self.term(inner)?;
                    if let Some(neg_span) = negation.take() {
                        let span = join(&neg_span, &term.span);
                        term = Expr::new(ExprKind::Negate(Box::new(term)), span);
                    }
                    acc = Some(match acc {
                        None => term,
                        Some(left) => binary(left, op, term),
                    });
                }
                other => return Err(self.unexpected(other)),
            }
        }

        acc.ok_or_else(|| InversoError::Engine("Expression without terms".to_string()))
    }

    // term = { factor ~ (explicit_factor | implicit_factor)* }
    fn term(&self, pair: Pair<Rule>) -> Result<Expr, InversoError> {
        let mut acc: Option<Expr> = None;

        for inner in pair.into_inner() {
            let (op, factor) = match inner.as_rule() {
                Rule::factor => (BinaryOp::Multiply, self.factor(inner)?),
                Rule::implicit_factor => (BinaryOp::Multiply, self.first_factor(inner)?),
                Rule::explicit_factor => self.explicit_factor(inner)?,
                other => return Err(self.unexpected(other)),
            };
            acc = Some(match acc {
                None => factor,
                Some(left) => binary(left, op, factor),
            });
        }

        acc.ok_or_else(|| InversoError::Engine("Term without factors".to_string()))
    }

    // explicit_factor = { mul_op ~ negation? ~ factor }
    fn explicit_factor(&self, pair: Pair<Rule>) -> Result<(BinaryOp, Expr), InversoError> {
        let mut op = BinaryOp::Multiply;
        let mut negation: Option<Span> = None;

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::mul_op => {
                    op = if inner.as_str() == "/" {
                        BinaryOp::Divide
                    } else {
                        BinaryOp::Multiply
                    };
                }
                Rule::negation => negation = Some(Span::from_pest_span(inner.as_span())),
                Rule::factor => {
                    let factor = self.factor(inner)?;
                    let factor = match negation {
                        Some(neg_span) => {
                            let span = join(&neg_span, &factor.span);
                            Expr::new(ExprKind::Negate(Box::new(factor)), span)
                        }
                        None => factor,
                    };
                    return Ok((op, factor));
                }
                other => return Err(self.unexpected(other)),
            }
        }

        Err(InversoError::Engine("Operator without operand".to_string()))
    }

    fn first_factor(&self, pair: Pair<Rule>) -> Result<Expr, InversoError> {
        let inner = pair
            .into_inner()
            .next()
            .ok_or_else(|| InversoError::Engine("Empty factor".to_string()))?;
        self.factor(inner)
    }

    // factor = { primary ~ ("^" ~ exponent)? }
    fn factor(&self, pair: Pair<Rule>) -> Result<Expr, InversoError> {
        let span = Span::from_pest_span(pair.as_span());
        let mut inner = pair.into_inner();

        let primary = inner
            .next()
            .ok_or_else(|| InversoError::Engine("Factor without base".to_string()))?;
        let base = self.primary(primary)?;

        match inner.next() {
            None => Ok(base),
            Some(exponent) => {
                let exp_span = Span::from_pest_span(exponent.as_span());
                let value = exponent
                    .as_str()
                    .parse::<u32>()
                    .ok()
                    .filter(|&e| e <= MAX_EXPONENT)
                    .ok_or_else(|| {
                        InversoError::parse_with_suggestion(
                            format!("Exponent '{}' is too large", exponent.as_str()),
                            exp_span,
                            self.source_id,
                            self.source.clone(),
                            format!("Use an exponent of at most {}", MAX_EXPONENT),
                        )
                    })?;
                Ok(Expr::new(ExprKind::Power(Box::new(base), value), span))
            }
        }
    }

    // primary = { number | variable | "(" ~ expression ~ ")" }
    fn primary(&self, pair: Pair<Rule>) -> Result<Expr, InversoError> {
        // Spans of parenthesized groups include the parentheses
        let outer = Span::from_pest_span(pair.as_span());
        let inner = pair
            .into_inner()
            .next()
            .ok_or_else(|| InversoError::Engine("Empty primary".to_string()))?;
        let span = Span::from_pest_span(inner.as_span());

        match inner.as_rule() {
            Rule::number => {
                let value = Decimal::from_str(inner.as_str()).map_err(|_| {
                    InversoError::parse(
                        format!("Number '{}' is out of range", inner.as_str()),
                        span.clone(),
                        self.source_id,
                        self.source.clone(),
                    )
                })?;
                Ok(Expr::new(ExprKind::Number(value), span))
            }
            Rule::variable => Ok(Expr::new(ExprKind::Variable, span)),
            Rule::expression => Ok(Expr {
                span: outer,
                ..self.expression(inner)?
            }),
            other => Err(self.unexpected(other)),
        }
    }

    fn unexpected(&self, rule: Rule) -> InversoError {
        InversoError::Engine(format!("Unexpected grammar rule {:?}", rule))
    }
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let span = join(&left.span, &right.span);
    Expr::new(ExprKind::Binary(Box::new(left), op, Box::new(right)), span)
}

fn join(first: &Span, last: &Span) -> Span {
    Span {
        start: first.start,
        end: last.end,
        line: first.line,
        col: first.col,
    }
}
