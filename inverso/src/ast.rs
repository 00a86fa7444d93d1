//! AST types for formulas typed by students
//!
//! - `Span` tracks where a node came from in the input text
//! - `Expr` is the parsed expression tree in the single variable `x`

use rust_decimal::Decimal;
use std::fmt;

/// Span representing a location in the input text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub col: usize,
}

impl Span {
    pub fn from_pest_span(span: pest::Span) -> Self {
        let (line, col) = span.start_pos().line_col();
        Self {
            start: span.start(),
            end: span.end(),
            line,
            col,
        }
    }

    /// Zero-width span at a byte offset on the first line
    pub fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
            line: 1,
            col: offset + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        };
        write!(f, "{}", symbol)
    }
}

/// Expression in the variable `x`
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Number(Decimal),
    Variable,
    Negate(Box<Expr>),
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    /// Base raised to a non-negative integer exponent
    Power(Box<Expr>, u32),
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Nesting depth of the tree, counting the root as 1
    pub fn depth(&self) -> usize {
        match &self.kind {
            ExprKind::Number(_) | ExprKind::Variable => 1,
            ExprKind::Negate(inner) | ExprKind::Power(inner, _) => 1 + inner.depth(),
            ExprKind::Binary(l, _, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Upper bound on the larger of numerator and denominator degree after
    /// expansion. Saturates instead of overflowing.
    pub fn degree_bound(&self) -> u64 {
        match &self.kind {
            ExprKind::Number(_) => 0,
            ExprKind::Variable => 1,
            ExprKind::Negate(inner) => inner.degree_bound(),
            ExprKind::Power(base, exp) => base.degree_bound().saturating_mul(u64::from(*exp)),
            // a/b ± c/d = (ad ± bc)/(bd), so sums also add degrees
            ExprKind::Binary(l, _, r) => l.degree_bound().saturating_add(r.degree_bound()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => write!(f, "{}", n.normalize()),
            ExprKind::Variable => write!(f, "x"),
            ExprKind::Negate(inner) => write!(f, "-({})", inner),
            ExprKind::Binary(l, op, r) => write!(f, "({} {} {})", l, op, r),
            ExprKind::Power(base, exp) => write!(f, "({})^{}", base, exp),
        }
    }
}
