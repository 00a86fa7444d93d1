use crate::ast::Span;
use std::fmt;
use std::sync::Arc;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_id: String,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

/// Error types for inverso
#[derive(Debug, Clone)]
pub enum InversoError {
    /// Parse error with source location
    Parse(Box<ErrorDetails>),

    /// Coefficients that do not describe an invertible rational function
    InvalidProblem(String),

    /// Configuration values that cannot be used
    Config(String),

    /// Engine error without specific source location
    Engine(String),
}

impl InversoError {
    /// Create a parse error with source information
    pub fn parse(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create a parse error with suggestion
    pub fn parse_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Parse(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }

    /// The bare message, without location or category prefix
    pub fn message(&self) -> &str {
        match self {
            InversoError::Parse(details) => &details.message,
            InversoError::InvalidProblem(msg)
            | InversoError::Config(msg)
            | InversoError::Engine(msg) => msg,
        }
    }
}

impl fmt::Display for InversoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InversoError::Parse(details) => {
                write!(f, "Parse error: {}", details.message)?;
                if let Some(suggestion) = &details.suggestion {
                    write!(f, " (suggestion: {})", suggestion)?;
                }
                write!(
                    f,
                    " at {}:{}:{}",
                    details.source_id, details.span.line, details.span.col
                )
            }
            InversoError::InvalidProblem(msg) => write!(f, "Invalid problem: {}", msg),
            InversoError::Config(msg) => write!(f, "Configuration error: {}", msg),
            InversoError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for InversoError {}

impl From<std::fmt::Error> for InversoError {
    fn from(err: std::fmt::Error) -> Self {
        InversoError::Engine(format!("Format error: {}", err))
    }
}
