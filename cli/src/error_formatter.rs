use ariadne::{Color, Label, Report, ReportKind, Source};
use inverso::InversoError;

/// Format an InversoError with fancy terminal output using Ariadne
pub fn format_error(error: &InversoError) -> String {
    match error {
        InversoError::Parse(details) => {
            let mut output = Vec::new();

            // Clamp so that errors reported past the end still point at the input
            let len = details.source_text.len();
            let start = details.span.start.min(len);
            let end = details.span.end.clamp(start, len);

            let mut report = Report::build(ReportKind::Error, &details.source_id, start)
                .with_message(format!(
                    "Parse error: {} (in {} at column {})",
                    details.message, details.source_id, details.span.col
                ))
                .with_label(
                    Label::new((&details.source_id, start..end))
                        .with_message("here")
                        .with_color(Color::Red),
                );

            if let Some(suggestion) = &details.suggestion {
                report = report.with_help(suggestion);
            }

            match report.finish().write(
                (
                    &details.source_id,
                    Source::from(details.source_text.as_ref()),
                ),
                &mut output,
            ) {
                Ok(_) => String::from_utf8_lossy(&output).to_string(),
                Err(_) => {
                    // Fallback to simple format
                    format!("{}", error)
                }
            }
        }
        InversoError::InvalidProblem(msg) => format!("Invalid problem: {}", msg),
        InversoError::Config(msg) => format!("Configuration error: {}", msg),
        InversoError::Engine(msg) => format!("Engine error: {}", msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inverso::{parse_coefficients, parse_formula, QuizConfig};

    #[test]
    fn test_parse_error_report() {
        let err = parse_formula("(x+1/(3x-2)", &QuizConfig::default()).unwrap_err();
        let output = format_error(&err);
        assert!(output.contains("Parse error"));
        assert!(output.contains("<formula>"));
    }

    #[test]
    fn test_parse_error_with_help() {
        let err = parse_coefficients("2,1,3").unwrap_err();
        let output = format_error(&err);
        assert!(output.contains("<coefficients>"));
        assert!(output.contains("four integers"));
    }

    #[test]
    fn test_plain_errors() {
        let err = InversoError::InvalidProblem("c = 0".to_string());
        assert_eq!(format_error(&err), "Invalid problem: c = 0");
    }
}
