use thiserror::Error;

/// Error type that captures tracker failures.
///
/// Domain-level misuse (an unknown currency code) is deliberately not an
/// error: the formatters answer it with an explanatory message string.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid date: {0}")]
    DateParse(#[from] chrono::ParseError),
}
