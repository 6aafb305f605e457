//! Error types for webcut to bazis conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Structural problem found while tokenizing a single webcut line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("line must start with {expected} tab characters")]
    MissingLeadingTabs { expected: usize },

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field '{field}' has no '{separator}' separator")]
    MissingSeparator { field: &'static str, separator: char },

    #[error("field '{field}' is empty")]
    EmptyField { field: &'static str },

    #[error("field '{field}' is not an integer: '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    #[error("field '{field}' is not a non-negative decimal: '{value}'")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("orientation must be 'N' or 'A', got '{value}'")]
    InvalidOrientation { value: String },
}

impl FieldError {
    /// Whether this is a numeric sub-field that failed to parse.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldError::NotAnInteger { .. } | FieldError::InvalidDecimal { .. }
        )
    }
}

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bad webcut format{}: {reason}: {line:?}", line_label(.line_number))]
    Format {
        line_number: Option<usize>,
        line: String,
        #[source]
        reason: FieldError,
    },

    #[error("Groups '{first}' and '{second}' would both be written to {path}")]
    OutputCollision {
        path: PathBuf,
        first: String,
        second: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

fn line_label(line_number: &Option<usize>) -> String {
    match line_number {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

impl ConvertError {
    /// Wrap a field error with the raw line it came from.
    pub fn format(line: &str, reason: FieldError) -> Self {
        ConvertError::Format {
            line_number: None,
            line: line.to_string(),
            reason,
        }
    }

    /// Attach a 1-based line number to a format error.
    pub fn at_line(self, number: usize) -> Self {
        match self {
            ConvertError::Format { line, reason, .. } => ConvertError::Format {
                line_number: Some(number),
                line,
                reason,
            },
            other => other,
        }
    }

    /// Wrap an IO error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the source text failed the webcut grammar.
    pub fn is_format(&self) -> bool {
        matches!(self, ConvertError::Format { .. })
    }

    /// Whether a numeric field failed to parse.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ConvertError::Format { reason, .. } if reason.is_numeric())
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
