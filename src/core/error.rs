use std::fmt;

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, TaxError>;

/// Main error type for the tax engine
#[derive(thiserror::Error, Debug)]
pub enum TaxError {
    /// Zone, rate or plugin configuration is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Lookup of a zone, rate or tax type failed
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input values outside their allowed range
    #[error("Validation error: {0}")]
    Validation(String),

    /// Price arithmetic across two different currencies
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// YAML settings could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading settings or orders from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification, used by callers that only care about the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    NotFound,
    Validation,
    CurrencyMismatch,
    Input,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation",
            ErrorKind::CurrencyMismatch => "currency_mismatch",
            ErrorKind::Input => "input",
        };
        write!(f, "{}", name)
    }
}

// Helper functions for common error scenarios
impl TaxError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        TaxError::Configuration(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        TaxError::NotFound(resource.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        TaxError::Validation(msg.into())
    }

    pub fn currency_mismatch(left: impl fmt::Display, right: impl fmt::Display) -> Self {
        TaxError::CurrencyMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TaxError::Configuration(_) => ErrorKind::Configuration,
            TaxError::NotFound(_) => ErrorKind::NotFound,
            TaxError::Validation(_) => ErrorKind::Validation,
            TaxError::CurrencyMismatch { .. } => ErrorKind::CurrencyMismatch,
            TaxError::Yaml(_) | TaxError::Json(_) | TaxError::Io(_) => ErrorKind::Input,
        }
    }
}
