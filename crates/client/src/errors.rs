use std::fmt;

/// Errors surfaced to route code and, after formatting, to the visitor.
/// Variants map to the failure taxonomy of the apps: configuration gaps,
/// transport failures, timeouts, HTTP status errors and codec problems.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// True when the request was aborted by the client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Timeout(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Configuration error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timed out: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Bad response: {message}"),
            AppError::Serialization(message) => write!(formatter, "Bad request: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn display_includes_http_status() {
        let err = AppError::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (503): unavailable");
    }

    #[test]
    fn is_timeout_only_for_timeout_variant() {
        assert!(AppError::Timeout("slow".to_string()).is_timeout());
        assert!(!AppError::Network("down".to_string()).is_timeout());
    }
}
