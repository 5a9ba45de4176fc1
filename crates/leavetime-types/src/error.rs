use std::fmt;

/// Result type for status fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Everything that can go wrong between "render triggered" and "payload in hand".
///
/// All variants collapse into the same `ConnectionError` display state at the
/// presentation boundary; the variant only matters for diagnostics.
#[derive(Debug)]
pub enum FetchError {
    /// Timeout, connection refused, DNS failure, or a non-2xx status
    Unreachable(String),

    /// Body was not JSON, or the `active` field is missing or not a boolean
    InvalidPayload(String),

    /// Payload claims an active commute but carries no renderable sub-shape
    ContractViolation(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Unreachable(msg) => write!(f, "status server unreachable: {}", msg),
            FetchError::InvalidPayload(msg) => write!(f, "invalid status payload: {}", msg),
            FetchError::ContractViolation(msg) => {
                write!(f, "status payload contract violation: {}", msg)
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::InvalidPayload(err.to_string())
    }
}
