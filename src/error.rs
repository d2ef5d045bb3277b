//! API Errors
//!
//! Error type shared by the back-end bindings and the CRUD controller.

/// Common result type for back-end calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while talking to the market API
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS...)
    Network(String),
    /// Server answered with a non-2xx status and no usable body
    Status(u16),
    /// Body was not the JSON shape we expected
    Decode(String),
    /// Server answered `{success: false, message}`
    Rejected(String),
    /// Form input could not be turned into a payload
    InvalidInput(String),
}

impl ApiError {
    /// Text shown inline in a table body when a load fails
    pub fn table_message(&self) -> String {
        match self {
            ApiError::Status(code) => format!("Server error: {}", code),
            _ => "Error loading data".to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "Server returned status {}", code),
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::Rejected(msg) => write!(f, "{}", msg),
            ApiError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_message() {
        assert_eq!(ApiError::Status(503).table_message(), "Server error: 503");
        assert_eq!(ApiError::Network("offline".into()).table_message(), "Error loading data");
        assert_eq!(ApiError::Decode("eof".into()).table_message(), "Error loading data");
    }

    #[test]
    fn test_rejected_displays_server_message() {
        assert_eq!(ApiError::Rejected("Missing itemID".into()).to_string(), "Missing itemID");
    }
}
