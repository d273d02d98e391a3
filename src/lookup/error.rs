use thiserror::Error;

/// Generic text shown for every lookup failure.
pub const GENERIC_ERROR_MESSAGE: &str = "an error occurred";

/// Errors that can occur while fetching a country record.
///
/// The UI never distinguishes between them; see [`LookupError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Connect failure, timeout or broken body stream.
    #[error("Request to '{url}' failed: {message}")]
    Network { url: String, message: String },

    /// Endpoint answered with a non-2xx status.
    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// Body was not valid JSON.
    #[error("Failed to parse response from '{url}': {message}")]
    Parse { url: String, message: String },

    /// The request never left the UI (fetch worker gone or queue full).
    #[error("Lookup could not be dispatched: {message}")]
    Unavailable { message: String },
}

impl LookupError {
    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }

    /// Technical details for the log.
    pub fn details(&self) -> String {
        self.to_string()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::Network { .. } => "network",
            LookupError::Status { .. } => "status",
            LookupError::Parse { .. } => "parse",
            LookupError::Unavailable { .. } => "unavailable",
        }
    }
}
