use thiserror::Error;

use crate::validation::FieldErrors;

/// Errors surfaced by calls against the remote API.
///
/// Local validation never reaches this type; it is reported as a
/// field-keyed map before any request is issued.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl ApiError {
    /// Message suitable for showing to the user verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Failed to reach the server. Please check your connection and try again."
                    .to_string()
            }
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Conflict(message) => message.clone(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }
}

/// Errors raised by the booking workflow on top of the API layer.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Booking already confirmed; start a new booking")]
    Completed,
}

pub type ApiResult<T> = Result<T, ApiError>;
