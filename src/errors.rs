use crate::models::SelectorName;
use axum::http::StatusCode;
use std::fmt;

/// Failures while reading or writing selector controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    ElementNotFound { name: SelectorName },
    NoSelection { name: SelectorName },
    IndexOutOfRange { name: SelectorName, index: usize },
    InvalidDate { value: String },
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::ElementNotFound { name } => write!(f, "selector '{name}' not found"),
            SyncError::NoSelection { name } => write!(f, "selector '{name}' has no selected option"),
            SyncError::IndexOutOfRange { name, index } => {
                write!(f, "selector '{name}' has no option at index {index}")
            }
            SyncError::InvalidDate { value } => write!(f, "invalid date option '{value}'"),
        }
    }
}

impl std::error::Error for SyncError {}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<SyncError> for AppError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::InvalidDate { .. } | SyncError::IndexOutOfRange { .. } => {
                Self::bad_request(err.to_string())
            }
            SyncError::ElementNotFound { .. } | SyncError::NoSelection { .. } => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
