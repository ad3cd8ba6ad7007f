use serde_json::{json, Value};
use thiserror::Error;

use crate::sheets::StoreError;

/// Everything the API can fail with.
///
/// The first five variants are validation errors, raised before any
/// remote call; the rest classify remote-side failures. Handlers return
/// these as structured payloads instead of crashing the request.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid event type {0:?} (expected \"bootcamp\" or \"hackathon\")")]
    InvalidEventType(String),

    #[error("Invalid day {day:?} (expected {allowed})")]
    InvalidDay { day: String, allowed: &'static str },

    #[error("Category is required for bootcamp attendance")]
    MissingCategory,

    #[error("Unknown category {0:?}")]
    InvalidCategory(String),

    #[error("Attendance already recorded for {regno} on day {day}")]
    DuplicateRejected { regno: String, day: String },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Failed to create worksheet: {0}")]
    WorksheetCreateFailed(String),

    #[error("Spreadsheet API error: {0}")]
    RemoteApi(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// HTTP status the surrounding framework should respond with.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MissingField(_)
            | ApiError::InvalidEventType(_)
            | ApiError::InvalidDay { .. }
            | ApiError::MissingCategory
            | ApiError::InvalidCategory(_) => 400,
            ApiError::PermissionDenied(_) => 403,
            ApiError::DuplicateRejected { .. } => 409,
            // Read-path failures (missing columns, missing worksheets)
            // surface as server errors, like any other remote-side fault
            ApiError::NotFound(_)
            | ApiError::WorksheetCreateFailed(_)
            | ApiError::RemoteApi(_) => 500,
        }
    }

    /// Stable machine-readable error tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingField(_) => "missing_field",
            ApiError::InvalidEventType(_) => "invalid_event_type",
            ApiError::InvalidDay { .. } => "invalid_day",
            ApiError::MissingCategory => "missing_category",
            ApiError::InvalidCategory(_) => "invalid_category",
            ApiError::DuplicateRejected { .. } => "duplicate_rejected",
            ApiError::PermissionDenied(_) => "permission_denied",
            ApiError::WorksheetCreateFailed(_) => "worksheet_create_failed",
            ApiError::RemoteApi(_) => "remote_api_error",
            ApiError::NotFound(_) => "not_found",
        }
    }

    /// Response body for the error case.
    pub fn payload(&self) -> Value {
        json!({
            "error": self.kind(),
            "message": self.to_string(),
        })
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::PermissionDenied(msg) => ApiError::PermissionDenied(msg),
            StoreError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::RemoteApi(other.to_string()),
        }
    }
}
