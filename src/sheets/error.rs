use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Unauthorized - access token may be expired")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Sheets API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl StoreError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            // Error bodies can carry multi-byte text; cut on a char boundary
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..end],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => StoreError::Unauthorized,
            403 => StoreError::PermissionDenied(truncated),
            404 => StoreError::NotFound(truncated),
            _ => StoreError::Api(format!("Status {}: {}", status, truncated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_is_length_limited() {
        let body = "x".repeat(2 * MAX_ERROR_BODY_LENGTH);
        let truncated = StoreError::truncate_body(&body);
        assert!(truncated.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(truncated.ends_with("(truncated, 1000 total bytes)"));

        // Short bodies pass through untouched
        assert_eq!(StoreError::truncate_body("boom"), "boom");
    }

    #[test]
    fn test_truncate_body_respects_char_boundaries() {
        // 200 three-byte checkmarks put byte 500 mid-character; the cut
        // must back up to a boundary instead of panicking
        let body = "\u{2713}".repeat(200);
        let truncated = StoreError::truncate_body(&body);
        assert!(truncated.contains("truncated, 600 total bytes"));

        let err = StoreError::from_status(reqwest::StatusCode::FORBIDDEN, &body);
        match err {
            StoreError::PermissionDenied(msg) => {
                assert!(msg.starts_with('\u{2713}'));
            }
            other => panic!("expected PermissionDenied, got {other:?}"),
        }
    }
}
