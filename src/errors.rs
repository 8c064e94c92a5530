use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("No activities to analyze")]
    NoActivities,
    #[error("Invalid training plan format")]
    InvalidPlanFormat,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unable to parse date: {0}")]
    DateParse(String),
    #[error("Invalid intent pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoachError {
    /// Parse failures are reported separately from malformed input
    pub fn is_parse_error(&self) -> bool {
        matches!(self, CoachError::DateParse(_))
    }

    /// Error document written on the output channel of every entry point
    pub fn to_document(&self) -> Value {
        match self {
            CoachError::InvalidPlanFormat => json!({
                "error": self.to_string(),
                "found": false,
            }),
            _ => json!({ "error": self.to_string() }),
        }
    }
}

impl IntoResponse for CoachError {
    fn into_response(self) -> Response {
        tracing::warn!("Request failed: {}", self);

        let (status, error_message) = match self {
            CoachError::NoActivities => (StatusCode::BAD_REQUEST, "No activities to analyze"),
            CoachError::InvalidPlanFormat => (StatusCode::BAD_REQUEST, "Invalid training plan format"),
            CoachError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "Invalid input"),
            CoachError::DateParse(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Unable to parse date"),
            CoachError::Pattern(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Invalid intent pattern"),
            CoachError::Json(_) => (StatusCode::BAD_REQUEST, "Invalid JSON input"),
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_format_document_carries_found_flag() {
        let doc = CoachError::InvalidPlanFormat.to_document();
        assert_eq!(doc["error"], "Invalid training plan format");
        assert_eq!(doc["found"], false);
    }

    #[test]
    fn test_date_parse_is_distinguishable() {
        let err = CoachError::DateParse("next week".to_string());
        assert!(err.is_parse_error());
        assert_eq!(err.to_document()["error"], "Unable to parse date: next week");
        assert!(!CoachError::NoActivities.is_parse_error());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CoachError::NoActivities.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CoachError::DateParse("x".to_string()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
