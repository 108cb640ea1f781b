//! REST endpoints
//!
//! - `GET /api/algorithms` - Algorithm catalogue
//! - `POST /api/similarity` - Word pair under every algorithm
//! - `GET /api/synsets/:word` - Candidate synsets of a word
//! - `POST /api/sentence-similarity` - Sentence alignment

pub mod algorithms;
pub mod sentence;
pub mod similarity;
pub mod synsets;

use axum::{http::StatusCode, Json};
use serde::Serialize;
use tracing::error;

use crate::error::SimilarityError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

/// Error half of every handler result
pub type ApiFailure = (StatusCode, Json<ApiError>);

impl From<SimilarityError> for ApiError {
    fn from(err: SimilarityError) -> Self {
        match err {
            SimilarityError::WordNotFound(_) => ApiError::not_found(err.to_string()),
            SimilarityError::InvalidAnnotation(_)
            | SimilarityError::InvalidSenseIndex { .. }
            | SimilarityError::UnknownAlgorithm(_) => ApiError::bad_request(err.to_string()),
            other => ApiError::internal(other.to_string()),
        }
    }
}

/// Map an engine error to its status code and body
pub fn failure(err: SimilarityError) -> ApiFailure {
    let body = ApiError::from(err);
    let status = match body.code.as_str() {
        "NOT_FOUND" => StatusCode::NOT_FOUND,
        "BAD_REQUEST" => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!(error = %body.error, "request failed");
    }
    (status, Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(failure(SimilarityError::WordNotFound("x".into())).0, StatusCode::NOT_FOUND);
        assert_eq!(
            failure(SimilarityError::UnknownAlgorithm("x".into())).0,
            StatusCode::BAD_REQUEST
        );
        let (status, Json(body)) = failure(SimilarityError::InvalidSenseIndex {
            word: "câine".into(),
            sense: 4,
            available: 2,
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "BAD_REQUEST");
        assert_eq!(
            failure(SimilarityError::UnknownSynset("x".into())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
