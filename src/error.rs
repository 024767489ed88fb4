use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure kinds a request can end with. Responses carry the status code
/// only; no detail beyond the code leaves the process.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed request body")]
    Decode,

    #[error("no user with the requested id")]
    NotFound,

    #[error("password mismatch")]
    AuthMismatch,

    #[error("user id already registered")]
    DuplicateId,

    #[error("persistence operation failed: {0}")]
    Persistence(anyhow::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Decode => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::AuthMismatch => StatusCode::FORBIDDEN,
            ApiError::DuplicateId => StatusCode::BAD_REQUEST,
            ApiError::Persistence(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_contract() {
        assert_eq!(ApiError::Decode.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::AuthMismatch.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::DuplicateId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Persistence(anyhow::anyhow!("insert failed")).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("pool down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
