use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bloglist_core::Error;
use bloglist_types::api::ErrorResponse;
use tracing::{error, info, warn};

/// Error type for every handler. Core rejections keep their message so
/// clients can tell which field was wrong.
#[derive(Debug)]
pub enum AppError {
    Core(Error),
    /// Body that could not be read as the expected JSON shape.
    MalformedBody(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorResponse) {
        let err = match self {
            AppError::Core(err) => err,
            AppError::MalformedBody(detail) => {
                warn!("Request rejected: {}", detail);
                return (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: detail,
                        code: "MALFORMED_BODY".into(),
                    },
                );
            }
            AppError::Internal(detail) => return internal(&detail),
        };

        let (status, code) = match &err {
            Error::MissingRequiredField { .. } => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
            Error::InvalidField { .. } => (StatusCode::BAD_REQUEST, "INVALID_FIELD"),
            Error::WeakCredential { .. } => (StatusCode::BAD_REQUEST, "WEAK_CREDENTIAL"),
            Error::DuplicateKey { .. } => (StatusCode::BAD_REQUEST, "DUPLICATE_KEY"),
            Error::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Error::EmptyInput => (StatusCode::BAD_REQUEST, "EMPTY_INPUT"),
            Error::Hashing(_) | Error::Storage(_) => return internal(&err.to_string()),
        };

        if err.is_validation() {
            warn!("Request rejected: {}", err);
        } else {
            info!("Request failed: {}", err);
        }
        (
            status,
            ErrorResponse {
                error: err.to_string(),
                code: code.to_string(),
            },
        )
    }
}

fn internal(detail: &str) -> (StatusCode, ErrorResponse) {
    error!("Internal error: {}", detail);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse {
            error: "An unexpected error occurred".into(),
            code: "INTERNAL_ERROR".into(),
        },
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::Core(err)
    }
}
