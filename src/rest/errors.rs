use derive_more::{Display, Error};
use log::error;
use ntex::{http, web};
use serde_json::json;

/// Error taxonomy for the whole JSON surface. Validation is checked at the
/// boundary before any write; persistence failures are logged with their
/// cause and surfaced with a redacted message.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    #[display("{_0}")]
    Validation(#[error(not(source))] String),
    #[display("{_0} not found")]
    NotFound(#[error(not(source))] String),
    #[display("{_0}")]
    Conflict(#[error(not(source))] String),
    #[display("Invalid credentials. Please try again")]
    Auth,
    #[display("Invalid token")]
    InvalidToken,
    #[display("Reset token has expired")]
    ExpiredToken,
    #[display("An unexpected error occurred")]
    Persistence(#[error(not(source))] String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn missing_field(field: &str) -> Self {
        ApiError::Validation(format!("Missing required field: {field}"))
    }

    pub fn not_found(entity: &str) -> Self {
        ApiError::NotFound(entity.to_string())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Persistence(format!("{err:#}"))
    }
}

impl web::error::WebResponseError for ApiError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        if let ApiError::Persistence(cause) = self {
            // The cause stays server-side; clients get the generic display.
            error!("persistence failure: {cause}");
        }

        web::HttpResponse::build(self.status_code()).json(&json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            ApiError::Validation(_) | ApiError::InvalidToken | ApiError::ExpiredToken => {
                http::StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => http::StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => http::StatusCode::CONFLICT,
            ApiError::Auth => http::StatusCode::UNAUTHORIZED,
            ApiError::Persistence(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
