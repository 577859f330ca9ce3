//! Unified error handling for the relay-web-apis application.
//!
//! This module provides a centralized error type (`AppError`) that handles
//! all errors throughout the application and maps them to appropriate HTTP responses.

use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;

use crate::services::registration::CustomerRegistrationError;
use crate::services::stripe_client::PaymentError;

/// Unified application error type.
///
/// All errors in the application are converted to this type, which implements
/// `actix_web::ResponseError` for automatic HTTP response generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Payment processor errors
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    /// Customer registration failures at the reseller
    #[error("Customer registration error: {0}")]
    CustomerRegistration(#[from] CustomerRegistrationError),

    /// Upstream call failures; the message is safe to return to clients
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Payment(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CustomerRegistration(CustomerRegistrationError::Rejected(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::CustomerRegistration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = match self {
            // For internal errors, don't expose internal details
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::CustomerRegistration(CustomerRegistrationError::Rejected(_)) => {
                self.inner_message()
            }
            AppError::CustomerRegistration(_) => "Failed to register customer".to_string(),
            // For these errors, expose the message
            AppError::Payment(_) => self.inner_message(),
            AppError::Upstream(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
        };

        let body = serde_json::json!({
            "error": error_message
        });

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl AppError {
    fn inner_message(&self) -> String {
        match self {
            AppError::Payment(e) => e.to_string(),
            AppError::CustomerRegistration(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

/// Turns malformed JSON bodies into `{"error": ...}` 400 responses.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Rejected request body: {}", err);
    AppError::BadRequest(format!("Invalid request body: {}", err)).into()
}

/// Turns unparseable query strings into `{"error": ...}` 400 responses.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!("Rejected query string: {}", err);
    AppError::BadRequest(format!("Invalid query string: {}", err)).into()
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
