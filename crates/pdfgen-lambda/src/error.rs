use pdfgen_core::error::CoreError;
use pdfgen_export::error::ExportError;
use pdfgen_storage::error::StorageError;

use crate::config::BUCKET_ENV;
use crate::event::EventError;
use crate::response::{ErrorBody, LambdaResponse};

/// Every way an invocation can fail, mapped to a status code at the
/// handler boundary.
#[derive(Debug)]
pub enum ApiError {
    /// The target bucket is not configured.
    Configuration,
    MissingField(String),
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingField(_) => 400,
            ApiError::Configuration | ApiError::Internal(_) => 500,
        }
    }

    /// The caller-facing message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Configuration => {
                format!("Storage bucket is not configured: set {BUCKET_ENV}")
            }
            ApiError::MissingField(field) => {
                format!("Missing required field in payload: '{field}'")
            }
            ApiError::Internal(msg) => format!("Internal Server Error: {msg}"),
        }
    }

    pub fn into_response(self) -> LambdaResponse {
        let status = self.status_code();
        let message = self.message();

        match &self {
            ApiError::Configuration => tracing::error!("{message}"),
            ApiError::Internal(msg) => tracing::error!("internal error: {msg}"),
            ApiError::MissingField(_) => tracing::warn!(status, "{message}"),
        }

        LambdaResponse::json(status, &ErrorBody { error: message })
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::MissingField(field) => ApiError::MissingField(field),
            other @ (CoreError::InvalidPayload(_) | CoreError::InvalidSubstitution { .. }) => {
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<EventError> for ApiError {
    fn from(e: EventError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
