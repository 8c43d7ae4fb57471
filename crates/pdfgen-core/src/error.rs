use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("invalid substitution value for '{key}': {kind} is not supported")]
    InvalidSubstitution { key: String, kind: &'static str },
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::InvalidPayload(e.to_string())
    }
}
