use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "PDF generated and uploaded successfully.";

/// Proxy-integration response envelope returned to the Lambda runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded [`GeneratedDocument`] or [`ErrorBody`].
    pub body: String,
}

impl LambdaResponse {
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|e| {
            tracing::error!("failed to serialize response body: {e}");
            r#"{"error":"Internal Server Error: response serialization failed"}"#.to_string()
        });

        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status_code,
            headers,
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub message: String,
    pub storage_path: String,
    pub pdf_base64: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
