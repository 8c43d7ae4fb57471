//! In-memory stand-ins for S3 and WeasyPrint.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use pdfgen_export::error::ExportError;
use pdfgen_export::pdf::PdfRenderer;
use pdfgen_lambda::config::Config;
use pdfgen_lambda::response::LambdaResponse;
use pdfgen_lambda::state::AppState;
use pdfgen_storage::error::StorageError;
use pdfgen_storage::store::BlobStore;
use serde::de::DeserializeOwned;

pub const BUCKET: &str = "docs";

#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<(String, String), StoredObject>>,
    puts: Mutex<usize>,
    fail_puts: bool,
}

impl MemoryStore {
    pub fn with_object(self, key: &str, body: impl Into<Vec<u8>>) -> Self {
        self.objects.lock().unwrap().insert(
            (BUCKET.to_string(), key.to_string()),
            StoredObject {
                body: body.into(),
                content_type: "text/html".to_string(),
            },
        );
        self
    }

    pub fn failing_puts(mut self) -> Self {
        self.fail_puts = true;
        self
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .unwrap()
            .get(&(BUCKET.to_string(), key.to_string()))
            .cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn put_count(&self) -> usize {
        *self.puts.lock().unwrap()
    }
}

impl BlobStore for MemoryStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .map(|obj| obj.body.clone())
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        if self.fail_puts {
            return Err(StorageError::PutObject("AccessDenied".to_string()));
        }

        let n = {
            let mut puts = self.puts.lock().unwrap();
            *puts += 1;
            *puts
        };
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(format!("\"etag-{n}\""))
    }
}

/// Renders by prefixing the HTML with a PDF header, so the substituted text
/// is visible in the output bytes.
#[derive(Default)]
pub struct FakeRenderer {
    fail: bool,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeRenderer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl PdfRenderer for FakeRenderer {
    async fn render(&self, html: &str, base_url: &str) -> Result<Vec<u8>, ExportError> {
        self.calls
            .lock()
            .unwrap()
            .push((html.to_string(), base_url.to_string()));

        if self.fail {
            return Err(ExportError::Pdf("renderer crashed".to_string()));
        }
        Ok(format!("%PDF-1.7\n{html}").into_bytes())
    }
}

pub fn config_with_bucket(bucket: Option<&str>) -> Config {
    Config::from_lookup(|name| match name {
        "S3_BUCKET_NAME" => bucket.map(str::to_string),
        _ => None,
    })
}

pub fn state(store: MemoryStore, renderer: FakeRenderer) -> AppState<MemoryStore, FakeRenderer> {
    AppState {
        store,
        renderer,
        config: config_with_bucket(Some(BUCKET)),
    }
}

pub fn body<T: DeserializeOwned>(response: &LambdaResponse) -> T {
    serde_json::from_str(&response.body).unwrap()
}
