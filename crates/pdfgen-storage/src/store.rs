use std::future::Future;

use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::objects;

/// Key-addressed byte storage, as seen by the request handler.
///
/// Implementations carry no per-request state and are shared across
/// invocations.
pub trait BlobStore: Send + Sync {
    /// Fetch the full body of the object at `bucket`/`key`.
    fn get(
        &self,
        bucket: &str,
        key: &str,
    ) -> impl Future<Output = Result<Vec<u8>, StorageError>> + Send;

    /// Write `body` to `bucket`/`key`, replacing any existing object.
    /// Returns the new ETag.
    fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = Result<String, StorageError>> + Send;
}

/// [`BlobStore`] backed by S3.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl BlobStore for S3Store {
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        objects::get_object(&self.client, bucket, key).await
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        objects::put_object(&self.client, bucket, key, body, content_type).await
    }
}
