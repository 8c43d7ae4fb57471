//! Template reads and document writes against S3.

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

/// Read the whole body of `bucket`/`key`.
///
/// A missing key is reported as [`StorageError::NotFound`] so callers can
/// name the template in their error.
pub async fn get_object(client: &Client, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| match e.into_service_error() {
            err if err.is_no_such_key() => StorageError::NotFound {
                key: key.to_string(),
            },
            err => StorageError::GetObject(err.to_string()),
        })?;

    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes()
        .to_vec();

    tracing::debug!(bucket, key, size = body.len(), "read object");
    Ok(body)
}

/// Write `body` to `bucket`/`key`, replacing whatever was there.
/// Returns the new ETag, empty if S3 did not report one.
pub async fn put_object(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    content_type: &str,
) -> Result<String, StorageError> {
    let size = body.len();
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .body(ByteStream::from(body))
        .send()
        .await
        .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

    let etag = resp.e_tag().unwrap_or_default().to_string();
    tracing::debug!(bucket, key, size, content_type, etag = %etag, "wrote object");
    Ok(etag)
}
