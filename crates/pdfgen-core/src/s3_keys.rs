//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define where rendered
//! documents land in the bucket and how the bucket is addressed.

/// Output key for a rendered document.
///
/// Spaces in the event name become underscores; nothing else is normalized.
pub fn output_key(event_name: &str, user: &str, output_filename: &str) -> String {
    format!("{}-{user}/{output_filename}", event_name.replace(' ', "_"))
}

/// Fully qualified location of an object, as reported back to callers.
pub fn storage_uri(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}

/// Base location handed to the renderer so relative references in a
/// template resolve against the bucket.
pub fn base_url(bucket: &str) -> String {
    format!("s3://{bucket}/")
}

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
