//! pdfgen-core
//!
//! Pure domain types and S3 key conventions for templated PDF generation.
//! No AWS SDK dependency — this is the shared vocabulary of the handler.

pub mod error;
pub mod models;
pub mod s3_keys;
