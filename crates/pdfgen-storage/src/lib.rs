//! pdfgen-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK, plus the [`BlobStore`]
//! seam the request handler is generic over.
//!
//! [`BlobStore`]: store::BlobStore

pub mod client;
pub mod error;
pub mod objects;
pub mod store;
