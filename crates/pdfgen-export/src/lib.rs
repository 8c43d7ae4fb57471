//! pdfgen-export
//!
//! Placeholder substitution and HTML → PDF rendering.

pub mod error;
pub mod pdf;
pub mod render;
