//! pdfgen-lambda
//!
//! Lambda entry point for templated PDF generation: decode the invocation
//! event, fetch the template from S3, substitute, render, store, respond.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod response;
pub mod state;
