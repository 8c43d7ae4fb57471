use std::env;

use pdfgen_export::pdf::{DEFAULT_WEASYPRINT_BIN, WeasyPrint};

use crate::error::ApiError;

pub const BUCKET_ENV: &str = "S3_BUCKET_NAME";
pub const WEASYPRINT_BIN_ENV: &str = "WEASYPRINT_BIN";
pub const WEASYPRINT_ARGS_ENV: &str = "WEASYPRINT_ARGS";

/// Process-wide settings, read once at cold start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bucket holding templates and rendered documents. `None` is a
    /// deployment error reported on every invocation.
    pub bucket: Option<String>,
    pub weasyprint_bin: String,
    /// Extra WeasyPrint flags, whitespace separated in the environment
    /// (e.g. `--pdf-variant pdf/ua-1`).
    pub weasyprint_args: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            bucket: var(BUCKET_ENV),
            weasyprint_bin: var(WEASYPRINT_BIN_ENV)
                .unwrap_or_else(|| DEFAULT_WEASYPRINT_BIN.to_string()),
            weasyprint_args: var(WEASYPRINT_ARGS_ENV)
                .map(|args| args.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
        }
    }

    pub fn bucket(&self) -> Result<&str, ApiError> {
        self.bucket.as_deref().ok_or(ApiError::Configuration)
    }

    pub fn renderer(&self) -> WeasyPrint {
        WeasyPrint::new(&self.weasyprint_bin).with_args(&self.weasyprint_args)
    }
}
