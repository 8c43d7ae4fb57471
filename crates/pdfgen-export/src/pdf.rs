use std::ffi::OsString;
use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::ExportError;

pub const DEFAULT_WEASYPRINT_BIN: &str = "weasyprint";

/// Renders HTML text to PDF bytes.
///
/// `base_url` is the location relative references inside the HTML (images,
/// stylesheets) resolve against.
pub trait PdfRenderer: Send + Sync {
    fn render(
        &self,
        html: &str,
        base_url: &str,
    ) -> impl Future<Output = Result<Vec<u8>, ExportError>> + Send;
}

/// [`PdfRenderer`] that shells out to the WeasyPrint CLI.
///
/// Each render gets its own temporary directory holding the input HTML and
/// the output PDF. The directory is removed when the render finishes.
#[derive(Debug, Clone)]
pub struct WeasyPrint {
    program: PathBuf,
    extra_args: Vec<OsString>,
}

impl WeasyPrint {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            extra_args: Vec::new(),
        }
    }

    /// Arguments passed before the standard `--base-url <url> <in> <out>`.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }
}

impl Default for WeasyPrint {
    fn default() -> Self {
        Self::new(DEFAULT_WEASYPRINT_BIN)
    }
}

impl PdfRenderer for WeasyPrint {
    async fn render(&self, html: &str, base_url: &str) -> Result<Vec<u8>, ExportError> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("document.html");
        let output = dir.path().join("document.pdf");

        tokio::fs::write(&input, html).await?;

        let program = self.program.display().to_string();
        tracing::debug!(program = %program, base_url, "running PDF renderer");

        let result = Command::new(&self.program)
            .args(&self.extra_args)
            .arg("--base-url")
            .arg(base_url)
            .arg(&input)
            .arg(&output)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ExportError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ExportError::Pdf(format!(
                "{program} exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        let pdf = tokio::fs::read(&output).await?;
        if pdf.is_empty() {
            return Err(ExportError::EmptyOutput);
        }

        Ok(pdf)
    }
}
