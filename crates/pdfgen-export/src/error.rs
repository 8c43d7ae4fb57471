use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template is not valid UTF-8: {0}")]
    TemplateEncoding(#[from] std::string::FromUtf8Error),

    #[error("failed to start PDF renderer '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("PDF renderer produced no output")]
    EmptyOutput,

    #[error("renderer I/O error: {0}")]
    Io(#[from] std::io::Error),
}
