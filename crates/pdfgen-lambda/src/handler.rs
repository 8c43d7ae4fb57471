use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tracing::Instrument;

use pdfgen_core::models::request::DocumentRequest;
use pdfgen_core::s3_keys;
use pdfgen_export::pdf::PdfRenderer;
use pdfgen_export::render::{decode_template, render_template};
use pdfgen_storage::store::BlobStore;

use crate::error::ApiError;
use crate::event::extract_payload;
use crate::response::{GeneratedDocument, LambdaResponse, SUCCESS_MESSAGE};
use crate::state::AppState;

/// Handle one invocation and log its outcome.
///
/// Never fails: every error is converted to a 400 or 500 envelope.
pub async fn handle_invocation<S, R>(
    state: &AppState<S, R>,
    event: Value,
    request_id: &str,
) -> LambdaResponse
where
    S: BlobStore,
    R: PdfRenderer,
{
    let span = tracing::info_span!("invocation", request_id);

    async move {
        let response = match generate_document(state, event).await {
            Ok(generated) => LambdaResponse::json(200, &generated),
            Err(e) => e.into_response(),
        };

        tracing::info!(status = response.status_code, "pdf_request");
        response
    }
    .instrument(span)
    .await
}

/// Generate a PDF from a stored template, store it, and return it encoded.
///
/// Nothing is retried. A render failure stops before anything is written;
/// an upload failure is reported even though rendering succeeded.
pub async fn generate_document<S, R>(
    state: &AppState<S, R>,
    event: Value,
) -> Result<GeneratedDocument, ApiError>
where
    S: BlobStore,
    R: PdfRenderer,
{
    let bucket = state.config.bucket()?;
    tracing::info!(bucket, "starting PDF generation");

    let payload = extract_payload(event)?;
    let request = DocumentRequest::from_payload(payload)?;
    let substitutions = request.substitutions();
    let output_key = request.output_key();

    tracing::info!(
        event_name = %request.event_name,
        user = %request.user,
        template = %request.template_location,
        output_filename = %request.output_filename,
        background_color = %request.background_color,
        font_color = %request.font_color,
        breakfast = request.breakfast,
        output_key = %output_key,
        "validated request"
    );

    let template = decode_template(state.store.get(bucket, &request.template_location).await?)?;

    tracing::info!(
        keys = ?substitutions.keys().collect::<Vec<_>>(),
        "performing variable substitutions"
    );
    let html = render_template(&template, &substitutions);

    let pdf = state
        .renderer
        .render(&html, &s3_keys::base_url(bucket))
        .await?;
    let pdf_base64 = STANDARD.encode(&pdf);

    tracing::info!(size = pdf.len(), key = %output_key, "uploading generated PDF");
    let etag = state
        .store
        .put(bucket, &output_key, pdf, s3_keys::PDF_CONTENT_TYPE)
        .await?;
    tracing::info!(etag = %etag, "PDF uploaded");

    Ok(GeneratedDocument {
        message: SUCCESS_MESSAGE.to_string(),
        storage_path: s3_keys::storage_uri(bucket, &output_key),
        pdf_base64,
    })
}
