#![recursion_limit = "256"]

use lambda_http::lambda_runtime::{self, LambdaEvent, service_fn};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use pdfgen_lambda::config::{BUCKET_ENV, Config};
use pdfgen_lambda::handler::handle_invocation;
use pdfgen_lambda::state::AppState;
use pdfgen_storage::store::S3Store;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env();
    if config.bucket.is_none() {
        tracing::error!("{BUCKET_ENV} is not set; every invocation will fail");
    }

    let s3 = pdfgen_storage::client::build_client().await;

    let state = AppState {
        store: S3Store::new(s3),
        renderer: config.renderer(),
        config,
    };
    let state = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let LambdaEvent { payload, context } = event;
        Ok::<_, lambda_runtime::Error>(
            handle_invocation(state, payload, &context.request_id).await,
        )
    }))
    .await
    .map_err(|e| eyre::eyre!(e))
}
