use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

/// Build an S3 client from the default AWS config chain.
///
/// Region and credentials come from the Lambda environment. Build once at
/// process start and clone the handle where needed; clones share the
/// connection pool.
pub async fn build_client() -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    tracing::debug!(region = ?config.region(), "built S3 client");
    Client::new(&config)
}
