use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;

/// Build an S3 client from the default AWS config chain.
pub async fn build_client(region: &str) -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;
    Client::new(&config)
}
