use aws_sdk_s3::primitives::ByteStream;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use qa_export_lambda::adapters::object_store::ExtractStore;
use qa_export_lambda::adapters::stack_exchange::StackExchangeClient;
use qa_export_lambda::handlers::extract::{handle_extract, ExtractSummary};
use qa_export_lambda::runtime::config::ExtractorConfig;
use serde_json::Value;

struct S3ExtractStore {
    bucket: String,
    s3_client: aws_sdk_s3::Client,
}

impl ExtractStore for S3ExtractStore {
    fn write_object(&self, key: &str, body: &[u8]) -> Result<(), String> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to write object to s3: {error}"))
            })
        })
    }
}

async fn handle_request(_event: LambdaEvent<Value>) -> Result<ExtractSummary, Error> {
    let config = ExtractorConfig::from_vars(std::env::vars())
        .map_err(|error| Error::from(error.to_string()))?;

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .load()
        .await;
    let store = S3ExtractStore {
        bucket: config.bucket.clone(),
        s3_client: aws_sdk_s3::Client::new(&aws_config),
    };
    let source = StackExchangeClient::new(&config.site, &config.api_key, &config.access_token);

    handle_extract(&config.key_prefix, &source, &store)
        .map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
