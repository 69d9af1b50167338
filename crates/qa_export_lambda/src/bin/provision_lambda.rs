use lambda_runtime::{service_fn, Error, LambdaEvent};
use qa_export_lambda::adapters::statement_executor::StatementExecutor;
use qa_export_lambda::handlers::provision::{handle_provision_event, ProvisionSummary};
use qa_export_lambda::runtime::config::ProvisionerConfig;
use serde::Deserialize;
use serde_json::Value;

struct RdsDataStatementExecutor {
    resource_arn: String,
    secret_arn: String,
    database: String,
    rds_client: aws_sdk_rdsdata::Client,
}

impl StatementExecutor for RdsDataStatementExecutor {
    fn execute_statement(&self, sql: &str) -> Result<(), String> {
        let resource_arn = self.resource_arn.clone();
        let secret_arn = self.secret_arn.clone();
        let database = self.database.clone();
        let statement = sql.to_string();
        let client = self.rds_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .execute_statement()
                    .resource_arn(resource_arn)
                    .secret_arn(secret_arn)
                    .database(database)
                    .sql(statement)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to execute statement: {error}"))
            })
        })
    }
}

#[derive(Debug, Deserialize)]
struct CustomResourceEvent {
    #[serde(rename = "RequestType", default)]
    request_type: String,
}

fn decode_request_type(event: &Value) -> Result<String, Error> {
    let event: CustomResourceEvent = serde_json::from_value(event.clone())
        .map_err(|error| Error::from(format!("invalid custom resource event: {error}")))?;
    Ok(event.request_type)
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<ProvisionSummary, Error> {
    let request_type = decode_request_type(&event.payload)?;
    let config = ProvisionerConfig::from_vars(std::env::vars())
        .map_err(|error| Error::from(error.to_string()))?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let executor = RdsDataStatementExecutor {
        resource_arn: config.resource_arn.clone(),
        secret_arn: config.secret_arn.clone(),
        database: config.database.clone(),
        rds_client: aws_sdk_rdsdata::Client::new(&aws_config),
    };

    handle_provision_event(&request_type, &config.statements, &executor)
        .map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
