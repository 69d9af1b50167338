//! Explicit configuration built once at startup from environment pairs.
//!
//! Parsing takes an iterator of `(name, value)` pairs instead of touching
//! process globals, and every detected problem is reported in one aggregated
//! error instead of failing on the first missing variable.

use std::collections::HashMap;

use crate::statements::collect_statements;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_SITE: &str = "stackoverflow";

pub const ACCESS_TOKEN_VAR: &str = "STACK_EXCHANGE_ACCESS_TOKEN";
pub const API_KEY_VAR: &str = "STACK_EXCHANGE_KEY";
pub const SITE_VAR: &str = "STACK_EXCHANGE_SITE";
pub const REGION_VAR: &str = "REGION";
pub const BUCKET_VAR: &str = "BUCKET";
pub const EXPORT_PREFIX_VAR: &str = "EXPORT_PREFIX";

pub const DB_ARN_VAR: &str = "DB_ARN";
pub const SECRET_ARN_VAR: &str = "SECRET_ARN";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

/// Aggregated configuration failure listing every detected problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    problems: Vec<String>,
}

impl ConfigError {
    pub fn new(problems: Vec<String>) -> Self {
        Self { problems }
    }

    pub fn problems(&self) -> &[String] {
        &self.problems
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid configuration: {}", self.problems.join("; "))
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub access_token: String,
    pub api_key: String,
    pub site: String,
    pub region: String,
    pub bucket: String,
    pub key_prefix: String,
}

impl ExtractorConfig {
    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let mut problems = Vec::new();

        let access_token = required(&vars, ACCESS_TOKEN_VAR, &mut problems);
        let api_key = required(&vars, API_KEY_VAR, &mut problems);
        let bucket = required(&vars, BUCKET_VAR, &mut problems);
        let site = optional(&vars, SITE_VAR, DEFAULT_SITE);
        let region = optional(&vars, REGION_VAR, DEFAULT_REGION);
        let key_prefix = optional(&vars, EXPORT_PREFIX_VAR, "");

        if !problems.is_empty() {
            return Err(ConfigError::new(problems));
        }

        Ok(Self {
            access_token,
            api_key,
            site,
            region,
            bucket,
            key_prefix,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionerConfig {
    pub resource_arn: String,
    pub secret_arn: String,
    pub database: String,
    pub statements: Vec<String>,
}

impl ProvisionerConfig {
    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = vars.into_iter().collect();
        let mut problems = Vec::new();

        let resource_arn = required(&vars, DB_ARN_VAR, &mut problems);
        let secret_arn = required(&vars, SECRET_ARN_VAR, &mut problems);
        let database = required(&vars, DATABASE_NAME_VAR, &mut problems);

        let statements = match collect_statements(
            vars.iter().map(|(name, value)| (name.as_str(), value.as_str())),
        ) {
            Ok(statements) => statements,
            Err(error) => {
                problems.extend(error.problems().iter().cloned());
                Vec::new()
            }
        };

        if !problems.is_empty() {
            return Err(ConfigError::new(problems));
        }

        Ok(Self {
            resource_arn,
            secret_arn,
            database,
            statements,
        })
    }
}

fn required(vars: &HashMap<String, String>, name: &str, problems: &mut Vec<String>) -> String {
    match vars.get(name).map(|value| value.trim()) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => {
            problems.push(format!("{name} must be set"));
            String::new()
        }
    }
}

fn optional(vars: &HashMap<String, String>, name: &str, default: &str) -> String {
    match vars.get(name).map(|value| value.trim()) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn extractor_reports_every_missing_variable_at_once() {
        let error = ExtractorConfig::from_vars(pairs(&[])).expect_err("config should fail");

        assert_eq!(error.problems().len(), 3);
        assert!(error
            .problems()
            .iter()
            .any(|problem| problem.contains(ACCESS_TOKEN_VAR)));
        assert!(error
            .problems()
            .iter()
            .any(|problem| problem.contains(API_KEY_VAR)));
        assert!(error
            .problems()
            .iter()
            .any(|problem| problem.contains(BUCKET_VAR)));
    }

    #[test]
    fn extractor_applies_defaults_for_optional_variables() {
        let config = ExtractorConfig::from_vars(pairs(&[
            (ACCESS_TOKEN_VAR, "token"),
            (API_KEY_VAR, "key"),
            (BUCKET_VAR, "extract-bucket"),
        ]))
        .expect("config should pass");

        assert_eq!(config.site, DEFAULT_SITE);
        assert_eq!(config.region, DEFAULT_REGION);
        assert_eq!(config.key_prefix, "");
    }

    #[test]
    fn extractor_honors_explicit_optional_variables() {
        let config = ExtractorConfig::from_vars(pairs(&[
            (ACCESS_TOKEN_VAR, "token"),
            (API_KEY_VAR, "key"),
            (BUCKET_VAR, "extract-bucket"),
            (SITE_VAR, "serverfault"),
            (REGION_VAR, "eu-west-1"),
            (EXPORT_PREFIX_VAR, "exports/latest"),
        ]))
        .expect("config should pass");

        assert_eq!(config.site, "serverfault");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.key_prefix, "exports/latest");
    }

    #[test]
    fn blank_required_value_counts_as_missing() {
        let error = ExtractorConfig::from_vars(pairs(&[
            (ACCESS_TOKEN_VAR, "token"),
            (API_KEY_VAR, "key"),
            (BUCKET_VAR, "   "),
        ]))
        .expect_err("config should fail");

        assert_eq!(error.problems().len(), 1);
        assert!(error.problems()[0].contains(BUCKET_VAR));
    }

    #[test]
    fn provisioner_collects_ordered_statements() {
        let config = ProvisionerConfig::from_vars(pairs(&[
            (DB_ARN_VAR, "arn:aws:rds:eu-west-1:123:cluster:db"),
            (SECRET_ARN_VAR, "arn:aws:secretsmanager:eu-west-1:123:secret:creds"),
            (DATABASE_NAME_VAR, "sample_db"),
            ("STATEMENT_1", "INSERT INTO events VALUES (1)"),
            ("STATEMENT_0", "CREATE TABLE events (id INT)"),
        ]))
        .expect("config should pass");

        assert_eq!(
            config.statements,
            vec![
                "CREATE TABLE events (id INT)".to_string(),
                "INSERT INTO events VALUES (1)".to_string(),
            ]
        );
    }

    #[test]
    fn provisioner_aggregates_missing_vars_and_statement_problems() {
        let error = ProvisionerConfig::from_vars(pairs(&[
            (SECRET_ARN_VAR, "arn:aws:secretsmanager:eu-west-1:123:secret:creds"),
            (DATABASE_NAME_VAR, "sample_db"),
            ("STATEMENT_FIRST", "CREATE TABLE events (id INT)"),
        ]))
        .expect_err("config should fail");

        assert_eq!(error.problems().len(), 2);
        assert!(error
            .problems()
            .iter()
            .any(|problem| problem.contains(DB_ARN_VAR)));
        assert!(error
            .problems()
            .iter()
            .any(|problem| problem.contains("STATEMENT_FIRST")));
    }

    #[test]
    fn provisioner_accepts_zero_statements() {
        let config = ProvisionerConfig::from_vars(pairs(&[
            (DB_ARN_VAR, "arn:aws:rds:eu-west-1:123:cluster:db"),
            (SECRET_ARN_VAR, "arn:aws:secretsmanager:eu-west-1:123:secret:creds"),
            (DATABASE_NAME_VAR, "sample_db"),
        ]))
        .expect("config should pass");

        assert!(config.statements.is_empty());
    }

    #[test]
    fn config_error_display_lists_problems() {
        let error = ConfigError::new(vec![
            "BUCKET must be set".to_string(),
            "REGION must be set".to_string(),
        ]);

        assert_eq!(
            error.to_string(),
            "invalid configuration: BUCKET must be set; REGION must be set"
        );
    }
}
