use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::adapters::statement_executor::StatementExecutor;

/// Lifecycle request type that triggers statement execution; every other
/// type is acknowledged without running anything.
pub const CREATE_REQUEST_TYPE: &str = "Create";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProvisionSummary {
    pub status: String,
    pub statements_executed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionHandlerError {
    pub message: String,
    pub failed_statement: Option<usize>,
}

/// Execute the configured statements in order for a `Create` request.
/// Execution stops at the first failure and the invocation fails; there is
/// no rollback of statements that already ran.
pub fn handle_provision_event(
    request_type: &str,
    statements: &[String],
    executor: &impl StatementExecutor,
) -> Result<ProvisionSummary, ProvisionHandlerError> {
    if request_type != CREATE_REQUEST_TYPE {
        log_provision_info("request_skipped", json!({ "request_type": request_type }));
        return Ok(ProvisionSummary {
            status: "skipped".to_string(),
            statements_executed: 0,
        });
    }

    for (index, statement) in statements.iter().enumerate() {
        log_provision_info(
            "statement_started",
            json!({ "index": index, "total": statements.len() }),
        );

        if let Err(error) = executor.execute_statement(statement) {
            log_provision_error(
                "statement_failed",
                json!({ "index": index, "error": error }),
            );
            return Err(ProvisionHandlerError {
                message: format!("Failed to execute statement {index}: {error}"),
                failed_statement: Some(index),
            });
        }
    }

    log_provision_info("statements_applied", json!({ "count": statements.len() }));
    Ok(ProvisionSummary {
        status: "applied".to_string(),
        statements_executed: statements.len(),
    })
}

fn log_provision_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "provision_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_provision_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "provision_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct CapturingExecutor {
        statements: Mutex<Vec<String>>,
    }

    impl CapturingExecutor {
        fn new() -> Self {
            Self {
                statements: Mutex::new(Vec::new()),
            }
        }

        fn executed(&self) -> Vec<String> {
            self.statements.lock().expect("poisoned mutex").clone()
        }
    }

    impl StatementExecutor for CapturingExecutor {
        fn execute_statement(&self, sql: &str) -> Result<(), String> {
            self.statements
                .lock()
                .expect("poisoned mutex")
                .push(sql.to_string());
            Ok(())
        }
    }

    struct FailAtExecutor {
        fail_index: usize,
        statements: Mutex<Vec<String>>,
    }

    impl FailAtExecutor {
        fn new(fail_index: usize) -> Self {
            Self {
                fail_index,
                statements: Mutex::new(Vec::new()),
            }
        }

        fn submitted(&self) -> Vec<String> {
            self.statements.lock().expect("poisoned mutex").clone()
        }
    }

    impl StatementExecutor for FailAtExecutor {
        fn execute_statement(&self, sql: &str) -> Result<(), String> {
            let mut statements = self.statements.lock().expect("poisoned mutex");
            statements.push(sql.to_string());
            if statements.len() - 1 == self.fail_index {
                return Err("injected statement failure".to_string());
            }
            Ok(())
        }
    }

    fn statements(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|text| text.to_string()).collect()
    }

    #[test]
    fn create_executes_statements_in_order() {
        let executor = CapturingExecutor::new();
        let input = statements(&[
            "CREATE TABLE events (id INT)",
            "INSERT INTO events VALUES (1)",
            "INSERT INTO events VALUES (2)",
        ]);

        let summary = handle_provision_event(CREATE_REQUEST_TYPE, &input, &executor)
            .expect("provision should succeed");

        assert_eq!(summary.status, "applied");
        assert_eq!(summary.statements_executed, 3);
        assert_eq!(executor.executed(), input);
    }

    #[test]
    fn failure_halts_without_submitting_later_statements() {
        let executor = FailAtExecutor::new(2);
        let input = statements(&["one", "two", "three", "four"]);

        let error = handle_provision_event(CREATE_REQUEST_TYPE, &input, &executor)
            .expect_err("provision should fail");

        assert_eq!(error.failed_statement, Some(2));
        assert!(error.message.contains("statement 2"));
        assert_eq!(executor.submitted(), statements(&["one", "two", "three"]));
    }

    #[test]
    fn non_create_request_types_execute_nothing() {
        for request_type in ["Update", "Delete", ""] {
            let executor = CapturingExecutor::new();
            let input = statements(&["CREATE TABLE events (id INT)"]);

            let summary = handle_provision_event(request_type, &input, &executor)
                .expect("provision should succeed");

            assert_eq!(summary.status, "skipped");
            assert_eq!(summary.statements_executed, 0);
            assert!(executor.executed().is_empty());
        }
    }

    #[test]
    fn create_with_no_statements_applies_zero() {
        let executor = CapturingExecutor::new();

        let summary = handle_provision_event(CREATE_REQUEST_TYPE, &[], &executor)
            .expect("provision should succeed");

        assert_eq!(summary.status, "applied");
        assert_eq!(summary.statements_executed, 0);
    }
}
