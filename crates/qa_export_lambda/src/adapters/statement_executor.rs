pub trait StatementExecutor {
    fn execute_statement(&self, sql: &str) -> Result<(), String>;
}
