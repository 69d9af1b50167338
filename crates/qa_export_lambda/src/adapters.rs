pub mod object_store;
pub mod question_source;
pub mod stack_exchange;
pub mod statement_executor;
