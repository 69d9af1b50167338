//! AWS-oriented adapters and handlers for the Q&A graph export Lambdas.
//!
//! This crate owns runtime integration details (Lambda entry points, the
//! Stack Exchange client, and storage/database adapters) and exposes a
//! single runtime module boundary over the core extract primitives.

pub mod adapters;
pub mod handlers;
pub mod runtime;
