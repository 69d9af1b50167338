//! Client for the Stack Exchange `/questions` endpoint.
//!
//! Wraps pagination, advisory backoff, and wire-to-domain parsing so the
//! extract handler sees validated domain questions without leaking details
//! of the HTTP response.

pub mod client;

mod error;
mod parser;
mod response;

pub use client::{StackExchangeClient, DEFAULT_API_BASE, MAX_PAGES};
pub use error::StackExchangeError;
