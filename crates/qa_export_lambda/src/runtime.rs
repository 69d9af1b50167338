//! Single boundary through which handlers and binaries reach core
//! extract primitives.

pub use qa_export_core::config;
pub use qa_export_core::export;
pub use qa_export_core::graph;
pub use qa_export_core::model;
pub use qa_export_core::storage_keys;
