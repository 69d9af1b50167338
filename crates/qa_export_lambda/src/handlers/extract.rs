use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::adapters::object_store::ExtractStore;
use crate::adapters::question_source::QuestionSource;
use crate::runtime::export::to_csv;
use crate::runtime::graph::{extract_graph, GraphExtract};
use crate::runtime::storage_keys::{extract_object_key, ExtractDataset};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractSummary {
    pub status: String,
    pub questions: usize,
    pub answers: usize,
    pub people: usize,
    pub edges: usize,
    pub objects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractHandlerError {
    pub message: String,
    pub failed_object: Option<String>,
}

/// Fetch questions, flatten them into the four extracts, and upload each
/// extract as one object. The first failure aborts the invocation; objects
/// already written stay written and later objects are not attempted.
pub fn handle_extract(
    key_prefix: &str,
    source: &impl QuestionSource,
    store: &impl ExtractStore,
) -> Result<ExtractSummary, ExtractHandlerError> {
    let started_at = Instant::now();
    log_extract_info("extract_started", json!({ "key_prefix": key_prefix }));

    match run_extract(key_prefix, source, store) {
        Ok(summary) => {
            log_extract_info(
                "extract_completed",
                json!({
                    "questions": summary.questions,
                    "answers": summary.answers,
                    "people": summary.people,
                    "edges": summary.edges,
                    "objects": summary.objects,
                    "duration_ms": started_at.elapsed().as_millis(),
                }),
            );
            Ok(summary)
        }
        Err(error) => {
            log_extract_error(
                "extract_failed",
                json!({
                    "error": error.message,
                    "failed_object": error.failed_object,
                    "duration_ms": started_at.elapsed().as_millis(),
                }),
            );
            Err(error)
        }
    }
}

fn run_extract(
    key_prefix: &str,
    source: &impl QuestionSource,
    store: &impl ExtractStore,
) -> Result<ExtractSummary, ExtractHandlerError> {
    let questions = source
        .fetch_questions()
        .map_err(|error| ExtractHandlerError {
            message: format!("Failed to fetch questions: {error}"),
            failed_object: None,
        })?;

    log_extract_info("fetch_completed", json!({ "questions": questions.len() }));

    let extract = extract_graph(&questions);
    let mut objects = Vec::with_capacity(ExtractDataset::all().len());

    for dataset in ExtractDataset::all() {
        let (body, rows) = serialize_dataset(&extract, dataset)?;
        let key = extract_object_key(key_prefix, dataset);

        store
            .write_object(&key, &body)
            .map_err(|error| ExtractHandlerError {
                message: format!("Failed to upload {}: {error}", dataset.file_name()),
                failed_object: Some(key.clone()),
            })?;

        log_extract_info(
            "dataset_uploaded",
            json!({
                "key": key,
                "rows": rows,
                "bytes": body.len(),
            }),
        );
        objects.push(key);
    }

    Ok(ExtractSummary {
        status: "ok".to_string(),
        questions: extract.questions.len(),
        answers: extract.answers.len(),
        people: extract.people.len(),
        edges: extract.edges.len(),
        objects,
    })
}

fn serialize_dataset(
    extract: &GraphExtract,
    dataset: ExtractDataset,
) -> Result<(Vec<u8>, usize), ExtractHandlerError> {
    let (serialized, rows) = match dataset {
        ExtractDataset::Questions => (to_csv(&extract.questions), extract.questions.len()),
        ExtractDataset::Answers => (to_csv(&extract.answers), extract.answers.len()),
        ExtractDataset::People => (to_csv(&extract.people), extract.people.len()),
        ExtractDataset::Edges => (to_csv(&extract.edges), extract.edges.len()),
    };

    let body = serialized.map_err(|error| ExtractHandlerError {
        message: format!("Failed to serialize {}: {error}", dataset.file_name()),
        failed_object: None,
    })?;

    Ok((body, rows))
}

fn log_extract_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "extract_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_extract_error(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "extract_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
