//! Ordered SQL statement collection from numbered environment variables.

use crate::config::ConfigError;

pub const STATEMENT_VAR_PREFIX: &str = "STATEMENT_";

/// Collect `STATEMENT_<index>` pairs into an index-ordered statement list.
///
/// Execution order is the numeric index order, never the enumeration order
/// of the input. Index gaps are tolerated; a non-numeric suffix or a blank
/// statement is a configuration error.
pub fn collect_statements<'a>(
    vars: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<Vec<String>, ConfigError> {
    let mut indexed: Vec<(u64, String)> = Vec::new();
    let mut problems = Vec::new();

    for (name, value) in vars {
        let Some(suffix) = name.strip_prefix(STATEMENT_VAR_PREFIX) else {
            continue;
        };
        let Ok(index) = suffix.parse::<u64>() else {
            problems.push(format!("{name} does not have a numeric statement index"));
            continue;
        };
        if value.trim().is_empty() {
            problems.push(format!("{name} holds an empty statement"));
            continue;
        }
        indexed.push((index, value.to_string()));
    }

    if !problems.is_empty() {
        return Err(ConfigError::new(problems));
    }

    indexed.sort_by_key(|(index, _)| *index);
    Ok(indexed
        .into_iter()
        .map(|(_, statement)| statement)
        .collect())
}
