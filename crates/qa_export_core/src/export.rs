//! CSV serialization for extract row sets.

use std::error::Error;

use crate::graph::{AnswerRow, EdgeRow, PersonRow, QuestionRow};

/// A record that serializes to one flat CSV row.
pub trait CsvRecord {
    fn fields(&self) -> Vec<String>;
}

impl CsvRecord for QuestionRow {
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.link.clone(),
            self.score.to_string(),
            self.created_at.to_string(),
        ]
    }
}

impl CsvRecord for AnswerRow {
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.question_id.to_string(),
            self.score.to_string(),
            self.created_at.to_string(),
            self.is_accepted.to_string(),
        ]
    }
}

impl CsvRecord for PersonRow {
    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.display_name.clone(),
            self.reputation.to_string(),
        ]
    }
}

impl CsvRecord for EdgeRow {
    fn fields(&self) -> Vec<String> {
        vec![
            self.source.to_string(),
            self.target.to_string(),
            self.label.as_str().to_string(),
        ]
    }
}

/// Serialize rows to an in-memory CSV buffer without a header row.
pub fn to_csv<R: CsvRecord>(rows: &[R]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut buffer = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buffer);
        for row in rows {
            wtr.write_record(row.fields())?;
        }
        wtr.flush()?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use crate::graph::EdgeLabel;

    use super::*;

    fn read_back(bytes: &[u8]) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes);
        reader
            .records()
            .map(|record| {
                record
                    .expect("record should parse")
                    .iter()
                    .map(|field| field.to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn person_rows_round_trip() {
        let rows = vec![
            PersonRow {
                id: 1,
                display_name: "plain".to_string(),
                reputation: 10,
            },
            PersonRow {
                id: 2,
                display_name: "commas, and \"quotes\"".to_string(),
                reputation: -5,
            },
        ];

        let bytes = to_csv(&rows).expect("serialization should pass");
        let parsed = read_back(&bytes);

        assert_eq!(
            parsed,
            vec![
                vec!["1".to_string(), "plain".to_string(), "10".to_string()],
                vec![
                    "2".to_string(),
                    "commas, and \"quotes\"".to_string(),
                    "-5".to_string(),
                ],
            ]
        );
    }

    #[test]
    fn question_rows_round_trip_with_embedded_newline() {
        let rows = vec![QuestionRow {
            id: 7,
            title: "line one\nline two".to_string(),
            link: "https://example.com/q/7".to_string(),
            score: 3,
            created_at: 1_600_000_000,
        }];

        let bytes = to_csv(&rows).expect("serialization should pass");
        let parsed = read_back(&bytes);

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0][1], "line one\nline two");
    }

    #[test]
    fn edge_rows_render_labels() {
        let rows = vec![EdgeRow {
            source: 10,
            target: 1,
            label: EdgeLabel::Asked,
        }];

        let bytes = to_csv(&rows).expect("serialization should pass");
        let parsed = read_back(&bytes);

        assert_eq!(
            parsed,
            vec![vec![
                "10".to_string(),
                "1".to_string(),
                "asked".to_string(),
            ]]
        );
    }

    #[test]
    fn empty_row_set_serializes_to_empty_buffer() {
        let rows: Vec<PersonRow> = Vec::new();
        let bytes = to_csv(&rows).expect("serialization should pass");
        assert!(bytes.is_empty());
    }

    #[test]
    fn output_has_no_header_row() {
        let rows = vec![PersonRow {
            id: 1,
            display_name: "only".to_string(),
            reputation: 0,
        }];

        let bytes = to_csv(&rows).expect("serialization should pass");
        assert_eq!(read_back(&bytes).len(), 1);
    }
}
