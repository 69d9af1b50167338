#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractDataset {
    Questions,
    Answers,
    People,
    Edges,
}

impl ExtractDataset {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Questions => "questions.csv",
            Self::Answers => "answers.csv",
            Self::People => "people.csv",
            Self::Edges => "edges.csv",
        }
    }

    /// Upload order for one extract invocation.
    pub fn all() -> [ExtractDataset; 4] {
        [Self::Questions, Self::Answers, Self::People, Self::Edges]
    }
}

pub fn extract_object_key(prefix: &str, dataset: ExtractDataset) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        dataset.file_name().to_string()
    } else {
        format!("{trimmed}/{}", dataset.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_bare_key_without_prefix() {
        let key = extract_object_key("", ExtractDataset::Questions);
        assert_eq!(key, "questions.csv");
    }

    #[test]
    fn builds_prefixed_key_with_slash_trimming() {
        let key = extract_object_key("/exports/latest/", ExtractDataset::Edges);
        assert_eq!(key, "exports/latest/edges.csv");
    }

    #[test]
    fn upload_order_is_stable() {
        let names: Vec<&str> = ExtractDataset::all()
            .into_iter()
            .map(ExtractDataset::file_name)
            .collect();
        assert_eq!(
            names,
            vec!["questions.csv", "answers.csv", "people.csv", "edges.csv"]
        );
    }
}
