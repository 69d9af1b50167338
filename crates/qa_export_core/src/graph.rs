//! Flattens nested question snapshots into vertex and edge row sets.

use std::collections::HashSet;

use crate::model::{Person, Question};

/// Directed relation kinds between extract vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLabel {
    Asked,
    Answered,
    Answers,
}

impl EdgeLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asked => "asked",
            Self::Answered => "answered",
            Self::Answers => "answers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    pub id: u64,
    pub title: String,
    pub link: String,
    pub score: i64,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRow {
    pub id: u64,
    pub question_id: u64,
    pub score: i64,
    pub created_at: i64,
    pub is_accepted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    pub id: u64,
    pub display_name: String,
    pub reputation: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRow {
    pub source: u64,
    pub target: u64,
    pub label: EdgeLabel,
}

/// The four ordered row sets produced by one extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphExtract {
    pub questions: Vec<QuestionRow>,
    pub answers: Vec<AnswerRow>,
    pub people: Vec<PersonRow>,
    pub edges: Vec<EdgeRow>,
}

/// Flatten questions into vertex and edge rows.
///
/// Person rows are deduplicated by id; the first-seen occurrence wins and
/// emission order is the insertion order of first encounter. Every id an
/// edge references is guaranteed to appear in the corresponding vertex set
/// because edges are only emitted alongside the vertices they connect.
pub fn extract_graph(questions: &[Question]) -> GraphExtract {
    let mut extract = GraphExtract::default();
    let mut seen_people: HashSet<u64> = HashSet::new();

    for question in questions {
        extract.questions.push(QuestionRow {
            id: question.id,
            title: question.title.clone(),
            link: question.link.clone(),
            score: question.score,
            created_at: question.created_at,
        });
        push_person(&mut extract, &mut seen_people, &question.owner);
        extract.edges.push(EdgeRow {
            source: question.owner.id,
            target: question.id,
            label: EdgeLabel::Asked,
        });

        for answer in &question.answers {
            extract.answers.push(AnswerRow {
                id: answer.id,
                question_id: answer.question_id,
                score: answer.score,
                created_at: answer.created_at,
                is_accepted: answer.is_accepted,
            });
            push_person(&mut extract, &mut seen_people, &answer.owner);
            extract.edges.push(EdgeRow {
                source: answer.owner.id,
                target: answer.id,
                label: EdgeLabel::Answered,
            });
            extract.edges.push(EdgeRow {
                source: answer.id,
                target: answer.question_id,
                label: EdgeLabel::Answers,
            });
        }
    }

    extract
}

fn push_person(extract: &mut GraphExtract, seen: &mut HashSet<u64>, person: &Person) {
    if seen.insert(person.id) {
        extract.people.push(PersonRow {
            id: person.id,
            display_name: person.display_name.clone(),
            reputation: person.reputation,
        });
    }
}
