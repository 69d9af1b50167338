use serde::{Deserialize, Serialize};

/// A user referenced as a question or answer owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: u64,
    pub display_name: String,
    pub reputation: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    pub id: u64,
    pub question_id: u64,
    pub score: i64,
    pub created_at: i64,
    pub is_accepted: bool,
    pub owner: Person,
}

/// A question snapshot with its answers and owners inlined.
///
/// Identifiers are required at construction; wire data missing an id is
/// rejected at the API client boundary, so downstream extraction has no
/// error conditions of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: u64,
    pub title: String,
    pub link: String,
    pub score: i64,
    pub created_at: i64,
    pub owner: Person,
    pub answers: Vec<Answer>,
}
