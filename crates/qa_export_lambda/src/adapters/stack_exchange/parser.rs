use crate::runtime::model::{Answer, Person, Question};

use super::error::StackExchangeError;
use super::response::{QuestionsPage, WireAnswer, WireQuestion, WireUser};

#[derive(Debug)]
pub(super) struct ParsedPage {
    pub(super) questions: Vec<Question>,
    pub(super) has_more: bool,
    pub(super) backoff: Option<u64>,
}

pub(super) fn parse_questions_page(
    page: QuestionsPage,
) -> Result<ParsedPage, StackExchangeError> {
    if let Some(error_id) = page.error_id {
        let message = page
            .error_message
            .or(page.error_name)
            .unwrap_or_default();
        return Err(StackExchangeError::Api(format!("{error_id}: {message}")));
    }

    let mut questions = Vec::with_capacity(page.items.len());
    for item in page.items {
        questions.push(parse_question(item)?);
    }

    Ok(ParsedPage {
        questions,
        has_more: page.has_more,
        backoff: page.backoff,
    })
}

fn parse_question(item: WireQuestion) -> Result<Question, StackExchangeError> {
    let id = item
        .question_id
        .ok_or(StackExchangeError::MissingField("question_id"))?;
    let owner = parse_owner(item.owner)?;

    let mut answers = Vec::new();
    for wire_answer in item.answers.unwrap_or_default() {
        answers.push(parse_answer(wire_answer, id)?);
    }

    Ok(Question {
        id,
        title: item.title.unwrap_or_default(),
        link: item.link.unwrap_or_default(),
        score: item.score.unwrap_or_default(),
        created_at: item.creation_date.unwrap_or_default(),
        owner,
        answers,
    })
}

// The nesting is the source of truth for an answer's parent question.
fn parse_answer(item: WireAnswer, question_id: u64) -> Result<Answer, StackExchangeError> {
    let id = item
        .answer_id
        .ok_or(StackExchangeError::MissingField("answer_id"))?;

    Ok(Answer {
        id,
        question_id,
        score: item.score.unwrap_or_default(),
        created_at: item.creation_date.unwrap_or_default(),
        is_accepted: item.is_accepted,
        owner: parse_owner(item.owner)?,
    })
}

fn parse_owner(owner: Option<WireUser>) -> Result<Person, StackExchangeError> {
    let owner = owner.ok_or(StackExchangeError::MissingField("owner"))?;
    let id = owner
        .user_id
        .ok_or(StackExchangeError::MissingField("owner.user_id"))?;

    Ok(Person {
        id,
        display_name: owner.display_name.unwrap_or_default(),
        reputation: owner.reputation.unwrap_or_default(),
    })
}
