use crate::runtime::model::Question;

pub trait QuestionSource {
    fn fetch_questions(&self) -> Result<Vec<Question>, String>;
}
