use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct QuestionsPage {
    #[serde(default)]
    pub(super) items: Vec<WireQuestion>,
    #[serde(default)]
    pub(super) has_more: bool,
    pub(super) backoff: Option<u64>,
    pub(super) error_id: Option<u64>,
    pub(super) error_message: Option<String>,
    pub(super) error_name: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct WireQuestion {
    pub(super) question_id: Option<u64>,
    pub(super) title: Option<String>,
    pub(super) link: Option<String>,
    pub(super) score: Option<i64>,
    pub(super) creation_date: Option<i64>,
    pub(super) owner: Option<WireUser>,
    pub(super) answers: Option<Vec<WireAnswer>>,
}

#[derive(Deserialize)]
pub(super) struct WireAnswer {
    pub(super) answer_id: Option<u64>,
    pub(super) score: Option<i64>,
    pub(super) creation_date: Option<i64>,
    #[serde(default)]
    pub(super) is_accepted: bool,
    pub(super) owner: Option<WireUser>,
}

#[derive(Deserialize)]
pub(super) struct WireUser {
    pub(super) user_id: Option<u64>,
    pub(super) display_name: Option<String>,
    pub(super) reputation: Option<i64>,
}
