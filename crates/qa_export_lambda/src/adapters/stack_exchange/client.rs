use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::json;

use crate::adapters::question_source::QuestionSource;
use crate::runtime::model::Question;

use super::error::StackExchangeError;
use super::parser::parse_questions_page;
use super::response::QuestionsPage;

pub const DEFAULT_API_BASE: &str = "https://api.stackexchange.com";
pub const MAX_PAGES: usize = 100;

pub(super) const PAGE_SIZE: usize = 100;

// Filter token that inlines answers and their owners into question items.
const QUESTION_FILTER: &str = "!9YdnSIN18";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client for the Stack Exchange 2.3 questions endpoint.
#[derive(Debug, Clone)]
pub struct StackExchangeClient {
    http: Client,
    base: String,
    site: String,
    api_key: String,
    access_token: String,
}

impl StackExchangeClient {
    pub fn new(site: &str, api_key: &str, access_token: &str) -> Self {
        Self::with_base(DEFAULT_API_BASE, site, api_key, access_token)
    }

    /// Create a client against a non-default API base (e.g. a local stub).
    pub fn with_base(base: &str, site: &str, api_key: &str, access_token: &str) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build stack exchange client");
        Self {
            http,
            base: base.trim_end_matches('/').to_string(),
            site: site.to_string(),
            api_key: api_key.to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Fetch every question page up to `MAX_PAGES`, honoring advisory
    /// backoff between page requests.
    pub async fn fetch_all_questions(&self) -> Result<Vec<Question>, StackExchangeError> {
        let mut questions = Vec::new();

        for page_number in 1..=MAX_PAGES {
            let page = self.fetch_page(page_number).await?;
            let parsed = parse_questions_page(page)?;
            questions.extend(parsed.questions);

            if !parsed.has_more {
                return Ok(questions);
            }
            if let Some(seconds) = parsed.backoff {
                tokio::time::sleep(Duration::from_secs(seconds)).await;
            }
        }

        log_client_info(
            "page_limit_reached",
            json!({
                "max_pages": MAX_PAGES,
                "questions_fetched": questions.len(),
            }),
        );
        Ok(questions)
    }

    async fn fetch_page(&self, page_number: usize) -> Result<QuestionsPage, StackExchangeError> {
        let mut url = Url::parse(&format!("{}/2.3/questions", self.base)).map_err(|error| {
            StackExchangeError::Api(format!("failed to build questions URL: {error}"))
        })?;

        let page = page_number.to_string();
        let pagesize = PAGE_SIZE.to_string();
        url.query_pairs_mut()
            .append_pair("site", &self.site)
            .append_pair("order", "desc")
            .append_pair("sort", "creation")
            .append_pair("filter", QUESTION_FILTER)
            .append_pair("page", &page)
            .append_pair("pagesize", &pagesize)
            .append_pair("key", &self.api_key)
            .append_pair("access_token", &self.access_token);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(StackExchangeError::Http)?;

        if !response.status().is_success() {
            return Err(StackExchangeError::Api(format!(
                "questions request returned status {}",
                response.status()
            )));
        }

        response.json().await.map_err(StackExchangeError::Json)
    }
}

impl QuestionSource for StackExchangeClient {
    fn fetch_questions(&self) -> Result<Vec<Question>, String> {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                self.fetch_all_questions()
                    .await
                    .map_err(|error| format!("failed to fetch questions: {error}"))
            })
        })
    }
}

fn log_client_info(event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": "stack_exchange_client",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
