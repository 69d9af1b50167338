/// Errors encountered while crawling the questions endpoint.
#[derive(Debug)]
pub enum StackExchangeError {
    Http(reqwest::Error),
    Json(reqwest::Error),
    Api(String),
    MissingField(&'static str),
}

impl std::fmt::Display for StackExchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(error) => write!(f, "questions request failed: {error}"),
            Self::Json(error) => write!(f, "failed to decode questions response: {error}"),
            Self::Api(message) => write!(f, "api error: {message}"),
            Self::MissingField(field) => {
                write!(f, "response item is missing required field `{field}`")
            }
        }
    }
}

impl std::error::Error for StackExchangeError {}

impl From<reqwest::Error> for StackExchangeError {
    fn from(error: reqwest::Error) -> Self {
        StackExchangeError::Http(error)
    }
}
