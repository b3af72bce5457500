use super::events::Event;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "github-activity-fetcher";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("user '{0}' not found")]
    UserNotFound(String),
    #[error("GitHub API returned status code: {0}")]
    UnexpectedStatus(u16),
    #[error("error fetching data: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("error reading response: {0}")]
    Read(#[source] reqwest::Error),
    #[error("error parsing JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the first page of a user's public activity feed.
    ///
    /// One attempt, no retries. A 200 with an empty array is `Ok(vec![])`,
    /// not an error.
    pub async fn fetch_user_events(&self, username: &str) -> Result<Vec<Event>, FetchError> {
        let url = format!("{}/users/{}/events", self.base_url, username);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::UserNotFound(username.to_string()));
        }
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::Read)?;
        let events = serde_json::from_str(&body)?;
        Ok(events)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
