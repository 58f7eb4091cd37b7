use crate::config::{TrackerConfig, USER_AGENT};
use crate::parser::Document;
use crate::teams::Team;

use reqwest::{Client, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: StatusCode },
}

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
    base_url: String,
}

impl WebScraper {
    pub fn new(config: &TrackerConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn team_url(&self, team: &Team) -> String {
        format!("{}/teams/{}/line-combinations", self.base_url, team.slug)
    }

    /// Every failure is logged and reported as `None`.
    pub async fn fetch_team_page(&self, team: &Team) -> Option<Document> {
        let url = self.team_url(team);
        log::debug!("Fetching {}: {}", team.name, url);

        match self.get_html(&url).await {
            Ok(html) => Some(Document::parse(&html)),
            Err(ScraperError::HttpError(e)) if e.is_timeout() => {
                log::warn!("Timed out fetching {} ({})", team.name, url);
                None
            }
            Err(e) => {
                log::warn!("Failed to fetch {}: {}", team.name, e);
                None
            }
        }
    }

    async fn get_html(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| log::debug!("HTTP error: {e:?}"))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScraperError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response
            .text()
            .await
            .inspect_err(|e| log::debug!("Decode error: {e:?}"))?)
    }
}
