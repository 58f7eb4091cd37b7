use reqwest::Client;
use serde::Serialize;

use crate::config::TrackerConfig;
use crate::types::ChangeNotification;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Webhook request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// An empty `prior` is no baseline and never a change. `added` keeps the
/// order of `new`, `removed` the order of `prior`.
pub fn detect_change(team: &str, new: &[String], prior: &[String]) -> Option<ChangeNotification> {
    if prior.is_empty() {
        return None;
    }

    let added: Vec<String> = new.iter().filter(|p| !prior.contains(p)).cloned().collect();
    let removed: Vec<String> = prior.iter().filter(|p| !new.contains(p)).cloned().collect();

    if added.is_empty() && removed.is_empty() {
        return None;
    }

    Some(ChangeNotification {
        team: team.to_string(),
        added,
        removed,
    })
}

pub trait Notifier {
    fn notify(
        &self,
        notification: &ChangeNotification,
    ) -> impl Future<Output = Result<(), NotifyError>>;
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: Option<String>,
}

impl WebhookNotifier {
    pub fn new(config: &TrackerConfig) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(config.notify_timeout).build()?;

        Ok(Self {
            client,
            url: config.webhook_url.clone().filter(|u| !u.trim().is_empty()),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}

impl Notifier for WebhookNotifier {
    async fn notify(&self, notification: &ChangeNotification) -> Result<(), NotifyError> {
        let Some(url) = &self.url else {
            log::warn!(
                "No webhook configured, dropping update for {}",
                notification.team
            );
            return Ok(());
        };

        let content = notification.to_string();
        self.client
            .post(url)
            .json(&WebhookPayload { content: &content })
            .send()
            .await?
            .error_for_status()?;

        log::info!("Sent PP1 update for {}", notification.team);
        Ok(())
    }
}
