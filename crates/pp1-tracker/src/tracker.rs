use std::time::Duration;

use chrono::Local;
use futures::future;

use crate::config::TrackerConfig;
use crate::notifier::{Notifier, detect_change};
use crate::parser::RosterExtractor;
use crate::scraper::{ScraperError, WebScraper};
use crate::state::{StateError, StateStore};
use crate::teams::Team;
use crate::types::{PassSummary, TeamLineup};

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Scraper setup failed: {0}")]
    Scraper(#[from] ScraperError),
    #[error("Failed to persist state: {0}")]
    State(#[from] StateError),
}

#[derive(Debug)]
pub enum PassOutcome {
    Completed(PassSummary),
    TimedOut,
}

pub struct Tracker<E, N> {
    scraper: WebScraper,
    extractor: E,
    notifier: N,
    store: StateStore,
    pass_timeout: Duration,
}

impl<E: RosterExtractor, N: Notifier> Tracker<E, N> {
    pub fn new(config: &TrackerConfig, extractor: E, notifier: N) -> Result<Self, TrackerError> {
        Ok(Self {
            scraper: WebScraper::new(config)?,
            extractor,
            notifier,
            store: StateStore::new(&config.state_file),
            pass_timeout: config.pass_timeout,
        })
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub async fn run_pass(&self, teams: &[Team]) -> Result<PassOutcome, TrackerError> {
        match tokio::time::timeout(self.pass_timeout, self.pass(teams)).await {
            Ok(summary) => Ok(PassOutcome::Completed(summary?)),
            Err(_) => {
                log::error!(
                    "Pass exceeded {:?}, abandoning it without saving state",
                    self.pass_timeout
                );
                Ok(PassOutcome::TimedOut)
            }
        }
    }

    async fn pass(&self, teams: &[Team]) -> Result<PassSummary, TrackerError> {
        let prior = self.store.load();
        log::info!(
            "Loaded {} stored unit(s) from {}",
            prior.len(),
            self.store.path().display()
        );

        log::info!("Fetching {} team page(s)...", teams.len());
        // Documents never outlive their own fetch.
        let fetched = future::join_all(teams.iter().map(|team| async move {
            let page = self.scraper.fetch_team_page(team).await;
            let rosters = page.map(|page| {
                (
                    self.extractor.primary_line(Some(&page)),
                    self.extractor.power_play_unit(Some(&page)),
                )
            });
            (team, rosters)
        }))
        .await;

        let mut updated = prior.clone();
        let mut lineups = Vec::new();
        let mut unavailable = Vec::new();
        let mut notifications = Vec::new();

        for (team, rosters) in fetched {
            let Some((line1, pp1)) = rosters else {
                unavailable.push(team.name.to_string());
                continue;
            };

            if pp1.is_empty() {
                log::warn!("No PP1 found for {}", team.name);
            }

            let baseline = prior.get(team.name).map(Vec::as_slice).unwrap_or_default();
            if let Some(change) = detect_change(team.name, &pp1, baseline) {
                log::info!("PP1 changed for {}", team.name);
                if let Err(e) = self.notifier.notify(&change).await {
                    log::warn!("Failed to deliver update for {}: {}", team.name, e);
                }
                notifications.push(change);
            }

            updated.insert(team.name, pp1.clone());
            lineups.push(TeamLineup {
                team: team.name.to_string(),
                line1,
                pp1,
            });
        }

        if !unavailable.is_empty() {
            log::warn!(
                "Kept stored units for {} unreachable team(s)",
                unavailable.len()
            );
        }

        self.store
            .save(&updated)
            .inspect_err(|e| log::error!("Failed to save state: {e}"))?;
        log::info!("Saved {} unit(s)", updated.len());

        Ok(PassSummary {
            finished_at: Local::now(),
            lineups,
            unavailable,
            notifications,
        })
    }
}
