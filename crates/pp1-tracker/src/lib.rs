pub mod config;
pub mod notifier;
pub mod parser;
pub mod scraper;
pub mod state;
pub mod teams;
pub mod tracker;
pub mod types;

pub use config::TrackerConfig;
pub use scraper::{ScraperError, WebScraper};
pub use tracker::{PassOutcome, Tracker, TrackerError};

pub(crate) const BASE_URL: &str = "https://www.dailyfaceoff.com";
