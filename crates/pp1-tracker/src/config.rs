use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_STATE_FILE: &str = "pp1_state.json";

// The site rejects non-browser agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub pass_timeout: Duration,
    pub notify_timeout: Duration,
    pub state_file: PathBuf,
    pub webhook_url: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: crate::BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            pass_timeout: Duration::from_secs(120),
            notify_timeout: Duration::from_secs(10),
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            webhook_url: None,
        }
    }
}
