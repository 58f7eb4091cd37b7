use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use pp1_tracker::config::DEFAULT_STATE_FILE;
use pp1_tracker::notifier::WebhookNotifier;
use pp1_tracker::parser::LineupExtractor;
use pp1_tracker::teams::TEAMS;
use pp1_tracker::{PassOutcome, Tracker, TrackerConfig};

/// Exit status when the pass deadline fires.
const EXIT_TIMED_OUT: i32 = 2;

#[derive(Parser)]
#[command(name = "pp1-tracker")]
#[command(
    about = "Checks every NHL team's first power-play unit once and reports changes",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        env = "PP1_LOG_LEVEL",
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value = "text",
        help = "Output format for the pass summary"
    )]
    format: OutputFormat,

    #[arg(long, env = "PP1_WEBHOOK_URL", help = "Webhook that receives PP1 updates")]
    webhook_url: Option<String>,

    #[arg(
        long,
        env = "PP1_STATE_FILE",
        default_value = DEFAULT_STATE_FILE,
        help = "File holding the last seen units"
    )]
    state_file: PathBuf,

    #[arg(long, env = "PP1_BASE_URL", help = "Override the line combinations site")]
    base_url: Option<String>,

    #[arg(
        long,
        env = "PP1_PASS_TIMEOUT",
        default_value_t = 120,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds allowed for the whole pass"
    )]
    pass_timeout: u64,

    #[arg(
        long,
        env = "PP1_REQUEST_TIMEOUT",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds allowed per page request"
    )]
    request_timeout: u64,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn tracker_config(&self) -> TrackerConfig {
        let defaults = TrackerConfig::default();
        TrackerConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            request_timeout: Duration::from_secs(self.request_timeout),
            pass_timeout: Duration::from_secs(self.pass_timeout),
            state_file: self.state_file.clone(),
            webhook_url: self.webhook_url.clone(),
            ..defaults
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .target(env_logger::Target::Stderr)
        .init();

    let config = cli.tracker_config();

    let notifier = WebhookNotifier::new(&config).unwrap_or_else(|e| {
        log::error!("Error creating notifier: {}", e);
        process::exit(1);
    });
    if !notifier.is_configured() {
        log::warn!("PP1_WEBHOOK_URL is not set, changes will only be logged");
    }

    let tracker =
        Tracker::new(&config, LineupExtractor::default(), notifier).unwrap_or_else(|e| {
            log::error!("Error creating tracker: {}", e);
            process::exit(1);
        });

    let outcome = tracker.run_pass(&TEAMS).await.unwrap_or_else(|e| {
        log::error!("Pass failed: {}", e);
        process::exit(1);
    });

    let summary = match outcome {
        PassOutcome::Completed(summary) => summary,
        PassOutcome::TimedOut => process::exit(EXIT_TIMED_OUT),
    };

    match cli.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Error serializing to JSON: {}", e);
                process::exit(1);
            }
        },
        OutputFormat::Text => println!("{}", summary),
    }
}
