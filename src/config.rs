use crate::catalog::Language;
use crate::error::ConfigError;
use crate::history::DEFAULT_CAPACITY;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const BOT_NAME: &str = "m0tive";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageMode {
    Fixed(Language),
    /// Pick a language uniformly per cycle.
    Mixed,
}

impl FromStr for LanguageMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("mixed") {
            return Ok(LanguageMode::Mixed);
        }
        s.parse::<Language>()
            .map(LanguageMode::Fixed)
            .map_err(|_| ConfigError::InvalidLanguage(s.to_string()))
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageMode::Fixed(language) => write!(f, "{}", language),
            LanguageMode::Mixed => f.write_str("mixed"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "m0tive", version, about = "m0tive motivational bot")]
pub struct Cli {
    /// Interval in minutes
    #[arg(long, env = "M0TIVE_INTERVAL", default_value_t = 60)]
    pub interval: u64,

    /// Log file path
    #[arg(long, env = "M0TIVE_LOG_FILE", default_value = "m0tive.log")]
    pub log_file: PathBuf,

    /// History file path
    #[arg(long, env = "M0TIVE_HISTORY_FILE", default_value = "m0tive_history.txt")]
    pub history_file: PathBuf,

    /// Message language: en, tr or mixed
    #[arg(long, env = "M0TIVE_LANGUAGE", default_value = "en")]
    pub language: String,

    /// Disable dynamic messages
    #[arg(long)]
    pub no_dynamic: bool,

    /// Enable desktop notifications
    #[arg(long)]
    pub notify: bool,

    /// Run in background (POSIX only)
    #[arg(long)]
    pub daemon: bool,

    /// Print plain lines even on a terminal
    #[arg(long)]
    pub plain: bool,

    /// Number of recent messages to avoid repeating
    #[arg(long, env = "M0TIVE_HISTORY_SIZE", default_value_t = DEFAULT_CAPACITY)]
    pub history_size: usize,

    /// Minimum cycles between promotional messages
    #[arg(long, default_value_t = 8)]
    pub promo_min: u32,

    /// Maximum cycles between promotional messages
    #[arg(long, default_value_t = 15)]
    pub promo_max: u32,

    /// Run a single cycle and exit
    #[arg(long)]
    pub once: bool,
}

/// Immutable runtime settings, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub interval: Duration,
    pub log_file: PathBuf,
    pub history_file: PathBuf,
    pub language: LanguageMode,
    pub dynamic: bool,
    pub notify: bool,
    pub daemon: bool,
    pub plain: bool,
    pub history_size: usize,
    pub promo_min: u32,
    pub promo_max: u32,
    pub once: bool,
}

impl Config {
    pub fn from_args() -> Result<Self, ConfigError> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        if cli.interval == 0 {
            return Err(ConfigError::InvalidInterval(cli.interval));
        }
        if cli.history_size == 0 {
            return Err(ConfigError::EmptyHistory);
        }
        if cli.promo_min > cli.promo_max {
            return Err(ConfigError::PromoBounds {
                min: cli.promo_min,
                max: cli.promo_max,
            });
        }
        let language = cli.language.parse()?;

        Ok(Self {
            interval: Duration::from_secs(cli.interval.saturating_mul(60)),
            log_file: cli.log_file,
            history_file: cli.history_file,
            language,
            dynamic: !cli.no_dynamic,
            notify: cli.notify,
            daemon: cli.daemon,
            plain: cli.plain,
            history_size: cli.history_size,
            promo_min: cli.promo_min,
            promo_max: cli.promo_max,
            once: cli.once,
        })
    }
}
