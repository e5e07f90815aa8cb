//! Frontend configuration module
//!
//! Settings are baked in at compile time from `GOBARBER_*` environment
//! variables; anything unset or unparsable falls back to its default.

use log::{Level, LevelFilter};
use shared::dashboard::DateLocale;

const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Frontend configuration for the API endpoint, language and logging.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the GoBarber API, without trailing slash.
    pub api_base_url: String,
    /// Language the UI starts in.
    pub default_language: DateLocale,
    /// Most verbose level forwarded to the console.
    pub log_level: LevelFilter,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("GOBARBER_API_URL"),
            option_env!("GOBARBER_DEFAULT_LANGUAGE"),
            option_env!("GOBARBER_LOG_LEVEL"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    fn from_values(api_url: Option<&str>, language: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base_url,
            default_language: language
                .and_then(DateLocale::from_tag)
                .unwrap_or_default(),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or_else(default_log_level),
        }
    }

    /// Level handed to the console logger, or `None` when logging is off.
    pub fn console_level(&self) -> Option<Level> {
        self.log_level.to_level()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
