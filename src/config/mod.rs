use crate::errors::{MonitorError, MonitorResult};

const DEFAULT_SEARCH_URL: &str = "https://www.reddit.com/search.rss";
const DEFAULT_USER_AGENT: &str = "vibewatch/0.1 (brand reputation research)";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub search_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub default_limit: usize,
}

impl Config {
    pub fn from_env() -> MonitorResult<Self> {
        dotenvy::dotenv().ok();

        let search_url =
            std::env::var("VIBEWATCH_SEARCH_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string());

        let user_agent =
            std::env::var("VIBEWATCH_USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let timeout_secs = match std::env::var("VIBEWATCH_TIMEOUT_SECS") {
            Ok(value) => value.parse().map_err(|_| {
                MonitorError::Config(format!("VIBEWATCH_TIMEOUT_SECS is not a number: {}", value))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let default_limit = match std::env::var("VIBEWATCH_DEFAULT_LIMIT") {
            Ok(value) => {
                let parsed: usize = value.parse().map_err(|_| {
                    MonitorError::Config(format!(
                        "VIBEWATCH_DEFAULT_LIMIT is not a number: {}",
                        value
                    ))
                })?;
                if parsed == 0 {
                    return Err(MonitorError::Config(
                        "VIBEWATCH_DEFAULT_LIMIT must be at least 1".to_string(),
                    ));
                }
                parsed
            }
            Err(_) => DEFAULT_LIMIT,
        };

        Ok(Self {
            search_url,
            user_agent,
            timeout_secs,
            default_limit,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_limit: DEFAULT_LIMIT,
        }
    }
}
