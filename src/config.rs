use log::Level;
use std::str::FromStr;

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// Build-time settings, read from `PET_SEARCH_API_URL` and `PET_SEARCH_LOG_LEVEL`.
#[derive(Clone, PartialEq, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("PET_SEARCH_API_URL"), option_env!("PET_SEARCH_LOG_LEVEL"))
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();
        let log_level = log_level
            .and_then(|level| Level::from_str(level).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self {
            api_base_url,
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
