//! Run configuration, loaded from an optional RON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use harvest_engine::{FetchSettings, PolitenessDelay};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything a harvest run needs; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    pub listing_url: String,
    pub output_dir: PathBuf,
    pub max_links: usize,
    pub politeness_min_ms: u64,
    pub politeness_max_ms: u64,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub accept_invalid_certs: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            listing_url: "https://www.freethink.com/articles".to_string(),
            output_dir: PathBuf::from("output"),
            max_links: harvest_core::DEFAULT_MAX_LINKS,
            politeness_min_ms: 1_000,
            politeness_max_ms: 3_000,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            user_agent: fetch.user_agent,
            accept_invalid_certs: fetch.accept_invalid_certs,
            log_file: None,
        }
    }
}

impl HarvestConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text)
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_links == 0 {
            return Err(ConfigError::Invalid("max_links must be at least 1".into()));
        }
        if self.politeness_min_ms > self.politeness_max_ms {
            return Err(ConfigError::Invalid(format!(
                "politeness_min_ms ({}) exceeds politeness_max_ms ({})",
                self.politeness_min_ms, self.politeness_max_ms
            )));
        }
        if self.listing_url.trim().is_empty() {
            return Err(ConfigError::Invalid("listing_url is empty".into()));
        }
        Ok(())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            user_agent: self.user_agent.clone(),
            accept_invalid_certs: self.accept_invalid_certs,
            ..FetchSettings::default()
        }
    }

    pub fn politeness(&self) -> PolitenessDelay {
        PolitenessDelay::new(
            Duration::from_millis(self.politeness_min_ms),
            Duration::from_millis(self.politeness_max_ms),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, HarvestConfig};
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn partial_ron_keeps_defaults() {
        let config = HarvestConfig::from_ron(
            r#"(listing_url: "https://example.com/news", politeness_max_ms: 500, politeness_min_ms: 100)"#,
        )
        .unwrap();
        assert_eq!(config.listing_url, "https://example.com/news");
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.max_links, 50);
        assert_eq!(config.politeness().max(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn optional_log_file_parses() {
        let config = HarvestConfig::from_ron(r#"(log_file: Some("harvest.log"))"#).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("harvest.log")));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let err = HarvestConfig::from_ron("(max_links: \"many\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn inverted_politeness_bounds_are_rejected() {
        let config = HarvestConfig {
            politeness_min_ms: 5_000,
            politeness_max_ms: 1_000,
            ..HarvestConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_link_cap_is_rejected() {
        let config = HarvestConfig {
            max_links: 0,
            ..HarvestConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn fetch_settings_follow_config() {
        let config = HarvestConfig {
            request_timeout_secs: 7,
            accept_invalid_certs: true,
            ..HarvestConfig::default()
        };
        let settings = config.fetch_settings();
        assert_eq!(settings.request_timeout, Duration::from_secs(7));
        assert!(settings.accept_invalid_certs);
        assert_eq!(settings.user_agent, "Mozilla/5.0");
    }
}
