//! `searchbox.toml` loading.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Name of the config file looked up by [`load_search_config`].
pub const CONFIG_FILE: &str = "searchbox.toml";

/// Known keys in `searchbox.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["base_url", "endpoint", "param", "timeout_secs"];

/// Where and how the search request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Origin used by native transports. Web builds use the page origin.
    pub base_url: String,
    /// Request path, e.g. `/search`.
    pub endpoint: String,
    /// Query parameter name.
    pub param: String,
    /// Platform timeout; elapsing counts as a transport failure.
    pub timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            endpoint: "/search".to_string(),
            param: "q".to_string(),
            timeout_secs: None,
        }
    }
}

impl SearchConfig {
    /// Parse and validate TOML content. Unknown keys are logged, not rejected.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table = content.parse::<toml::Table>()?;
        warn_unknown_keys(&table);

        let config: SearchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read an explicit config file. A missing file is an error here.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&content)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.endpoint.starts_with('/') {
            return Err(ConfigError::Invalid {
                key: "endpoint",
                reason: format!("'{}' must start with '/'", self.endpoint),
            });
        }
        if self.param.is_empty() {
            return Err(ConfigError::Invalid { key: "param", reason: "must not be empty".into() });
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                key: "timeout_secs",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

/// Load `searchbox.toml` from `dir`.
///
/// Returns defaults if the file doesn't exist, and defaults with a warning
/// if it can't be read or parsed.
pub fn load_search_config(dir: &Path) -> SearchConfig {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No searchbox.toml, using defaults");
        return SearchConfig::default();
    }

    debug!("Loading searchbox.toml");
    match SearchConfig::from_path(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %config_path.display(), error = %e, "Ignoring searchbox.toml");
            SearchConfig::default()
        }
    }
}

fn warn_unknown_keys(table: &toml::Table) {
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS
            .iter()
            .min_by_key(|k| edit_distance(key, k))
            .filter(|k| edit_distance(key, k) <= 3);
        match suggestion {
            Some(s) => warn!(key = key.as_str(), suggestion = *s, "Unknown key in searchbox.toml"),
            None => warn!(key = key.as_str(), "Unknown key in searchbox.toml"),
        }
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
