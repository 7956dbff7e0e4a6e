use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::{Error, Result};

const MAX_LIMIT: usize = 100;

/// Top-level configuration, usually loaded from a TOML file.
///
/// ```toml
/// [api]
/// api_key = "..."
///
/// [engine]
/// recent_limit = 20
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api: ApiConfig,
    pub engine: EngineConfig,
}

/// Settings for whatever implements [`OsuApi`](crate::OsuApi).
///
/// The engine itself never reads these.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub requests_per_minute: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://osu.ppy.sh/api".to_owned(),
            api_key: String::new(),
            requests_per_minute: 60,
        }
    }
}

/// How many entries are requested from the api.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub leaderboard_limit: usize,
    pub best_plays_limit: usize,
    pub recent_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            leaderboard_limit: 100,
            best_plays_limit: 100,
            recent_limit: 50,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document. Missing keys take their default.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        Self::from_toml_str(&content).inspect_err(|err| {
            tracing::error!(path = %path.display(), %err, "Failed to load config");
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.engine.validate()
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url must not be empty".to_owned()));
        }

        if self.requests_per_minute == 0 {
            return Err(Error::Config(
                "requests_per_minute must be positive".to_owned(),
            ));
        }

        Ok(())
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("leaderboard_limit", self.leaderboard_limit),
            ("best_plays_limit", self.best_plays_limit),
            ("recent_limit", self.recent_limit),
        ];

        for (name, limit) in limits {
            if !(1..=MAX_LIMIT).contains(&limit) {
                return Err(Error::Config(format!(
                    "{name} must be between 1 and {MAX_LIMIT}, got {limit}"
                )));
            }
        }

        Ok(())
    }
}
