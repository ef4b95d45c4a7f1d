//! Runtime configuration.
//!
//! The default configuration in `packages/source/config/focos.toml` is
//! baked into the binary with [`include_str!`]. Pointing [`CONFIG_ENV`] at
//! another file replaces it wholesale. Secrets never live here; see the
//! notifier crate for the environment variables it reads.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{FixedOffset, Offset as _, Utc};
use focos_metrics_models::{HistoricalLayout, MonthLocale, MonthVocabulary};
use serde::Deserialize;

/// Environment variable naming a config file to load instead of the
/// embedded default.
pub const CONFIG_ENV: &str = "FOCOS_CONFIG";

/// Placeholder replaced by the region id in URL templates.
pub const REGION_PLACEHOLDER: &str = "{region}";

const DEFAULT_CONFIG: &str = include_str!("../config/focos.toml");

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`FocosConfig`].
    #[error("Invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config parsed but violates a constraint.
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// A requested region id is not configured.
    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}

/// A geographic region with its own pair of published tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionConfig {
    /// Identifier substituted into the URL templates (e.g. `"amazonia"`).
    pub id: String,
    /// Display name used in bulletins (e.g. `"AMAZÔNIA"`).
    pub name: String,
}

/// Bulletin delivery settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailConfig {
    /// Sender address. `SENDER_EMAIL` overrides it at send time.
    pub sender_email: String,
    /// Sender display name.
    pub sender_name: String,
    /// Subject line, also used as the bulletin title.
    pub subject: String,
    /// Recipient addresses. `FOCOS_RECIPIENTS` extends it at send time.
    #[serde(default)]
    pub recipients: Vec<String>,
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FocosConfig {
    /// Offset from UTC, in whole hours, of the clock that decides "today".
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
    /// Timeout applied to every outgoing HTTP request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Language of the month labels fed to the calculator.
    #[serde(default)]
    pub month_locale: MonthLocale,
    /// URL template of the current-period table.
    pub current_period_url: String,
    /// URL template of the historical table.
    pub historical_url: String,
    /// Layout of the historical table.
    #[serde(default)]
    pub historical: HistoricalLayout,
    /// Regions processed each cycle, in bulletin order.
    pub regions: Vec<RegionConfig>,
    /// Bulletin delivery settings.
    pub email: EmailConfig,
}

const fn default_utc_offset_hours() -> i32 {
    -3
}

const fn default_request_timeout_secs() -> u64 {
    20
}

impl FocosConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed TOML and
    /// [`ConfigError::Invalid`] when a constraint is violated.
    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::de::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration embedded at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the embedded file is invalid.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(DEFAULT_CONFIG)
    }

    /// Reads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or any
    /// [`Self::parse`] error.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Loads the file named by [`CONFIG_ENV`], or the embedded default when
    /// the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the selected configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                log::info!("Loading config from {path}");
                Self::from_path(Path::new(&path))
            }
            Err(_) => {
                log::debug!("{CONFIG_ENV} not set, using embedded config");
                Self::embedded()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.regions.is_empty() {
            return invalid("at least one region is required".to_string());
        }

        let mut seen = BTreeSet::new();
        for region in &self.regions {
            if region.id.trim().is_empty() {
                return invalid("region id is empty".to_string());
            }
            if !seen.insert(region.id.as_str()) {
                return invalid(format!("duplicate region id '{}'", region.id));
            }
        }

        for (key, template) in [
            ("current_period_url", &self.current_period_url),
            ("historical_url", &self.historical_url),
        ] {
            if !template.contains(REGION_PLACEHOLDER) {
                return invalid(format!("{key} must contain {REGION_PLACEHOLDER}"));
            }
        }

        if self.historical.mean_rows.is_empty() {
            return invalid("historical.mean_rows must not be empty".to_string());
        }

        if !(-23..=23).contains(&self.utc_offset_hours) {
            return invalid(format!(
                "utc_offset_hours {} is outside -23..=23",
                self.utc_offset_hours
            ));
        }

        if self.request_timeout_secs == 0 {
            return invalid("request_timeout_secs must be positive".to_string());
        }

        Ok(())
    }

    /// Keeps only the regions listed in `ids`, in configured order. An
    /// empty `ids` keeps every region.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRegion`] for the first id that is not
    /// configured.
    pub fn with_regions(mut self, ids: &[&str]) -> Result<Self, ConfigError> {
        if ids.is_empty() {
            return Ok(self);
        }
        if let Some(unknown) = ids
            .iter()
            .find(|id| !self.regions.iter().any(|r| r.id == **id))
        {
            return Err(ConfigError::UnknownRegion((*unknown).to_string()));
        }
        self.regions.retain(|r| ids.contains(&r.id.as_str()));
        Ok(self)
    }

    /// URL of the current-period table for `region`.
    #[must_use]
    pub fn current_period_url(&self, region: &RegionConfig) -> String {
        self.current_period_url.replace(REGION_PLACEHOLDER, &region.id)
    }

    /// URL of the historical table for `region`.
    #[must_use]
    pub fn historical_url(&self, region: &RegionConfig) -> String {
        self.historical_url.replace(REGION_PLACEHOLDER, &region.id)
    }

    /// Month vocabulary for the configured locale.
    #[must_use]
    pub fn vocabulary(&self) -> MonthVocabulary {
        MonthVocabulary::new(self.month_locale)
    }

    /// Per-request HTTP timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Clock offset used to decide the current date.
    #[must_use]
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
    }
}
