//! Walkthrough configuration.
//!
//! Configuration is read once at startup from environment variables. Every
//! value is optional; anything unset falls back to a default.
//!
//! # Example
//!
//! ```rust,ignore
//! use capcell::walkthrough::WalkthroughConfig;
//!
//! let config = WalkthroughConfig::from_env()?;
//! println!("Sections: {:?}", config.sections);
//! ```

use std::env;

use tracing_subscriber::EnvFilter;

use crate::walkthrough::Section;

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_VAR: &str = "CAPCELL_LOG";

/// Fallback environment variable for the tracing filter directive.
pub const FALLBACK_LOG_FILTER_VAR: &str = "RUST_LOG";

/// Environment variable selecting which sections to run.
pub const SECTIONS_VAR: &str = "CAPCELL_SECTIONS";

/// Filter used when neither log variable is set.
pub const DEFAULT_LOG_FILTER: &str = "info,capcell=debug";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Walkthrough configuration.
///
/// # Fields
///
/// - `log_filter`: tracing filter directive for the binary's subscriber
/// - `sections`: sections to run, in the order given, without duplicates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkthroughConfig {
    /// Tracing filter directive.
    pub log_filter: String,
    /// Sections to run.
    pub sections: Vec<Section>,
}

impl WalkthroughConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `CAPCELL_LOG`: tracing filter (optional, falls back to `RUST_LOG`,
    ///   then to `info,capcell=debug`)
    /// - `CAPCELL_SECTIONS`: comma-separated section names (optional,
    ///   default: all sections)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `CAPCELL_SECTIONS` names an
    /// unknown section or selects none.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the sections value names an
    /// unknown section or selects none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use capcell::walkthrough::{Section, WalkthroughConfig};
    ///
    /// let config = WalkthroughConfig::from_lookup(|key| match key {
    ///     "CAPCELL_SECTIONS" => Some("account, counter".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.sections, vec![Section::Account, Section::Counter]);
    /// assert_eq!(config.log_filter, "info,capcell=debug");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_FILTER_VAR)
            .or_else(|| lookup(FALLBACK_LOG_FILTER_VAR))
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let sections = match lookup(SECTIONS_VAR) {
            Some(raw) => parse_sections(&raw)?,
            None => Section::ALL.to_vec(),
        };

        Ok(Self {
            log_filter,
            sections,
        })
    }

    /// Builds the tracing filter for [`log_filter`](Self::log_filter).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the directive does not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|error| ConfigError::InvalidValue {
            key: LOG_FILTER_VAR.to_string(),
            message: error.to_string(),
        })
    }
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            sections: Section::ALL.to_vec(),
        }
    }
}

fn parse_sections(raw: &str) -> Result<Vec<Section>, ConfigError> {
    let mut sections = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let section = name
            .parse::<Section>()
            .map_err(|message| ConfigError::InvalidValue {
                key: SECTIONS_VAR.to_string(),
                message,
            })?;
        if !sections.contains(&section) {
            sections.push(section);
        }
    }
    if sections.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: SECTIONS_VAR.to_string(),
            message: "no sections selected".to_string(),
        });
    }
    Ok(sections)
}
