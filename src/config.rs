//! Strongly-typed configuration for the inspection engine.
//!
//! Values can be constructed from defaults or loaded from environment
//! variables (with optional `.env` support via `dotenvy`). Only presentation
//! concerns live here; nothing in the configuration affects which nodes a
//! query resolves to.

use std::env;
use std::num::ParseIntError;

use dotenvy::dotenv;
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};
use serde::{Deserialize as DeriveDeserialize, Serialize as DeriveSerialize};
use thiserror::Error;

use crate::tree::DEFAULT_INDENT_MARKER;

/// Default depth bound for tree dumps when the caller supplies none.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {variable}: {source}")]
    InvalidInteger {
        variable: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid verbosity value {0}; expected 0, 1, or 2")]
    InvalidVerbosity(String),
}

/// Verbosity level for inspector logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Minimal,
    Medium,
    Detailed,
}

impl Verbosity {
    pub(crate) fn as_u8(self) -> u8 {
        match self {
            Verbosity::Minimal => 0,
            Verbosity::Medium => 1,
            Verbosity::Detailed => 2,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Verbosity::Minimal),
            1 => Some(Verbosity::Medium),
            2 => Some(Verbosity::Detailed),
            _ => None,
        }
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Medium
    }
}

impl Serialize for Verbosity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Verbosity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Verbosity::from_u8(value).ok_or_else(|| {
            DeError::custom(format!(
                "invalid verbosity value {value}; expected 0, 1, or 2"
            ))
        })
    }
}

/// Configuration values for the [`crate::inspector::Inspector`] facade.
#[derive(Debug, Clone, PartialEq, DeriveSerialize, DeriveDeserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Logging verbosity.
    pub verbose: Verbosity,
    /// Marker repeated once per depth level in tree dumps.
    pub indent_marker: String,
    /// Depth bound applied when a dump request supplies none.
    pub default_max_depth: usize,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            verbose: Verbosity::default(),
            indent_marker: DEFAULT_INDENT_MARKER.to_string(),
            default_max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl InspectorConfig {
    /// Load configuration from the environment, honouring a `.env` file when
    /// present. Recognised variables: `AXQUERY_VERBOSE` (0, 1, or 2),
    /// `AXQUERY_MAX_DEPTH`, `AXQUERY_INDENT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv();

        let mut config = Self::default();

        if let Ok(value) = env::var("AXQUERY_VERBOSE") {
            config.verbose = parse_verbosity(&value)?;
        }
        if let Ok(value) = env::var("AXQUERY_MAX_DEPTH") {
            config.default_max_depth = parse_depth(&value)?;
        }
        if let Ok(value) = env::var("AXQUERY_INDENT") {
            config.indent_marker = value;
        }

        Ok(config)
    }
}

fn parse_verbosity(value: &str) -> Result<Verbosity, ConfigError> {
    let parsed: u8 = value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidInteger {
            variable: "AXQUERY_VERBOSE",
            source,
        })?;
    Verbosity::from_u8(parsed).ok_or_else(|| ConfigError::InvalidVerbosity(value.to_string()))
}

fn parse_depth(value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidInteger {
            variable: "AXQUERY_MAX_DEPTH",
            source,
        })
}
