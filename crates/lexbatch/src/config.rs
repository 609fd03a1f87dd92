//! Run configuration.
//!
//! A [`RunConfig`] is built once from command-line inputs and an optional
//! TOML settings file, then passed by reference through the pipeline.
//! Precedence: flag > settings file > built-in default.

use crate::defaults::{DEFAULT_REGION, DEFAULT_USER_ID};
use lexbatch_lex::{Credentials, LexEndpoints};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Train,
    Test,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Train => "train",
            Mode::Test => "test",
        }
    }
}

/// What kind of model object the run operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Intent,
    /// Accepted but not implemented
    Entity,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Intent => "intent",
            Target::Entity => "entity",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intent" => Ok(Target::Intent),
            "entity" => Ok(Target::Entity),
            other => Err(ValidationError::InvalidTarget(other.to_string())),
        }
    }
}

/// Missing or invalid command-line input. Reported in check order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("You must choose intent or entity (got '{0}')")]
    InvalidTarget(String),
    #[error("Input file is required but empty")]
    MissingInput,
    #[error("AccessKey id is required")]
    MissingAccessKey,
    #[error("SecretKey is required")]
    MissingSecretKey,
    #[error("Botname is required")]
    MissingBotName,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Optional overrides loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub bot_alias: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub model_endpoint: Option<String>,
    #[serde(default)]
    pub runtime_endpoint: Option<String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Raw command-line values before validation.
#[derive(Debug, Clone, Default)]
pub struct RunInputs {
    pub target: String,
    pub input: String,
    pub access_key: String,
    pub secret_key: String,
    pub bot_name: String,
    pub session_token: Option<String>,
    pub region: Option<String>,
    pub bot_alias: Option<String>,
    pub user_id: Option<String>,
    pub model_endpoint: Option<String>,
    pub runtime_endpoint: Option<String>,
}

/// Validated configuration for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    pub target: Target,
    pub input: PathBuf,
    pub credentials: Credentials,
    pub bot_name: String,
    pub bot_alias: String,
    pub user_id: String,
    pub region: String,
    pub endpoints: LexEndpoints,
}

fn required(value: &str, err: ValidationError) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(err)
    } else {
        Ok(value.to_string())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RunConfig {
    /// Validate `inputs` and fill optional values from `settings`.
    ///
    /// Checks run in a fixed order (target, input, access key, secret key,
    /// bot name) and the first failure is returned.
    pub fn build(
        mode: Mode,
        inputs: RunInputs,
        settings: &Settings,
    ) -> Result<Self, ValidationError> {
        let target: Target = inputs.target.trim().parse()?;
        let input = required(&inputs.input, ValidationError::MissingInput)?;
        let access_key = required(&inputs.access_key, ValidationError::MissingAccessKey)?;
        let secret_key = required(&inputs.secret_key, ValidationError::MissingSecretKey)?;
        let bot_name = required(&inputs.bot_name, ValidationError::MissingBotName)?;

        let region = non_empty(inputs.region)
            .or_else(|| non_empty(settings.region.clone()))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let bot_alias = non_empty(inputs.bot_alias)
            .or_else(|| non_empty(settings.bot_alias.clone()))
            .unwrap_or_else(|| bot_name.clone());
        let user_id = non_empty(inputs.user_id)
            .or_else(|| non_empty(settings.user_id.clone()))
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        let mut endpoints = LexEndpoints::for_region(&region);
        if let Some(model) =
            non_empty(inputs.model_endpoint).or_else(|| non_empty(settings.model_endpoint.clone()))
        {
            endpoints.model = model;
        }
        if let Some(runtime) = non_empty(inputs.runtime_endpoint)
            .or_else(|| non_empty(settings.runtime_endpoint.clone()))
        {
            endpoints.runtime = runtime;
        }

        let mut credentials = Credentials::new(access_key, secret_key);
        if let Some(token) = non_empty(inputs.session_token) {
            credentials = credentials.with_session_token(token);
        }

        Ok(Self {
            mode,
            target,
            input: PathBuf::from(input),
            credentials,
            bot_name,
            bot_alias,
            user_id,
            region,
            endpoints,
        })
    }
}
