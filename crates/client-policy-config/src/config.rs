// crates/client-policy-config/src/config.rs
// ============================================================================
// Module: Client Policy Configuration
// Description: Configuration loading and validation for client policy profiles.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: client-policy-core, serde, serde_json, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Each profile lists the executors applied to a client, in evaluation order.
//! Missing or invalid configuration fails closed; nothing is activated from a
//! partially valid file.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use client_policy_core::ExecutorComponent;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "client-policy.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "CLIENT_POLICY_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of profiles.
pub(crate) const MAX_PROFILES: usize = 256;
/// Maximum number of executors per profile.
pub(crate) const MAX_EXECUTORS_PER_PROFILE: usize = 64;
/// Maximum length of profile, executor, and provider names.
pub(crate) const MAX_NAME_LENGTH: usize = 128;

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Root configuration for client policy enforcement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientPolicyConfig {
    /// Audit sink configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Client profiles in declaration order.
    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

impl ClientPolicyConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit path, then `CLIENT_POLICY_CONFIG`, then
    /// `client-policy.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.audit.validate()?;
        if self.profiles.len() > MAX_PROFILES {
            return Err(ConfigError::Invalid(format!(
                "profiles exceeds max entries ({MAX_PROFILES})"
            )));
        }
        let mut seen = BTreeSet::new();
        for profile in &self.profiles {
            profile.validate()?;
            if !seen.insert(profile.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate profile name: {}",
                    profile.name
                )));
            }
        }
        Ok(())
    }

    /// Returns the profile with the given name.
    #[must_use]
    pub fn profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.iter().find(|profile| profile.name == name)
    }
}

// ============================================================================
// SECTION: Audit
// ============================================================================

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Discard audit events.
    #[default]
    None,
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to a file.
    File,
}

/// Audit sink configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    /// Selected sink.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Output path for the file sink.
    #[serde(default)]
    pub path: Option<String>,
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, self.path.as_deref()) {
            (AuditSinkKind::File, None) => {
                Err(ConfigError::Invalid("audit.sink=file requires audit.path".to_string()))
            }
            (AuditSinkKind::File, Some(path)) => validate_path_string("audit.path", path),
            (_, Some(_)) => {
                Err(ConfigError::Invalid("audit.path requires audit.sink=file".to_string()))
            }
            (_, None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Profiles
// ============================================================================

/// Named client profile with its ordered executors.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    /// Profile name.
    pub name: String,
    /// Executors in evaluation order.
    #[serde(default)]
    pub executors: Vec<ExecutorConfig>,
}

impl ProfileConfig {
    /// Validates profile configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_name("profile name", &self.name)?;
        if self.executors.len() > MAX_EXECUTORS_PER_PROFILE {
            return Err(ConfigError::Invalid(format!(
                "profile {} exceeds max executors ({MAX_EXECUTORS_PER_PROFILE})",
                self.name
            )));
        }
        let mut seen = BTreeSet::new();
        for executor in &self.executors {
            validate_name("executor name", &executor.name)?;
            validate_name("executor provider_id", &executor.provider_id)?;
            if !seen.insert(executor.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate executor name in profile {}: {}",
                    self.name, executor.name
                )));
            }
        }
        Ok(())
    }

    /// Converts the profile executors into registry components.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a configuration blob cannot be represented
    /// as JSON.
    pub fn to_components(&self) -> Result<Vec<ExecutorComponent>, ConfigError> {
        self.executors.iter().map(ExecutorConfig::to_component).collect()
    }
}

/// Executor entry inside a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutorConfig {
    /// Executor label, unique within the profile.
    pub name: String,
    /// Provider identifier resolved by the executor registry.
    pub provider_id: String,
    /// Provider-specific configuration blob.
    #[serde(default)]
    pub config: Option<toml::Value>,
}

impl ExecutorConfig {
    /// Converts this entry into an [`ExecutorComponent`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration blob cannot be converted.
    pub fn to_component(&self) -> Result<ExecutorComponent, ConfigError> {
        let config = match &self.config {
            Some(value) => serde_json::to_value(value).map_err(|err| {
                ConfigError::Invalid(format!("executor {} config: {err}", self.name))
            })?,
            None => Value::Null,
        };
        Ok(ExecutorComponent::new(self.name.as_str(), self.provider_id.as_str())
            .with_config(config))
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates a profile, executor, or provider name.
fn validate_name(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} is empty")));
    }
    if value.len() > MAX_NAME_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds {MAX_NAME_LENGTH} bytes")));
    }
    if value.chars().any(char::is_control) {
        return Err(ConfigError::Invalid(format!("{field} contains control characters")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
