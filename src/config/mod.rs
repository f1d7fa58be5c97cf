//! Configuration loading and management

use crate::core::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Page sizes used when services translate page requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used when a request does not ask for one
    pub default_page_size: usize,

    /// Upper bound for any requested page size
    pub max_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

/// Business-rule limits checked by the services before `add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Category, tag and role names
    pub max_name_length: usize,

    /// Post titles
    pub max_title_length: usize,

    /// Post and comment bodies
    pub max_content_length: usize,

    pub max_username_length: usize,

    pub max_email_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: 50,
            max_title_length: 200,
            max_content_length: 10_000,
            max_username_length: 32,
            max_email_length: 254,
        }
    }
}

/// Logging setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set
    pub level: String,

    /// Print the event target (module path)
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}

/// Complete configuration
///
/// Every section is optional in YAML and falls back to its defaults.
///
/// # Example
/// ```yaml
/// paging:
///   default_page_size: 10
///   max_page_size: 50
/// validation:
///   max_name_length: 30
/// logging:
///   level: debug
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuillConfig {
    pub paging: PagingConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl QuillConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the services cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paging.max_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "paging.max_page_size".to_string(),
                value: "0".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.paging.default_page_size == 0
            || self.paging.default_page_size > self.paging.max_page_size
        {
            return Err(ConfigError::InvalidValue {
                field: "paging.default_page_size".to_string(),
                value: self.paging.default_page_size.to_string(),
                message: format!("must be between 1 and {}", self.paging.max_page_size),
            });
        }

        Ok(())
    }
}
