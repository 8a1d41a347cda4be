use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{
    build_env_key, get_env_or, get_env_parse, get_env_parse_or, load_config_file, ConfigBuilder,
};
use crate::{ErrwrapError, Result};

pub(crate) const MAX_INDENT: usize = 16;

/// Layout of a rendered error chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Spaces of indentation added per chain level
    pub indent: usize,
    /// Label in front of each cause
    pub label: String,
    /// Number of causes shown before the rest is collapsed
    pub max_depth: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            label: "Caused by".to_string(),
            max_depth: None,
        }
    }
}

impl ReportConfig {
    /// Create the default report layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation per level
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set the cause label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Limit the number of causes shown
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Load and validate a report layout from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = load_config_file(path)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigBuilder for ReportConfig {
    fn validate(&self) -> Result<()> {
        if self.indent > MAX_INDENT {
            return Err(ErrwrapError::Config(format!(
                "indent must be at most {}, got {}",
                MAX_INDENT, self.indent
            )));
        }
        if self.label.trim().is_empty() {
            return Err(ErrwrapError::Config("label must not be empty".into()));
        }
        if self.max_depth == Some(0) {
            return Err(ErrwrapError::Config("max_depth must be non-zero".into()));
        }
        Ok(())
    }

    fn from_env(prefix: &str) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            indent: get_env_parse_or(&build_env_key(prefix, "indent"), defaults.indent)?,
            label: get_env_or(&build_env_key(prefix, "label"), defaults.label)?,
            max_depth: get_env_parse(&build_env_key(prefix, "max_depth"))?,
        })
    }

    fn merge(&mut self, other: Self) -> &mut Self {
        self.indent = other.indent;
        self.label = other.label;
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        self
    }
}
