//! Configuration management utilities
//!
//! - `ConfigBuilder` trait for consistent configuration APIs
//! - Environment variable loading with proper error handling
//! - JSON / YAML configuration file loading
//!
//! [`ReportConfig`](crate::ReportConfig) is the crate's own configuration
//! and is built with these helpers.
//!
//! # Example
//!
//! ```rust,ignore
//! use errwrap::config::ConfigBuilder;
//! use errwrap::ReportConfig;
//!
//! // ERRWRAP_INDENT=4 ERRWRAP_MAX_DEPTH=8
//! let config = ReportConfig::from_env_with_defaults("ERRWRAP_")?;
//! ```

mod builder;
mod env;
mod file;

pub use builder::ConfigBuilder;
pub use env::{build_env_key, get_env, get_env_bool, get_env_or, get_env_parse, get_env_parse_or};
pub use file::{load_config_file, load_json_config, load_yaml_config};
