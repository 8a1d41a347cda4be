//! Configuration builder trait
//!
//! Shared shape for configuration structures: defaults, environment
//! loading, merging and validation.

use crate::Result;

/// Trait for configuration structures that support building, validation, and merging
///
/// # Example
///
/// ```rust,ignore
/// use errwrap::config::{get_env_parse_or, ConfigBuilder};
///
/// #[derive(Clone, Default)]
/// struct RenderConfig {
///     pub width: usize,
/// }
///
/// impl ConfigBuilder for RenderConfig {
///     fn validate(&self) -> errwrap::Result<()> {
///         if self.width == 0 {
///             return Err(errwrap::ErrwrapError::Config("width must be non-zero".into()));
///         }
///         Ok(())
///     }
///
///     fn from_env(prefix: &str) -> errwrap::Result<Self> {
///         Ok(Self {
///             width: get_env_parse_or(&format!("{}WIDTH", prefix), 80)?,
///         })
///     }
///
///     fn merge(&mut self, other: Self) -> &mut Self {
///         self.width = other.width;
///         self
///     }
/// }
/// ```
pub trait ConfigBuilder: Default + Clone {
    /// Validate the configuration
    ///
    /// Returns an error if the configuration is invalid.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Load configuration from environment variables
    ///
    /// Variables follow the pattern `{PREFIX}{FIELD_NAME}` with the field
    /// name uppercased, e.g. `ERRWRAP_INDENT` for field `indent` and prefix
    /// `ERRWRAP_`.
    fn from_env(prefix: &str) -> Result<Self>;

    /// Merge another configuration into this one
    ///
    /// Values from `other` take precedence. Returns self for chaining.
    fn merge(&mut self, other: Self) -> &mut Self;

    /// Create and validate the default configuration
    fn build() -> Result<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Start from defaults, apply the environment, then validate
    fn from_env_with_defaults(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::from_env(prefix)?);
        config.validate()?;
        Ok(config)
    }
}
