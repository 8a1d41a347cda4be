//! Environment variable loading
//!
//! Every helper treats an unset variable as `None` and reports malformed
//! values as [`ErrwrapError::Config`].

use crate::{ErrwrapError, Result};
use std::env;
use std::str::FromStr;

/// Read an environment variable
///
/// * `Ok(Some(value))` if the variable is set
/// * `Ok(None)` if it is not set
/// * `Err` if it is set but not valid UTF-8
pub fn get_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ErrwrapError::Config(format!(
            "{} contains invalid UTF-8",
            key
        ))),
    }
}

/// Read and parse an environment variable
///
/// ```rust,ignore
/// let indent: Option<usize> = get_env_parse("ERRWRAP_INDENT")?;
/// ```
pub fn get_env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(val) = get_env(key)? else {
        return Ok(None);
    };

    val.parse::<T>()
        .map(Some)
        .map_err(|e| ErrwrapError::Config(format!("cannot parse {}={:?}: {}", key, val, e)))
}

/// Read an environment variable, falling back to `default` when unset
pub fn get_env_or(key: &str, default: impl Into<String>) -> Result<String> {
    Ok(get_env(key)?.unwrap_or_else(|| default.into()))
}

/// Read and parse an environment variable, falling back to `default` when unset
///
/// A value that is set but fails to parse is still an error.
pub fn get_env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(get_env_parse(key)?.unwrap_or(default))
}

/// Read a boolean environment variable
///
/// Accepts `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`, case-insensitive.
pub fn get_env_bool(key: &str) -> Result<Option<bool>> {
    let Some(val) = get_env(key)? else {
        return Ok(None);
    };

    match val.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(ErrwrapError::Config(format!(
            "invalid boolean for {}: {}",
            key, val
        ))),
    }
}

/// Build a prefixed environment variable name
///
/// `build_env_key("ERRWRAP_", "max_depth")` gives `"ERRWRAP_MAX_DEPTH"`.
pub fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}
