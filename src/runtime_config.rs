//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for pattern compilation and URI
//! building.
//!
//! ## Environment Variables
//!
//! ### `BRRTPATH_BASE_URL`
//!
//! Prefix prepended to every URI produced by the builder, e.g.
//! `https://api.example.com`. A trailing `/` is trimmed. Default: empty, so
//! built URIs are root-relative paths.
//!
//! ### `BRRTPATH_PATTERN_CACHE`
//!
//! `off` (or `false`/`0`) disables the compiled pattern cache; every match
//! then compiles the route afresh. Default: enabled.
//!
//! ### `BRRTPATH_MAX_PLACEHOLDERS`
//!
//! Upper bound on placeholders per route template. Accepts decimal (`32`) or
//! hexadecimal (`0x20`). Templates over the bound fail to compile. Default: 32.
//!
//! ## Usage
//!
//! ```rust
//! use brrtpath::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Max placeholders: {}", config.max_placeholders);
//! ```

use std::env;

use crate::pattern::DEFAULT_MAX_PLACEHOLDERS;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Prefix for built URIs (default: empty)
    pub base_url: String,
    /// Whether compiled patterns are cached (default: true)
    pub pattern_cache: bool,
    /// Placeholder bound per template (default: 32)
    pub max_placeholders: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            pattern_cache: true,
            max_placeholders: DEFAULT_MAX_PLACEHOLDERS,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let base_url = lookup("BRRTPATH_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let pattern_cache = match lookup("BRRTPATH_PATTERN_CACHE") {
            Some(val) => !matches!(
                val.trim().to_ascii_lowercase().as_str(),
                "off" | "false" | "0"
            ),
            None => defaults.pattern_cache,
        };
        let max_placeholders = lookup("BRRTPATH_MAX_PLACEHOLDERS")
            .and_then(|val| parse_count(val.trim()))
            .unwrap_or(defaults.max_placeholders);

        RuntimeConfig {
            base_url,
            pattern_cache,
            max_placeholders,
        }
    }
}

fn parse_count(val: &str) -> Option<usize> {
    match val.strip_prefix("0x") {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    }
}
