//! Configuration management for the task list.
//!
//! Loads configuration from environment variables with sensible defaults.
//! The binary loads an optional `.env` file first.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Storage key of the item list
pub const DEFAULT_NAMESPACE: &str = "todos-javascript";
/// Directory holding the storage files
pub const DEFAULT_DATA_DIR: &str = ".todomvc";
/// Location shown when none is given
pub const DEFAULT_ROUTE: &str = "/all";
/// Log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "todomvc=info,todomvc_runtime=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Storage key the list is saved under (`TODOMVC_NAMESPACE`)
    pub namespace: String,
    /// Directory for the file storage backend (`TODOMVC_DATA_DIR`)
    pub data_dir: PathBuf,
    /// Initial location when none is given (`TODOMVC_DEFAULT_ROUTE`)
    pub default_route: String,
    /// Tracing filter directives (`RUST_LOG`)
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// unset or blank values
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            namespace: get("TODOMVC_NAMESPACE", DEFAULT_NAMESPACE),
            data_dir: PathBuf::from(get("TODOMVC_DATA_DIR", DEFAULT_DATA_DIR)),
            default_route: get("TODOMVC_DEFAULT_ROUTE", DEFAULT_ROUTE),
            log_filter: get("RUST_LOG", DEFAULT_LOG_FILTER),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
