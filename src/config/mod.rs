use std::{env, ffi::OsString, path::PathBuf};

/// File the ledger lives in when nothing else is configured, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "finance_data.json";
/// Overrides the ledger file location.
pub const DATA_FILE_ENV: &str = "FINANCE_TRACKER_DATA_FILE";
/// When set, the CLI reads menu choices from stdin instead of a line editor.
pub const SCRIPT_MODE_ENV: &str = "FINANCE_TRACKER_CLI_SCRIPT";

/// Runtime settings handed to storage and the CLI at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub script_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            script_mode: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(DATA_FILE_ENV).filter(|value| !value.is_empty()) {
            config.data_file = PathBuf::from(path);
        }
        config.script_mode = lookup(SCRIPT_MODE_ENV).is_some();
        config
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}
