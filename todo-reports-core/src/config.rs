//! Configuration management
//!
//! Settings are layered, later layers win:
//! 1. Built-in defaults
//! 2. An optional `settings.json`:
//! ```json
//! {
//!   "todosUrl": "https://json.medrocket.ru/todos",
//!   "usersUrl": "https://json.medrocket.ru/users",
//!   "outputDir": "tasks",
//!   "timeoutSecs": 30
//! }
//! ```
//! 3. `TODO_REPORTS_*` environment variables
//! 4. Explicit overrides (command line flags)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::adapters::http::DEFAULT_TIMEOUT_SECS;
use crate::domain::result::{Error, Result};
use crate::services::Endpoints;

pub const DEFAULT_TODOS_URL: &str = "https://json.medrocket.ru/todos";
pub const DEFAULT_USERS_URL: &str = "https://json.medrocket.ru/users";
pub const DEFAULT_OUTPUT_DIR: &str = "tasks";

/// Settings file looked up in the working directory when no path is given
pub const SETTINGS_FILE: &str = "settings.json";

pub const ENV_TODOS_URL: &str = "TODO_REPORTS_TODOS_URL";
pub const ENV_USERS_URL: &str = "TODO_REPORTS_USERS_URL";
pub const ENV_OUTPUT_DIR: &str = "TODO_REPORTS_OUTPUT_DIR";
pub const ENV_TIMEOUT_SECS: &str = "TODO_REPORTS_TIMEOUT_SECS";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    todos_url: Option<String>,
    #[serde(default)]
    users_url: Option<String>,
    #[serde(default)]
    output_dir: Option<PathBuf>,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

/// Values that replace whatever the file and environment said
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub todos_url: Option<String>,
    pub users_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Resolved configuration for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub todos_url: String,
    pub users_url: String,
    pub output_dir: PathBuf,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            todos_url: DEFAULT_TODOS_URL.to_string(),
            users_url: DEFAULT_USERS_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load config from a settings file and the process environment
    ///
    /// With `path = None` the file is `settings.json` in the working
    /// directory and may be absent. An explicitly given file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let raw = match path {
            Some(path) => read_settings(path)?,
            None => {
                let default_path = Path::new(SETTINGS_FILE);
                if default_path.exists() {
                    read_settings(default_path)?
                } else {
                    SettingsFile::default()
                }
            }
        };

        Self::resolve(raw, |key| std::env::var(key).ok())
    }

    /// Apply the file layer and then the environment layer to the defaults
    fn resolve(raw: SettingsFile, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = raw.todos_url {
            config.todos_url = url;
        }
        if let Some(url) = raw.users_url {
            config.users_url = url;
        }
        if let Some(dir) = raw.output_dir {
            config.output_dir = dir;
        }
        if let Some(secs) = raw.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(url) = env(ENV_TODOS_URL) {
            config.todos_url = url;
        }
        if let Some(url) = env(ENV_USERS_URL) {
            config.users_url = url;
        }
        if let Some(dir) = env(ENV_OUTPUT_DIR) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(secs) = env(ENV_TIMEOUT_SECS) {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                Error::config(format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(url) = overrides.todos_url {
            self.todos_url = url;
        }
        if let Some(url) = overrides.users_url {
            self.users_url = url;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Check that both endpoints are usable http(s) URLs
    pub fn validate(&self) -> Result<()> {
        for (label, value) in [("todos", &self.todos_url), ("users", &self.users_url)] {
            let parsed = Url::parse(value)
                .map_err(|e| Error::config(format!("Invalid {} URL '{}': {}", label, value, e)))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::config(format!(
                    "The {} URL must use http or https, got '{}'",
                    label, value
                )));
            }
        }

        if self.timeout.is_zero() {
            return Err(Error::config("Timeout must be at least one second"));
        }

        Ok(())
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            todos_url: self.todos_url.clone(),
            users_url: self.users_url.clone(),
        }
    }
}

fn read_settings(path: &Path) -> Result<SettingsFile> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::config(format!("Invalid settings in {}: {}", path.display(), e)))
}
