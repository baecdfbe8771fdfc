//! Application configuration for metaparser.
//!
//! User config lives at `~/.metaparser/metaparser.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MetaparserError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "metaparser.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".metaparser";

/// Bodies at or above this size are rejected (10 MiB).
pub const DEFAULT_MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Config structs (matching metaparser.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP fetch settings.
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// `[fetch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Size cap for response bodies.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: u64,

    /// Maximum number of redirects to follow.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_body_bytes: default_max_body_bytes(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
fn default_max_body_bytes() -> u64 {
    DEFAULT_MAX_BODY_BYTES
}
fn default_max_redirects() -> usize {
    10
}
fn default_user_agent() -> String {
    concat!("metaparser/", env!("CARGO_PKG_VERSION")).into()
}

impl FetchConfig {
    /// Reject values that would make every fetch fail.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(MetaparserError::config("fetch.timeout_secs must be positive"));
        }
        if self.max_body_bytes == 0 {
            return Err(MetaparserError::config(
                "fetch.max_body_bytes must be positive",
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.metaparser/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| MetaparserError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.metaparser/metaparser.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| MetaparserError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        MetaparserError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    config.fetch.validate()?;
    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| MetaparserError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| MetaparserError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| MetaparserError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
