//! Configuration loading
//!
//! Reads `<config_dir>/subsel/config.toml` when present, then applies
//! environment overrides for the hosted-index settings. A missing file is
//! not an error; a malformed one is.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SubselError;

pub mod types;

pub use types::{Config, SearchConfig, UiConfig};

/// Load configuration, preferring an explicit path over the default
/// location.
pub fn load(path: Option<&Path>) -> Result<Config, SubselError> {
    let resolved = match path {
        Some(p) => Some(p.to_path_buf()),
        None => default_path(),
    };

    let mut config = match resolved {
        Some(p) if p.exists() => {
            let raw = fs::read_to_string(&p)?;
            toml::from_str(&raw)
                .map_err(|e| SubselError::Config(format!("{}: {e}", p.display())))?
        }
        _ => Config::default(),
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("subsel").join("config.toml"))
}

/// Environment beats the config file for the hosted-index settings, so
/// secrets can stay out of the file.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(host) = std::env::var("SUBSEL_SEARCH_HOST") {
        config.search.host = host;
    }
    if let Ok(app_id) = std::env::var("SUBSEL_SEARCH_APP_ID") {
        config.search.app_id = Some(app_id);
    }
    if let Ok(api_key) = std::env::var("SUBSEL_SEARCH_API_KEY") {
        config.search.api_key = Some(api_key);
    }
}
