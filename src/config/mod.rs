mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    load_from(
        env::var("CONFIG_PATH").ok(),
        Path::new(DEFAULT_CONFIG_PATH),
        env::var("ASK_SERVER_URL").ok(),
    )
    .await
}

/// Reads the YAML file at `config_path` and applies the server URL override.
///
/// Without an explicit path the file at `default_path` is read if it exists,
/// otherwise built-in defaults apply. An explicit path that cannot be read is
/// an error.
pub async fn load_from(
    config_path: Option<String>,
    default_path: &Path,
    server_url: Option<String>,
) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => read_file(Path::new(&path)).await?,
        None if default_path.exists() => read_file(default_path).await?,
        None => {
            debug!("No {} found, using built-in defaults", default_path.display());
            Config::default()
        }
    };

    if let Some(url) = server_url.filter(|url| !url.trim().is_empty()) {
        debug!("Server URL overridden from environment: {}", url);
        config.client.base_url = url;
    }

    validate(&config)?;
    Ok(config)
}

async fn read_file(path: &Path) -> Result<Config> {
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    let base_url = &config.client.base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(Error::config(format!(
            "client.base_url must be an http(s) URL, got '{}'",
            base_url
        )));
    }
    if !config.client.ask_path.starts_with('/') {
        return Err(Error::config(format!(
            "client.ask_path must start with '/', got '{}'",
            config.client.ask_path
        )));
    }
    if config.client.timeout_ms == Some(0) {
        return Err(Error::config("client.timeout_ms must be positive"));
    }
    Ok(())
}
