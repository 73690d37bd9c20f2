mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    // The config file is optional: every field has a default.
    let mut config: Config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => serde_yaml::from_str(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(e) => return Err(e.into()),
    };

    // PORT takes precedence over the config file
    if let Ok(port) = env::var("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(config)
}
