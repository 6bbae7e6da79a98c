//! Frontend configuration.
//!
//! The browser has no file system to read `config.toml` from, so the default
//! configuration is embedded in the bundle and parsed once on first use.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Scheme, host and port of the products service
    pub base_url: String,
    /// Path of the product collection resource
    pub products_path: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5013"
products_path = "/api/Products"
"#;

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5013".to_string(),
                products_path: "/api/Products".to_string(),
            },
        }
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| match load_config() {
    Ok(config) => {
        log::debug!("Products API at {}{}", config.api.base_url, config.api.products_path);
        config
    }
    Err(e) => {
        log::error!("Invalid embedded config, using defaults: {}", e);
        Config::default()
    }
});

/// Parse the embedded configuration
pub fn load_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Process-wide configuration
pub fn config() -> &'static Config {
    &CONFIG
}
