//! Configuration for the Lexnet Server
//!
//! Settings are read from environment variables (a `.env` file is loaded
//! first by `main`). Invalid numeric values are logged and the default kept.

use lexnet_kb::ExplorerConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::{info, warn};

use crate::error::{ServerError, ServerResult};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host to bind to
    #[serde(default = "default_host")]
    pub bind_address: String,

    /// Path of the JSON lexicon loaded at startup
    pub lexicon_path: String,

    /// Prefix under which the explorer routes are mounted
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Bounds and timeout for explorer operations
    #[serde(default)]
    pub explorer: ExplorerConfig,
}

/// Log output settings, readable on their own so logging can start before
/// the rest of the configuration is validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON logs instead of pretty ones
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    pub fn load() -> Self {
        let lookup = |key: &str| env::var(key).ok();
        Self::from_lookup(&lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(filter) = lookup("LOG_FILTER") {
            config.filter = filter;
        }
        if let Some(json) = lookup("LOG_JSON") {
            config.json = json.eq_ignore_ascii_case("true") || json == "1";
        }
        config
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_port() -> u16 {
    8000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_log_filter() -> String {
    "info,lexnet_kb=info,lexnet_server=debug,tower_http=info".to_string()
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> ServerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Start with defaults
        let mut config = Self::default();

        if let Some(port) = lookup("SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            } else {
                warn!("Invalid SERVER_PORT value: {}", port);
            }
        }

        if let Some(host) = lookup("SERVER_HOST") {
            config.bind_address = host;
        }

        if let Some(path) = lookup("LEXICON_PATH") {
            config.lexicon_path = path;
        }

        if let Some(prefix) = lookup("API_PREFIX") {
            config.api_prefix = normalize_prefix(&prefix);
        }

        config.logging = LoggingConfig::from_lookup(&lookup);

        let explorer = &mut config.explorer;
        override_from(&lookup, "REQUEST_TIMEOUT_MS", &mut explorer.timeout_ms);
        override_from(&lookup, "EXPLORER_NEIGHBORHOOD_MAX_DEPTH", &mut explorer.neighborhood_max_depth);
        override_from(&lookup, "EXPLORER_NEIGHBORHOOD_DEFAULT_DEPTH", &mut explorer.neighborhood_default_depth);
        override_from(&lookup, "EXPLORER_NEIGHBORHOOD_MAX_LIMIT", &mut explorer.neighborhood_max_limit);
        override_from(&lookup, "EXPLORER_NEIGHBORHOOD_DEFAULT_LIMIT", &mut explorer.neighborhood_default_limit);
        override_from(&lookup, "EXPLORER_SUBTREE_MAX_DEPTH", &mut explorer.subtree_max_depth);
        override_from(&lookup, "EXPLORER_SUBTREE_DEFAULT_DEPTH", &mut explorer.subtree_default_depth);
        override_from(&lookup, "EXPLORER_SUBTREE_MAX_LIMIT", &mut explorer.subtree_max_limit);
        override_from(&lookup, "EXPLORER_SUBTREE_DEFAULT_LIMIT", &mut explorer.subtree_default_limit);
        override_from(&lookup, "EXPLORER_TREE_MAX_PATH_DEPTH", &mut explorer.tree_max_path_depth);
        override_from(&lookup, "EXPLORER_TREE_DEFAULT_PATH_DEPTH", &mut explorer.tree_default_path_depth);
        override_from(&lookup, "EXPLORER_TREE_NODE_CAP", &mut explorer.tree_node_cap);
        override_from(&lookup, "EXPLORER_MAX_HYPERNYM_PATHS", &mut explorer.max_hypernym_paths);
        override_from(&lookup, "EXPLORER_DEFINITION_PREVIEW_CHARS", &mut explorer.definition_preview_chars);

        // Validate required fields
        if config.lexicon_path.trim().is_empty() {
            return Err(ServerError::ConfigError(
                "LEXICON_PATH is required".to_string(),
            ));
        }

        if config.explorer.timeout_ms == 0 {
            warn!("REQUEST_TIMEOUT_MS is 0 - every explorer request will time out");
        }

        info!(
            lexicon_path = %config.lexicon_path,
            api_prefix = %config.api_prefix,
            "Loaded server configuration"
        );
        Ok(config)
    }

    /// Address the listener binds to
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_host(),
            lexicon_path: String::new(),
            api_prefix: default_api_prefix(),
            logging: LoggingConfig::default(),
            explorer: ExplorerConfig::default(),
        }
    }
}

fn override_from<F, T>(lookup: &F, key: &str, slot: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse::<T>() {
            Ok(value) => *slot = value,
            Err(_) => warn!("Invalid {} value: {}", key, raw),
        }
    }
}

/// `api` and `/api/` both become `/api`; an empty prefix mounts at the root.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
