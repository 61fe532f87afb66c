//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Settings live at `~/.inspector/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The actions file is separate: it is the backend's own configuration
//! (YAML or JSON) and only its `actions` section is read.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::schema::ActionsConfig;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InspectorConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub actions_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SERVER_URL: &str = "ws://localhost:3496/ws";

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub server_url: String,
    /// None = no actions file, the inspector shows no forms.
    pub actions_file: Option<PathBuf>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub actions: Option<PathBuf>,
}

/// Values read from the environment (after `.env` has been loaded).
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub url: Option<String>,
    pub actions: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("INSPECTOR_URL").ok(),
            actions: std::env::var("INSPECTOR_ACTIONS").ok(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Toml(toml::de::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    UnsupportedFormat(PathBuf),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "cannot read {}: {e}", path.display()),
            ConfigError::Toml(e) => write!(f, "config parse error: {e}"),
            ConfigError::Yaml(e) => write!(f, "actions file YAML error: {e}"),
            ConfigError::Json(e) => write!(f, "actions file JSON error: {e}"),
            ConfigError::UnsupportedFormat(path) => write!(
                f,
                "unsupported actions file {} (expected .yml, .yaml or .json)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.inspector/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".inspector").join("config.toml"))
}

/// Load settings from `~/.inspector/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `InspectorConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Toml`.
pub fn load_config() -> Result<InspectorConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(InspectorConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(InspectorConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::Io(path.clone(), e))?;
    let config: InspectorConfig = toml::from_str(&contents).map_err(ConfigError::Toml)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Inspector Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [server]
# url = "ws://localhost:3496/ws"     # Or set INSPECTOR_URL env var

# [general]
# actions_file = "backent.yml"       # Or set INSPECTOR_ACTIONS; .yml, .yaml or .json
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

/// Read the `actions` section of a backend configuration file.
///
/// The format is picked by extension: `.yml`/`.yaml` or `.json`.
pub fn load_actions(path: &Path) -> Result<ActionsConfig, ConfigError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let is_yaml = match extension.as_deref() {
        Some("yml" | "yaml") => true,
        Some("json") => false,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

    let config: ActionsConfig = if is_yaml {
        serde_yaml::from_str(&contents).map_err(ConfigError::Yaml)?
    } else {
        serde_json::from_str(&contents).map_err(ConfigError::Json)?
    };

    info!(
        "Loaded {} actions from {}",
        config.actions.len(),
        path.display()
    );
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &InspectorConfig, env: &EnvOverrides, cli: &CliOverrides) -> ResolvedConfig {
    // Server URL: CLI → env → config → default
    let server_url = cli
        .url
        .clone()
        .or_else(|| env.url.clone())
        .or_else(|| config.server.url.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    // Actions file: CLI → env → config → none
    let actions_file = cli
        .actions
        .clone()
        .or_else(|| env.actions.as_ref().map(PathBuf::from))
        .or_else(|| config.general.actions_file.as_ref().map(PathBuf::from));

    ResolvedConfig {
        server_url,
        actions_file,
    }
}
