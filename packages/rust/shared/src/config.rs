//! Application configuration for Linkfolio.
//!
//! User config lives at `~/.linkfolio/linkfolio.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "linkfolio.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".linkfolio";

// ---------------------------------------------------------------------------
// Config structs (matching linkfolio.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input and output locations.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the unpacked LinkedIn export CSVs.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Path the assembled portfolio document is written to.
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            output_file: default_output_file(),
        }
    }
}

fn default_export_dir() -> String {
    "data/linkedin".into()
}
fn default_output_file() -> String {
    "public/data/linkedin-data.json".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.linkfolio/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| PortfolioError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.linkfolio/linkfolio.toml`).
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
    let content = std::fs::read_to_string(path).map_err(|e| PortfolioError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        PortfolioError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| PortfolioError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| PortfolioError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| PortfolioError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
