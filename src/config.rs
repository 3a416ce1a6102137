use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "MULTI_LEVEL_ARGPARSE_CONFIG";

fn default_brew_path() -> String {
    "brew".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Executable used by `brewups`.
    #[serde(default = "default_brew_path")]
    pub brew_path: String,
    /// Log at debug level even without `--verbose`.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brew_path: default_brew_path(),
            verbose: false,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = home::home_dir().ok_or("Failed to get home directory")?;
        let config_dir = home.join(".config").join("multi-level-argparse");
        Ok(config_dir.join("config.json"))
    }

    pub fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::load_from(&Self::config_path()?)
    }

    /// Missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
