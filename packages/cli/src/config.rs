use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "puckblocks.config.json";

/// puckblocks configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Where migrated documents and rendered pages are written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Pretty print HTML output
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Title of full rendered pages
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_title() -> String {
    "puckblocks".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Output directory, `override_dir` taking precedence over the config
    pub fn get_out_dir(&self, cwd: &str, override_dir: Option<&str>) -> PathBuf {
        Path::new(cwd).join(override_dir.unwrap_or(&self.out_dir))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            pretty: default_pretty(),
            title: default_title(),
        }
    }
}
