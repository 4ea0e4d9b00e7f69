use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::warn;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigOutputFormat {
    #[serde(alias = "md")]
    Markdown,
    Json,
    Text,
    Table,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) projects_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) output: Option<ConfigOutputFormat>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) max_messages: Option<usize>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    /// First readable config file found, or defaults. A file that fails to
    /// parse is reported and the search moves on.
    pub(crate) fn load(home: Option<&Path>) -> Self {
        for path in Self::get_config_paths(home, dirs::config_dir()) {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => warn(format!("Failed to parse {}: {}", path.display(), e)),
                }
            }
        }

        Self::default()
    }

    fn get_config_paths(home: Option<&Path>, config_dir: Option<PathBuf>) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/ccsummary/config.toml (Linux/cross-platform)
        if let Some(home) = home {
            paths.push(home.join(".config").join("ccsummary").join("config.toml"));
        }

        // 2. Platform config dir (macOS: ~/Library/Application Support/ccsummary/config.toml)
        if let Some(config_dir) = config_dir {
            let platform_path = config_dir.join("ccsummary").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.ccsummary.toml
        if let Some(home) = home {
            paths.push(home.join(".ccsummary.toml"));
        }

        paths
    }
}
