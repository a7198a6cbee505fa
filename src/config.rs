//! Configuration management for auto-launcher.
//!
//! Supports layered configuration: defaults → project → user → explicit file → env

use crate::domain::SkipConfig;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "AUTO_LAUNCHER_CONFIG_PATH";

/// Project-local configuration file name
pub const PROJECT_CONFIG_FILE: &str = ".auto-launcher.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub run: RunConfig,
}

impl LauncherConfig {
    /// Load configuration with hierarchy: defaults → project → user → explicit file → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File, FileFormat};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            File::from_str(include_str!("../default_config.toml"), FileFormat::Toml)
                .required(false),
        );

        // 2. Project-specific config (.auto-launcher.toml in project root)
        if let Some(root) = project_root {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/auto-launcher/config.toml)
        if let Some(dirs) = directories::ProjectDirs::from("com", "auto-launcher", "auto-launcher")
        {
            let user_config = dirs.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Explicit file named by AUTO_LAUNCHER_CONFIG_PATH
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(ConfigError::NotFound(path));
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        // 5. Environment variables (AUTO_LAUNCHER__*)
        builder = builder.add_source(
            Environment::with_prefix("AUTO_LAUNCHER")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("discovery.skip_paths")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration, falling back to defaults when any layer is broken
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        match Self::load(project_root) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("error loading config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Directory names pruned from discovery
    pub fn skip_config(&self) -> SkipConfig {
        SkipConfig::new(self.discovery.skip_paths.iter().cloned())
    }
}

/// Discovery-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directories where auto-launcher will not search for executables
    #[serde(default = "default_skip_paths")]
    pub skip_paths: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            skip_paths: default_skip_paths(),
        }
    }
}

fn default_skip_paths() -> Vec<String> {
    [".git", "test", "target", ".ccls"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Selection list configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable vim-style navigation (j/k)
    #[serde(default = "default_vim_navigation")]
    pub vim_navigation: bool,
    /// Width of the selection list in columns
    #[serde(default = "default_width")]
    pub width: u16,
    /// Height of the selection list in rows
    #[serde(default = "default_height")]
    pub height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            vim_navigation: default_vim_navigation(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_vim_navigation() -> bool {
    true
}

fn default_width() -> u16 {
    50
}

fn default_height() -> u16 {
    10
}

/// Run file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Script the resolved command is persisted to
    #[serde(default = "default_run_file")]
    pub run_file: PathBuf,
    /// Editor used by `auto-launcher edit`
    #[serde(default = "default_editor")]
    pub editor: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            run_file: default_run_file(),
            editor: default_editor(),
        }
    }
}

fn default_run_file() -> PathBuf {
    PathBuf::from(".run")
}

fn default_editor() -> String {
    "vim".to_string()
}
