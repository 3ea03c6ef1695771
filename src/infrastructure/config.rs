use crate::domain::{config::CloudConfig, error::{CloudError, CloudResult}};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = ".cloudbit";
const CONFIG_FILE: &str = "config.toml";

/// Configuration manager
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> CloudResult<Self> {
        let global_config_path = Self::get_global_config_path()?;
        let project_config_path = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_project_config_path(&dir));

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Create a manager with explicit paths
    pub fn with_paths(global_config_path: PathBuf, project_config_path: Option<PathBuf>) -> Self {
        Self {
            global_config_path,
            project_config_path,
        }
    }

    /// Load configuration from files
    pub fn load_config(&self) -> CloudResult<CloudConfig> {
        // Start with default configuration
        let mut config = CloudConfig::default();

        if self.global_config_path.exists() {
            config = self.load_config_from_path(&self.global_config_path)?;
            debug!("Loaded global config from {}", self.global_config_path.display());
        }

        // Project configuration overrides output settings and the snapshot
        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                let project_config = self.load_config_from_path(project_path)?;
                config.output = project_config.output;
                if project_config.global.snapshot.is_some() {
                    config.global.snapshot = project_config.global.snapshot;
                }
                debug!("Merged project config from {}", project_path.display());
            }
        }

        Ok(config)
    }

    /// Get global configuration path
    fn get_global_config_path() -> CloudResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CloudError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join("cloudbit").join(CONFIG_FILE))
    }

    /// Find project configuration path by walking up from `start`
    pub fn find_project_config_path(start: &Path) -> Option<PathBuf> {
        let mut path = start;

        loop {
            let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    /// Load configuration from specific path.
    ///
    /// A relative snapshot path is resolved against the directory that owns
    /// the configuration (the project root for `.cloudbit/config.toml`).
    pub fn load_config_from_path(&self, path: &Path) -> CloudResult<CloudConfig> {
        let content = fs::read_to_string(path).map_err(|e| CloudError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let mut config: CloudConfig = toml::from_str(&content).map_err(|e| CloudError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        if let Some(snapshot) = &config.global.snapshot {
            if snapshot.is_relative() {
                let base = config_base_dir(path);
                config.global.snapshot = Some(base.join(snapshot));
            }
        }

        Ok(config)
    }

    /// Save configuration to specific path
    pub fn save_config_to_path(&self, path: &Path, config: &CloudConfig) -> CloudResult<()> {
        let content = toml::to_string_pretty(config).map_err(|e| CloudError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CloudError::Config {
                message: format!("Failed to create config directory: {}", e),
            })?;
        }

        fs::write(path, content).map_err(|e| CloudError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })
    }

    /// Create default project configuration below `path`
    pub fn init_project_config(&self, path: &Path) -> CloudResult<PathBuf> {
        let config_file = path.join(CONFIG_DIR).join(CONFIG_FILE);

        if config_file.exists() {
            return Err(CloudError::Config {
                message: "Project configuration already exists".to_string(),
            });
        }

        self.save_config_to_path(&config_file, &CloudConfig::default())?;
        Ok(config_file)
    }

    /// Get the current project config path (if any)
    pub fn get_project_config_path(&self) -> Option<&PathBuf> {
        self.project_config_path.as_ref()
    }

    /// Get the global config path
    pub fn get_global_config_path_ref(&self) -> &PathBuf {
        &self.global_config_path
    }
}

/// Directory relative paths in a config file are resolved against
fn config_base_dir(config_path: &Path) -> PathBuf {
    let dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    match dir.file_name() {
        Some(name) if name == CONFIG_DIR => dir.parent().unwrap_or(dir).to_path_buf(),
        _ => dir.to_path_buf(),
    }
}
