use crate::domain::{
    config::BoardComConfig,
    error::{BoardComError, BoardComResult},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> BoardComResult<Self> {
        let global_config_path = Self::get_global_config_path()?;
        let project_config_path = Self::find_project_config_path();

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Load configuration from files
    pub fn load_config(&self) -> BoardComResult<BoardComConfig> {
        // Start with default configuration
        let mut config = BoardComConfig::default();

        // Load global configuration if exists
        if self.global_config_path.exists() {
            let global_config = self.load_config_from_path(&self.global_config_path)?;
            config.global = global_config.global;
            config.boards = global_config.boards;
        }

        // Load and merge project configuration if exists
        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                let project_config = self.load_config_from_path(project_path)?;
                // Project board profiles extend the global ones
                config.boards.extend(project_config.boards);
            }
        }

        Ok(config)
    }

    /// Get global configuration path
    fn get_global_config_path() -> BoardComResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| BoardComError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join("boardcom").join("config.toml"))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(".boardcom").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> BoardComResult<BoardComConfig> {
        let content = fs::read_to_string(path).map_err(|e| BoardComError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| BoardComError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Save configuration to specific path
    pub fn save_config_to_path(&self, path: &Path, config: &BoardComConfig) -> BoardComResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BoardComError::Config {
                message: format!("Failed to create config directory: {}", e),
            })?;
        }

        let content = toml::to_string_pretty(config).map_err(|e| BoardComError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, content).map_err(|e| BoardComError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })
    }

    /// Create default project configuration with an example board profile
    pub fn init_project_config(&self, path: &Path) -> BoardComResult<()> {
        let config_dir = path.join(".boardcom");
        let config_file = config_dir.join("config.toml");

        if config_file.exists() {
            return Err(BoardComError::Config {
                message: "Project configuration already exists".to_string(),
            });
        }

        fs::create_dir_all(&config_dir).map_err(|e| BoardComError::Config {
            message: format!("Failed to create .boardcom directory: {}", e),
        })?;

        let default_config = BoardComConfig {
            global: crate::domain::config::GlobalConfig::default(),
            boards: vec![crate::domain::config::BoardConfig {
                name: "example_board".to_string(),
                description: "Example bring-up board".to_string(),
                base_address: 0x4000_0000,
                monitor_cmd: "monitor".to_string(),
                scan_cmd: "./saveScanData".to_string(),
            }],
        };

        self.save_config_to_path(&config_file, &default_config)?;

        Ok(())
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
