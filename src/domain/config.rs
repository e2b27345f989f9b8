use serde::{Deserialize, Serialize};

/// BoardCom configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardComConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
    /// Board profiles
    #[serde(default)]
    pub boards: Vec<BoardConfig>,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Timeout for a whole bus transaction in milliseconds (0 = unbounded)
    #[serde(default)]
    pub timeout_ms: u64,
    /// Echo each debugger command line before it runs
    #[serde(default)]
    pub echo_commands: bool,
}

/// Board profile: where the register window lives and which debugger
/// executables reach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Profile name
    pub name: String,
    /// Profile description
    #[serde(default)]
    pub description: String,
    /// Base address added to every read/write offset
    #[serde(default = "default_base_address")]
    pub base_address: u64,
    /// Memory monitor executable
    #[serde(default = "default_monitor_cmd")]
    pub monitor_cmd: String,
    /// Scan data retrieval executable
    #[serde(default = "default_scan_cmd")]
    pub scan_cmd: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_address() -> u64 {
    0x4000_0000
}

fn default_monitor_cmd() -> String {
    "monitor".to_string()
}

fn default_scan_cmd() -> String {
    "./saveScanData".to_string()
}

impl Default for BoardComConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            boards: Vec::new(),
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            timeout_ms: 0,
            echo_commands: false,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            description: String::new(),
            base_address: default_base_address(),
            monitor_cmd: default_monitor_cmd(),
            scan_cmd: default_scan_cmd(),
        }
    }
}
