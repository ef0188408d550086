//! Server configuration
//!
//! Loaded once at startup from TOML. Every field has a default, so an empty
//! file (or no file at all) yields a working server.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "SYSMON_CONFIG_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {0} does not exist")]
    Missing(PathBuf),

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cpu: CpuConfig,
    #[serde(default)]
    pub processes: ProcessConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub gpu: GpuConfig,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuConfig {
    /// Window over which CPU usage is sampled
    #[serde(default = "default_sample_window_ms")]
    pub sample_window_ms: u64,
}

fn default_sample_window_ms() -> u64 {
    1000
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            sample_window_ms: default_sample_window_ms(),
        }
    }
}

impl CpuConfig {
    pub fn sample_window(&self) -> Duration {
        Duration::from_millis(self.sample_window_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Entries returned by `list_processes` when no positive limit is given
    #[serde(default = "default_process_limit")]
    pub default_limit: usize,
}

fn default_process_limit() -> usize {
    5
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            default_limit: default_process_limit(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Confine `list_files` to this directory tree (unrestricted when unset)
    #[serde(default)]
    pub root: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuConfig {
    /// Diagnostic utility run by `get_gpu_usage`
    #[serde(default = "default_gpu_command")]
    pub command: String,
    #[serde(default = "default_gpu_args")]
    pub args: Vec<String>,
}

fn default_gpu_command() -> String {
    if cfg!(target_os = "macos") {
        "system_profiler".to_string()
    } else {
        "nvidia-smi".to_string()
    }
}

fn default_gpu_args() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["SPDisplaysDataType".to_string()]
    } else {
        Vec::new()
    }
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            command: default_gpu_command(),
            args: default_gpu_args(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Upper bound for a single tool invocation; 0 disables it
    #[serde(default = "default_tool_secs")]
    pub tool_secs: u64,
}

fn default_tool_secs() -> u64 {
    30
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            tool_secs: default_tool_secs(),
        }
    }
}

impl TimeoutConfig {
    pub fn tool_timeout(&self) -> Option<Duration> {
        (self.tool_secs > 0).then(|| Duration::from_secs(self.tool_secs))
    }
}

impl Config {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from standard locations
    ///
    /// Searched in order:
    /// 1. `SYSMON_CONFIG_PATH` env var (errors here are fatal)
    /// 2. `~/.binks/sysmon.toml`
    /// 3. `./sysmon-mcp.toml`
    /// 4. `$XDG_CONFIG_HOME/sysmon-mcp/config.toml`
    /// 5. `~/.sysmon-mcp.toml`
    /// 6. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
            let path = PathBuf::from(env_path);
            let config = Self::from_file(&path)?;
            tracing::info!("Loaded config from {}={}", CONFIG_PATH_ENV, path.display());
            return Ok(config);
        }

        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => tracing::warn!("Skipping config: {}", e),
            }
        }

        tracing::info!("Using default configuration");
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".binks").join("sysmon.toml"));
        }

        paths.push(PathBuf::from("sysmon-mcp.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("sysmon-mcp").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".sysmon-mcp.toml"));
        }

        paths
    }
}
