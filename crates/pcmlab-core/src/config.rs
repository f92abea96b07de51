//! Configuration System
//!
//! YAML-based configuration for hosts embedding the PCM pipeline:
//!
//! - Limits (the duration ceiling the parameter validator enforces)
//! - Analog trace density (point floor, points per cycle)
//! - Logging (level, format, output options)
//!
//! ## Configuration Search Path
//!
//! Configuration is loaded from the first file found:
//! 1. Path specified via `PCMLAB_CONFIG` environment variable
//! 2. `./pcmlab.yaml` (current directory)
//! 3. `~/.config/pcmlab/config.yaml` (user config)
//!
//! ## Example Configuration
//!
//! ```yaml
//! limits:
//!   max_duration: 20.0
//!
//! trace:
//!   min_points: 500
//!   points_per_cycle: 200.0
//!
//! logging:
//!   level: debug
//!   format: compact
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::analog_trace::{AnalogTrace, MIN_TRACE_POINTS, POINTS_PER_CYCLE};
use crate::observe::logging::LogConfig;
use crate::params::MAX_DURATION;

/// Error type for configuration operations.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found
    NotFound(String),
    /// Failed to read configuration file
    ReadError(String),
    /// Failed to parse configuration
    ParseError(String),
    /// Invalid configuration value
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(msg) => write!(f, "config not found: {}", msg),
            ConfigError::ReadError(msg) => write!(f, "failed to read config: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "failed to parse config: {}", msg),
            ConfigError::ValidationError(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Bounds the validator applies to incoming parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Ceiling on `end_time - start_time`, in time units.
    pub max_duration: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_duration: MAX_DURATION,
        }
    }
}

/// Analog display-trace density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Minimum number of trace points.
    pub min_points: usize,
    /// Target points per signal cycle.
    pub points_per_cycle: f64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            min_points: MIN_TRACE_POINTS,
            points_per_cycle: POINTS_PER_CYCLE,
        }
    }
}

impl TraceConfig {
    /// Build the renderer this configuration describes.
    pub fn renderer(&self) -> AnalogTrace {
        AnalogTrace {
            min_points: self.min_points,
            points_per_cycle: self.points_per_cycle,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PcmConfig {
    pub limits: LimitsConfig,
    pub trace: TraceConfig,
    pub logging: LogConfig,
}

impl PcmConfig {
    /// Load configuration from the default search path.
    ///
    /// Search order:
    /// 1. `PCMLAB_CONFIG` environment variable
    /// 2. `./pcmlab.yaml`
    /// 3. `~/.config/pcmlab/config.yaml`
    ///
    /// Returns default config if no file is found.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("PCMLAB_CONFIG") {
            if Path::new(&path).exists() {
                return Self::load_from(Path::new(&path));
            }
        }

        for path in Self::config_search_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Check the configuration for values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.limits.max_duration > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "limits.max_duration must be positive, got {}",
                self.limits.max_duration
            )));
        }
        if self.trace.min_points < 2 {
            return Err(ConfigError::ValidationError(format!(
                "trace.min_points must be at least 2, got {}",
                self.trace.min_points
            )));
        }
        if !(self.trace.points_per_cycle > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "trace.points_per_cycle must be positive, got {}",
                self.trace.points_per_cycle
            )));
        }
        Ok(())
    }

    /// Get configuration search paths.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./pcmlab.yaml")];

        if let Some(dirs) = directories::ProjectDirs::from("", "", "pcmlab") {
            paths.push(dirs.config_dir().join("config.yaml"));
        }

        paths
    }
}
