// src/config/euler_config.rs

use serde::{Deserialize, Serialize};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;
use crate::timing::{BudgetError, StoppingBudget};

/// Main toolkit configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EulerConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Stopping budget for performance measurements
    pub timing: TimingConfig,

    /// Result formatting
    pub output: OutputConfig,
}

/// Budget of a single measurement session, in seconds and runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// No new run starts once this much time has been spent (default: 1s)
    pub target_time_secs: Option<f64>,

    /// A session fails once it has taken longer than this (default: 4s)
    pub timeout_secs: Option<f64>,

    /// Maximum runs per session (default: 100)
    pub max_executions: Option<u32>,

    /// Defer releasing solver results until a session ends (default: true)
    pub pause_reclamation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places of millisecond timings (default: 3)
    pub ms_decimals: usize,
}

impl Default for EulerConfig {
    fn default() -> Self {
        EulerConfig {
            log_level: "info".to_string(),
            timing: TimingConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            target_time_secs: Some(1.0),
            timeout_secs: Some(4.0),
            max_executions: Some(100),
            pause_reclamation: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { ms_decimals: 3 }
    }
}

impl TimingConfig {
    pub fn budget(&self) -> Result<StoppingBudget, BudgetError> {
        StoppingBudget::from_secs(self.target_time_secs, self.timeout_secs, self.max_executions)
    }
}

impl EulerConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("euler.toml").exists() {
            builder = builder.add_source(File::with_name("euler.toml"));
        } else if Path::new("euler.yaml").exists() {
            builder = builder.add_source(File::with_name("euler.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let builder = Self::defaults()?.add_source(File::from(path));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("timing.target_time_secs", 1.0)?
            .set_default("timing.timeout_secs", 4.0)?
            .set_default("timing.max_executions", 100i64)?
            .set_default("timing.pause_reclamation", true)?
            .set_default("output.ms_decimals", 3i64)
    }

    // Environment variables override files, e.g. EULER_TIMING__TIMEOUT_SECS=10
    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config = builder
            .add_source(
                Environment::with_prefix("EULER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
