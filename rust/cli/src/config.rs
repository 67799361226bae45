//! Layered configuration: defaults, then an optional TOML file named by
//! `ADVISOR_CONFIG`, then `ADVISOR_*` environment variables. Command-line
//! flags are applied last by the caller.

use advisor_ai::ENGINE_KINDS;
use serde::{Deserialize, Serialize};
use std::fs;

pub const ENV_CONFIG: &str = "ADVISOR_CONFIG";
pub const ENV_ENGINE: &str = "ADVISOR_ENGINE";
pub const ENV_SEED: &str = "ADVISOR_SEED";
pub const ENV_LOG: &str = "ADVISOR_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Decision engine kind (`simulated` or `passive`)
    pub engine: String,
    /// Seed for the simulated engine; random when absent
    pub seed: Option<u64>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: "simulated".into(),
            seed: None,
            log_level: "warn".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub engine: ValueSource,
    pub seed: ValueSource,
    pub log_level: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            engine: ValueSource::Default,
            seed: ValueSource::Default,
            log_level: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Apply command-line overrides on top of the resolved values.
    pub fn with_overrides(
        mut self,
        engine: Option<String>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(engine) = engine {
            self.config.engine = engine;
            self.sources.engine = ValueSource::Cli;
        }
        if let Some(seed) = seed {
            self.config.seed = Some(seed);
            self.sources.seed = ValueSource::Cli;
        }
        validate(&self.config)?;
        Ok(self)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolve configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolve configuration using `lookup` for environment variables.
pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(path) = var(ENV_CONFIG) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.engine {
            cfg.engine = v;
            sources.engine = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.log_level {
            cfg.log_level = v;
            sources.log_level = ValueSource::File;
        }
    }

    if let Some(engine) = var(ENV_ENGINE) {
        cfg.engine = engine;
        sources.engine = ValueSource::Env;
    }
    if let Some(seed) = var(ENV_SEED) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed '{}'", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(level) = var(ENV_LOG) {
        cfg.log_level = level;
        sources.log_level = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    engine: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    log_level: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !ENGINE_KINDS.contains(&cfg.engine.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: engine must be one of {}, got '{}'",
            ENGINE_KINDS.join(", "),
            cfg.engine
        )));
    }
    Ok(())
}
