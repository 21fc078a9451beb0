use config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::settings::EngineConfig;
use crate::validation::validate;

/// Environment prefix used by the shipped binaries (`MEDICOST__SERVER__PORT=9000`)
pub const DEFAULT_ENV_PREFIX: &str = "MEDICOST";

#[derive(Debug, Clone)]
enum Source {
    File { path: PathBuf, required: bool },
    Yaml(String),
}

/// Layered configuration loader.
///
/// Sources are applied in the order they are added, then environment
/// variables; anything left unset keeps its built-in default.
#[derive(Debug, Clone)]
pub struct ConfigEngine {
    sources: Vec<Source>,
    env_prefix: Option<String>,
}

impl ConfigEngine {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_string()),
        }
    }

    /// Add a YAML/TOML/JSON file, format inferred from the extension
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.sources.push(Source::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Add inline YAML
    pub fn with_yaml(mut self, yaml: impl Into<String>) -> Self {
        self.sources.push(Source::Yaml(yaml.into()));
        self
    }

    /// Override the environment prefix, or pass `None` to ignore the environment
    pub fn with_env_prefix(mut self, prefix: Option<&str>) -> Self {
        self.env_prefix = prefix.map(str::to_string);
        self
    }

    /// Merge all sources and validate the result
    pub fn load(&self) -> Result<EngineConfig> {
        let mut builder = Config::builder();

        for source in &self.sources {
            builder = match source {
                Source::File { path, required } => {
                    if *required && !path.exists() {
                        return Err(ConfigError::SourceNotFound(path.display().to_string()));
                    }
                    tracing::debug!(path = %path.display(), "Loading configuration file");
                    builder.add_source(File::from(path.as_path()).required(*required))
                }
                Source::Yaml(yaml) => builder.add_source(File::from_str(yaml, FileFormat::Yaml)),
            };
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let config: EngineConfig = builder.build()?.try_deserialize()?;
        validate(&config)?;

        tracing::debug!(
            port = config.server.port,
            procedures = config.pricing.procedures.len(),
            departments = config.pricing.departments.len(),
            strict_catalog = config.estimator.strict_catalog,
            "Configuration loaded"
        );

        Ok(config)
    }
}

impl Default for ConfigEngine {
    fn default() -> Self {
        Self::new()
    }
}
