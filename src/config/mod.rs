//! Configuration loading and validation for the service entry point.
//!
//! Uses serde_yaml to load a flat YAML file into an immutable [`Config`].
//! See [`schema::FIELDS`] for the accepted keys.

mod error;
mod log_level;
pub mod schema;

pub use error::ConfigError;
pub use log_level::LogLevel;

use schema::{FIELDS, FieldKind, RawConfig};
use std::{fs::File, io::Read, path::Path};
use tracing::debug;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Validated service configuration.
///
/// Required: environment, log_level.
/// Optional: app_name, version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    environment: String,
    log_level: LogLevel,
    app_name: Option<String>,
    version: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The file handle is closed before this returns, on success and on error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let origin = path.display().to_string();

        let file = File::open(path).map_err(|error| ConfigError::SourceUnavailable {
            origin: origin.clone(),
            error,
        })?;

        Self::from_reader(file, &origin)
    }

    /// Load configuration from any byte source. `origin` names the source in
    /// errors and logs. The reader is consumed and dropped before returning.
    pub fn from_reader(mut reader: impl Read, origin: &str) -> Result<Self, ConfigError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|error| ConfigError::SourceUnavailable {
                origin: origin.to_string(),
                error,
            })?;
        drop(reader);

        debug!(origin, bytes = content.len(), "Read config source");
        Self::from_yaml_str(&content, origin)
    }

    /// Parse and validate already-read YAML text.
    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        // An empty or null document is an empty mapping
        let raw: RawConfig = if content.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str::<Option<RawConfig>>(content)
                .map_err(|error| ConfigError::MalformedSource {
                    origin: origin.to_string(),
                    error,
                })?
                .unwrap_or_default()
        };

        let config = Self::validate(raw)?;
        debug!(
            origin,
            environment = %config.environment,
            log_level = %config.log_level,
            "Config loaded"
        );
        Ok(config)
    }

    /// Validate parsed values and build the record.
    fn validate(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut log_level = None;
        for field in FIELDS {
            let Some(value) = raw.value(field.key) else {
                if field.required {
                    return Err(ConfigError::Validation(format!("{} is required", field.key)));
                }
                continue;
            };

            match field.kind {
                FieldKind::Text => {}
                FieldKind::LogLevel => {
                    let level = value.parse::<LogLevel>().map_err(|e| {
                        ConfigError::Validation(format!("{}: {}", field.key, e))
                    })?;
                    log_level = Some(level);
                }
            }
        }
        let log_level = log_level
            .ok_or_else(|| ConfigError::Validation("log_level is required".into()))?;

        let app_name = raw.value("app_name").map(str::to_string);
        let version = raw.value("version").map(str::to_string);

        Ok(Self {
            environment: raw.environment.unwrap_or_default(),
            log_level,
            app_name,
            version,
        })
    }

    /// Deployment tag such as "dev" or "production".
    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}
