//! Declared schema of the config file.
//!
//! Keys not listed here are ignored when parsing.

use serde::Deserialize;

/// Type a value must have after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form string.
    Text,
    /// One of the [`LogLevel`](super::LogLevel) names.
    LogLevel,
}

/// A key accepted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key as written in YAML.
    pub key: &'static str,
    pub kind: FieldKind,
    /// Whether an absent or blank value fails validation.
    pub required: bool,
}

/// Every key the loader reads, in file order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "environment", kind: FieldKind::Text, required: true },
    FieldSpec { key: "log_level", kind: FieldKind::LogLevel, required: true },
    FieldSpec { key: "app_name", kind: FieldKind::Text, required: false },
    FieldSpec { key: "version", kind: FieldKind::Text, required: false },
];

/// Values as parsed, before validation.
///
/// Every field defaults to `None` so missing and null keys reach validation
/// instead of failing the parse.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawConfig {
    pub environment: Option<String>,
    pub log_level: Option<String>,
    pub app_name: Option<String>,
    pub version: Option<String>,
}

impl RawConfig {
    /// Non-blank value of a schema key.
    pub fn value(&self, key: &str) -> Option<&str> {
        let value = match key {
            "environment" => self.environment.as_deref(),
            "log_level" => self.log_level.as_deref(),
            "app_name" => self.app_name.as_deref(),
            "version" => self.version.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.trim().is_empty())
    }
}
