//! Typed service configuration loading.
//!
//! [`config::Config::load`] reads a YAML file into a validated, immutable
//! record. [`must`] holds the helpers that escalate resource-release failures.

pub mod config;
pub mod must;

pub use config::{Config, ConfigError, LogLevel};
pub use must::{ResourceReleaseFault, assert_clean, check_release};
