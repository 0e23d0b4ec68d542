use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use svc_config::config::DEFAULT_CONFIG_PATH;
use svc_config::{Config, LogLevel, assert_clean};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable consulted when no `--config=` argument is given.
const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

fn init_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_tracing_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // With RUST_LOG set the filter does not depend on the config, so install
    // the subscriber early and keep the loader's own events
    let early_tracing = env::var_os("RUST_LOG").is_some();
    if early_tracing {
        init_tracing(LogLevel::Info);
    }

    let config_path = parse_config_path();
    let config = match Config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if !early_tracing {
        init_tracing(config.log_level());
    }
    info!(config = %config_path, environment = %config.environment(), "Config loaded");
    debug!(app_name = ?config.app_name(), version = ?config.version(), "Optional fields");

    let mut out = io::stdout().lock();
    let written = writeln!(out, "{} {}", config.environment(), config.log_level());
    assert_clean("write stdout", written);
    assert_clean("flush stdout", out.flush());

    ExitCode::SUCCESS
}
