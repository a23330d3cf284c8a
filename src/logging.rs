// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels and output formats for the assistant process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 UniConnect

//! Structured logging configuration with environment-driven setup
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the binary's job via [`init_logging`].

use anyhow::Result;
use std::env;
use tracing::info;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable selecting the log output format
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Build a logging configuration from the environment
    ///
    /// `RUST_LOG` supplies the filter (default `info`); `LOG_FORMAT`
    /// selects `json`, `pretty`, or `compact` output.
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = match env::var(LOG_FORMAT_ENV)
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
        Self { level, format }
    }
}

/// Install the global tracing subscriber for this process
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => {
            let json_layer = fmt::layer().with_target(true).json();
            registry.with(json_layer).try_init()?;
        }
        LogFormat::Pretty => {
            let pretty_layer = fmt::layer().with_target(true);
            registry.with(pretty_layer).try_init()?;
        }
        LogFormat::Compact => {
            let compact_layer = fmt::layer().compact().with_target(false);
            registry.with(compact_layer).try_init()?;
        }
    }

    info!(format = ?config.format, level = %config.level, "Logging initialized");
    Ok(())
}
