//! Server configuration from command-line arguments and environment.

use std::net::SocketAddr;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

/// Default listen address.
pub const DEFAULT_BIND: &str = "0.0.0.0:8081";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output (development)
    #[default]
    Pretty,
    /// JSON structured logging (production)
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "receipt-points", about = "Receipt points HTTP service", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "RECEIPT_POINTS_BIND",
        value_name = "ADDR",
        default_value = DEFAULT_BIND,
        help = "Address the HTTP server listens on"
    )]
    pub bind: SocketAddr,

    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty,
        help = "Log output format"
    )]
    pub log_format: LogFormat,
}

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Build the runtime configuration from parsed arguments.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self {
            bind: args.bind,
            log_format: args.log_format,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.bind.ip().is_multicast() {
            bail!("bind address {} is a multicast address", self.bind);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8081)),
            log_format: LogFormat::default(),
        }
    }
}
