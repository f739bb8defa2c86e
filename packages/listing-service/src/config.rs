use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use dotenvy::dotenv;

/// Application configuration read from command-line flags, falling back to
/// environment variables (and a `.env` file when present).
#[derive(Debug, Clone, Parser)]
#[command(name = "listing-service", about = "Creates and lists rent/sale listings")]
pub struct Config {
    /// Port to serve HTTP on
    #[arg(long, env = "PORT", default_value_t = 6000)]
    pub port: u16,

    /// Verbose logging for the service's own modules
    #[arg(long, env = "DEBUG", default_value_t = true, action = ArgAction::Set)]
    pub debug: bool,

    /// NATS server the creation events are published to
    #[arg(long, env = "NATS_URL", default_value = "nats://localhost:4222")]
    pub nats_url: String,

    /// SQLite database holding the listings table
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://listings.db?mode=rwc")]
    pub database_url: String,
}

impl Config {
    /// Load configuration from the process arguments and environment
    pub fn load() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::try_parse().context("Invalid command-line options")
    }

    /// Default `EnvFilter` directives when `RUST_LOG` is not set
    pub fn log_directives(&self) -> &'static str {
        if self.debug {
            "info,listing_core=debug,listing_service=debug,sqlx=warn"
        } else {
            "info,sqlx=warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_override_defaults() {
        let config = Config::try_parse_from([
            "listing-service",
            "--port",
            "7001",
            "--debug",
            "false",
            "--nats-url",
            "nats://bus:4222",
            "--database-url",
            "sqlite::memory:",
        ])
        .unwrap();

        assert_eq!(config.port, 7001);
        assert!(!config.debug);
        assert_eq!(config.nats_url, "nats://bus:4222");
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let result = Config::try_parse_from(["listing-service", "--port", "six-thousand"]);
        assert!(result.is_err());
    }

    #[test]
    fn debug_controls_log_directives() {
        let mut config = Config::try_parse_from(["listing-service", "--debug", "true"]).unwrap();
        assert!(config.log_directives().contains("listing_core=debug"));

        config.debug = false;
        assert!(!config.log_directives().contains("listing_core=debug"));
    }
}
