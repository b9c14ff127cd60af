//! Server configuration.
//!
//! Every setting can come from a command-line flag or an environment variable; flags win.
//! Values are checked with `garde` after parsing.

use clap::Parser;
use garde::Validate;

use crate::model::Violations;

#[derive(Debug, Clone, Parser, Validate)]
#[clap(about, version, name = "product-stock")]
pub struct ServerConfig {
    /// Address to listen on.
    #[clap(long, env = "STOCK_HOST", default_value = "127.0.0.1")]
    #[garde(length(min = 1))]
    pub host: String,

    /// Port to listen on.
    #[clap(long, env = "STOCK_PORT", default_value_t = 8080)]
    #[garde(range(min = 1))]
    pub port: u16,

    /// Number of HTTP worker threads.
    #[clap(long, env = "STOCK_WORKERS", default_value_t = 2)]
    #[garde(range(min = 1, max = 64))]
    pub workers: usize,

    /// Capacity of the record store's request channel.
    #[clap(long, env = "STOCK_STORE_BUFFER", default_value_t = 32)]
    #[garde(range(min = 1))]
    pub store_buffer: usize,

    /// Log filter used when RUST_LOG is not set.
    #[clap(long = "log", env = "STOCK_LOG", default_value = "info")]
    #[garde(length(min = 1))]
    pub log_filter: String,
}

impl ServerConfig {
    /// Parses the process arguments and environment. Exits on `--help` or a parse error.
    pub fn load() -> anyhow::Result<Self> {
        Self::checked(Self::parse())
    }

    /// Parses an explicit argument list; the first item is the program name.
    pub fn from_args<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::checked(Self::try_parse_from(args)?)
    }

    fn checked(config: Self) -> anyhow::Result<Self> {
        config
            .validate()
            .map_err(|report| anyhow::anyhow!("Invalid configuration: {}", Violations::from(report)))?;
        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_args(["product-stock"]).unwrap();
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(config.workers, 2);
        assert_eq!(config.store_buffer, 32);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::from_args([
            "product-stock",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--workers",
            "4",
            "--log",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 9000));
        assert_eq!(config.workers, 4);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let err = ServerConfig::from_args(["product-stock", "--port", "0"]).unwrap_err();
        assert!(err.to_string().contains("port"));

        let err = ServerConfig::from_args(["product-stock", "--workers", "65"]).unwrap_err();
        assert!(err.to_string().contains("workers"));

        assert!(ServerConfig::from_args(["product-stock", "--store-buffer", "0"]).is_err());
    }
}
