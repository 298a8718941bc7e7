use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: &str = "127.0.0.1";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    /// Screen fixture served when no platform service is attached
    pub fixture_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            fixture_path: env::var_os("BRIDGE_FIXTURE")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid HOST address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            fixture_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loopback() {
        let addr = Config::default().socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_invalid_host() {
        let config = Config {
            host: "not an address".to_string(),
            ..Default::default()
        };
        assert!(config.socket_addr().is_err());
    }
}
