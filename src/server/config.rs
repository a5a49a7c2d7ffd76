//! Server configuration.
//!
//! Defaults are hardcoded (the original system has no configuration
//! surface); the environment can override the database path and listen
//! address for deployments and tests.

use std::env;

use tracing::warn;

/// Default SQLite database file, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "catalog.db";
/// Default listen address for the development server.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Explicit configuration passed into the bootstrap sequence.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    database_url: String,
    host: String,
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let (host, port) =
            parse_listen_addr(DEFAULT_LISTEN_ADDR).unwrap_or(("127.0.0.1".to_owned(), 8080));
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            host,
            port,
        }
    }
}

impl ServerConfig {
    /// Build a configuration from the environment, falling back to the
    /// defaults. Recognised variables: `CATALOG_DATABASE_URL` and
    /// `CATALOG_LISTEN_ADDR` (`host:port`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("CATALOG_DATABASE_URL") {
            config.database_url = url;
        }
        if let Ok(addr) = env::var("CATALOG_LISTEN_ADDR") {
            match parse_listen_addr(&addr) {
                Some((host, port)) => {
                    config.host = host;
                    config.port = port;
                }
                None => warn!(addr = %addr, "ignoring malformed CATALOG_LISTEN_ADDR"),
            }
        }
        config
    }

    /// Default configuration with a different database path.
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    /// Path of the SQLite database file.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Host to bind.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port to bind.
    pub fn port(&self) -> u16 {
        self.port
    }
}

fn parse_listen_addr(raw: &str) -> Option<(String, u16)> {
    let (host, port) = raw.rsplit_once(':')?;
    let port = port.parse().ok()?;
    if host.is_empty() {
        return None;
    }
    Some((host.to_owned(), port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_match_the_hardcoded_values() {
        let config = ServerConfig::default();
        assert_eq!(config.database_url(), "catalog.db");
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 8080);
    }

    #[rstest]
    #[case("127.0.0.1:8080", Some(("127.0.0.1", 8080)))]
    #[case("0.0.0.0:80", Some(("0.0.0.0", 80)))]
    #[case("localhost:65535", Some(("localhost", 65535)))]
    #[case("nocolon", None)]
    #[case(":8080", None)]
    #[case("host:notaport", None)]
    #[case("host:99999", None)]
    fn listen_addresses_parse(#[case] raw: &str, #[case] expected: Option<(&str, u16)>) {
        let parsed = parse_listen_addr(raw);
        assert_eq!(
            parsed,
            expected.map(|(host, port)| (host.to_owned(), port))
        );
    }
}
