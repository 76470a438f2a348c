//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 4000;

/// Configuration of the bookshelf server.
#[derive(Clone, Copy, Debug, Eq, Parser, PartialEq)]
#[command(name = "bookshelf", version, about = "Minimal GraphQL server serving books")]
pub struct Config {
    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    /// Address to bind the listener to: all IPv4 interfaces on the [`port`].
    ///
    /// [`port`]: Config::port
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Base URL the server is reachable at from the local machine.
    pub fn url(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use clap::Parser as _;
    use serial_test::serial;

    use super::{Config, DEFAULT_PORT};

    #[test]
    fn defaults_to_port_4000() {
        let config = Config::default();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.addr().to_string(), "0.0.0.0:4000");
        assert_eq!(config.url(), "http://localhost:4000/");
    }

    #[test]
    #[serial]
    fn parses_port_flag() {
        let config = Config::try_parse_from(["bookshelf", "--port", "8080"])
            .unwrap_or_else(|e| panic!("failed to parse: {e}"));

        assert_eq!(config.port, 8080);
        assert_eq!(config.url(), "http://localhost:8080/");
    }

    #[test]
    #[serial]
    fn rejects_invalid_port() {
        assert!(Config::try_parse_from(["bookshelf", "--port", "70000"]).is_err());
    }

    #[test]
    #[serial]
    fn rejects_unknown_flags() {
        assert!(Config::try_parse_from(["bookshelf", "--host", "example.com"]).is_err());
    }

    #[test]
    #[serial]
    fn reads_port_from_env() {
        env::set_var("PORT", "5005");
        let from_env = Config::try_parse_from(["bookshelf"]);
        let overridden = Config::try_parse_from(["bookshelf", "--port", "6006"]);
        env::remove_var("PORT");

        let from_env = from_env.unwrap_or_else(|e| panic!("failed to parse: {e}"));
        assert_eq!(from_env.port, 5005);
        assert_eq!(from_env.addr().to_string(), "0.0.0.0:5005");

        let overridden = overridden.unwrap_or_else(|e| panic!("failed to parse: {e}"));
        assert_eq!(overridden.port, 6006);
    }
}
