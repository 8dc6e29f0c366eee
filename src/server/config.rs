use crate::config::ConfigError;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local use.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `127.0.0.1` |
    /// | `PORT`                 | `5000`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: raw })?,
            Err(_) => defaults.port,
        };

        let request_timeout_secs = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "REQUEST_TIMEOUT_SECS",
                value: raw,
            })?,
            Err(_) => defaults.request_timeout_secs,
        };

        Ok(Self {
            host,
            port,
            request_timeout_secs,
        })
    }

    /// `host:port` string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["HOST", "PORT", "REQUEST_TIMEOUT_SECS"] {
            unsafe { std::env::remove_var(key); }
        }
    }

    #[test]
    #[serial]
    fn test_server_config_defaults() {
        clear_env();
        let config = ServerConfig::from_env().expect("defaults are valid");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    #[serial]
    fn test_server_config_invalid_port() {
        clear_env();
        unsafe { std::env::set_var("PORT", "not-a-port"); }
        assert!(matches!(
            ServerConfig::from_env(),
            Err(ConfigError::InvalidValue { key: "PORT", .. })
        ));
        clear_env();
    }
}
