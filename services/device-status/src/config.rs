//! Configuration types for the device status service

use device_model::{sample_devices, Device};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub source: SourceConfig,
    /// Initial device set. Empty means the built-in sample set.
    #[serde(default)]
    pub devices: Vec<Device>,
}

impl Config {
    /// Devices the store is seeded with
    pub fn initial_devices(&self) -> Vec<Device> {
        if self.devices.is_empty() {
            sample_devices()
        } else {
            self.devices.clone()
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.clock.tick_interval_ms == 0 {
            return Err(crate::DeviceStatusError::Config(
                "clock.tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        if let SourceConfig::Http { base_url, .. } = &self.source {
            if base_url.trim().is_empty() {
                return Err(crate::DeviceStatusError::Config(
                    "source.base_url must not be empty".to_string(),
                ));
            }
            let url = reqwest::Url::parse(base_url).map_err(|e| {
                crate::DeviceStatusError::Config(format!(
                    "source.base_url '{}' is not a valid URL: {}",
                    base_url, e
                ))
            })?;
            if points_at_self(&url, self.server.port) {
                return Err(crate::DeviceStatusError::Config(format!(
                    "source.base_url '{}' points at this server's own port {}",
                    base_url, self.server.port
                )));
            }
        }
        Ok(())
    }
}

/// True when `url` would reach this process's own dashboard listener
fn points_at_self(url: &reqwest::Url, server_port: u16) -> bool {
    let host = match url.host_str() {
        Some(host) => host.trim_start_matches('[').trim_end_matches(']'),
        None => return false,
    };
    let local = host.eq_ignore_ascii_case("localhost")
        || host
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback() || ip.is_unspecified())
            .unwrap_or(false);
    local && url.port_or_known_default() == Some(server_port)
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// "Last updated" clock configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Where device reports come from, tagged for extensibility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SourceConfig {
    /// Reports derived from the in-memory device store
    #[default]
    #[serde(rename = "simulated")]
    Simulated,
    /// An external device API serving `GET {base_url}/api/devices`
    #[serde(rename = "http")]
    Http {
        base_url: String,
        #[serde(default = "default_timeout_seconds")]
        timeout_seconds: u64,
    },
}

impl SourceConfig {
    pub fn type_name(&self) -> &str {
        match self {
            SourceConfig::Simulated => "simulated",
            SourceConfig::Http { .. } => "http",
        }
    }
}

fn default_port() -> u16 {
    5000
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_timeout_seconds() -> u64 {
    5
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::DeviceStatusError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "server": { "port": 8080 },
            "clock": { "tick_interval_ms": 250 },
            "source": {
                "type": "http",
                "base_url": "http://localhost:5050",
                "timeout_seconds": 2
            },
            "devices": [
                { "id": 10, "name": "Boiler", "status": true },
                { "id": 11, "name": "Pump", "status": false }
            ]
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.clock.tick_interval_ms, 250);
        assert_eq!(
            config.source,
            SourceConfig::Http {
                base_url: "http://localhost:5050".to_string(),
                timeout_seconds: 2,
            }
        );
        assert_eq!(config.source.type_name(), "http");
        assert_eq!(config.devices.len(), 2);
        assert_eq!(config.initial_devices()[1].name, "Pump");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_minimal_config() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.clock.tick_interval_ms, 1000);
        assert_eq!(config.source, SourceConfig::Simulated);
        assert!(config.devices.is_empty());
        assert_eq!(config.initial_devices(), sample_devices());
    }

    #[test]
    fn parse_http_source_defaults() {
        let json = r#"{ "source": { "type": "http", "base_url": "http://api" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        match config.source {
            SourceConfig::Http {
                timeout_seconds, ..
            } => assert_eq!(timeout_seconds, 5),
            other => panic!("expected http source, got {other:?}"),
        }
    }

    #[test]
    fn unknown_source_type_is_rejected() {
        let json = r#"{ "source": { "type": "mqtt" } }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn zero_tick_interval_is_invalid() {
        let mut config = Config::default();
        config.clock.tick_interval_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("tick_interval_ms"));
    }

    #[test]
    fn empty_http_base_url_is_invalid() {
        let config = Config {
            source: SourceConfig::Http {
                base_url: " ".to_string(),
                timeout_seconds: 5,
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    fn http_source_config(base_url: &str, port: u16) -> Config {
        Config {
            server: ServerConfig { port },
            source: SourceConfig::Http {
                base_url: base_url.to_string(),
                timeout_seconds: 5,
            },
            ..Config::default()
        }
    }

    #[test]
    fn http_source_pointing_at_own_port_is_invalid() {
        for base_url in [
            "http://localhost:5000",
            "http://LOCALHOST:5000/",
            "http://127.0.0.1:5000",
            "http://[::1]:5000",
            "http://0.0.0.0:5000",
        ] {
            let err = http_source_config(base_url, 5000).validate().unwrap_err();
            assert!(
                err.to_string().contains("points at this server's own port 5000"),
                "{base_url}: {err}"
            );
        }

        // default http port
        assert!(http_source_config("http://localhost", 80).validate().is_err());
    }

    #[test]
    fn http_source_on_other_port_or_host_is_valid() {
        assert!(http_source_config("http://localhost:5050", 5000).validate().is_ok());
        assert!(http_source_config("http://127.0.0.1:5000", 8080).validate().is_ok());
        assert!(http_source_config("http://device-api:5000", 5000).validate().is_ok());
        assert!(http_source_config("http://192.168.1.20:5000", 5000).validate().is_ok());
    }

    #[test]
    fn http_source_with_unparseable_url_is_invalid() {
        let err = http_source_config("not a url", 5000).validate().unwrap_err();
        assert!(err.to_string().contains("not a valid URL"));
    }

    #[test]
    fn load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/config.json"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(
            &config_path,
            r#"{"devices": [{"id": 1, "name": "Only", "status": false}]}"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.devices.len(), 1);
        assert_eq!(config.initial_devices()[0].name, "Only");
    }

    #[test]
    fn load_config_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "not json").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(
            result,
            Err(crate::DeviceStatusError::Json(_))
        ));
    }
}
