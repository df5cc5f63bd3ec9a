//! Configuration loading for keyqueue.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Get the keyqueue home directory (~/.keyqueue).
pub fn get_home_dir() -> Result<PathBuf> {
    let home = directories::UserDirs::new()
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

    Ok(home.home_dir().join(".keyqueue"))
}

/// Get the default settings file path.
pub fn get_settings_path() -> Result<PathBuf> {
    Ok(get_home_dir()?.join("settings.json"))
}

/// Load settings.
///
/// An explicit `path` must exist. Without one, ~/.keyqueue/settings.json is
/// read when present and built-in defaults are used otherwise.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(Error::Config(format!(
                    "Settings file not found at {}",
                    p.display()
                )));
            }
            p.to_path_buf()
        }
        None => match get_settings_path() {
            Ok(p) if p.exists() => p,
            _ => return Ok(Settings::default()),
        },
    };

    let content = std::fs::read_to_string(&path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    validate_settings(&settings)?;

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.server.port == 0 {
        return Err(Error::Config("server.port must be non-zero".to_string()));
    }
    settings.server.socket_addr()?;
    Ok(())
}

/// Root settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Apply command-line overrides on top of file values, then re-validate.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Result<Self> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        validate_settings(&self)?;
        Ok(self)
    }
}

/// HTTP listener settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address {}:{}: {}", self.host, self.port, e)))
    }
}

/// Logging settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when RUST_LOG is unset.
    pub level: Option<String>,

    /// Also write a daily-rotated log file.
    pub file: bool,

    /// Log file directory; defaults to the platform data dir.
    pub directory: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(
            settings.server.socket_addr().unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
        assert!(!settings.logging.file);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, r#"{"server": {"port": 9090}}"#).unwrap();

        let settings = load_settings(Some(&path)).unwrap();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.logging, LoggingSettings::default());
    }

    #[test]
    fn test_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.json");

        assert!(matches!(load_settings(Some(&path)), Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_settings(Some(&path)), Err(Error::Json(_))));
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::default()
            .with_overrides(Some("127.0.0.1".to_string()), Some(3000))
            .unwrap();

        assert_eq!(
            settings.server.socket_addr().unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_rejects_bad_server_settings() {
        assert!(Settings::default().with_overrides(None, Some(0)).is_err());
        assert!(Settings::default()
            .with_overrides(Some("not a host".to_string()), None)
            .is_err());
    }
}
