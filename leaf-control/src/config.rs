//! Config file loading.
//!
//! The config file is YAML with two keys:
//!
//! ```yaml
//! host: 192.168.1.20:16021
//! access_token: 0123456789abcdef
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use leaf_control_lib::util::endpoint::DeviceEndpoint;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = ".leafrc";

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: Option<String>,
    pub access_token: Option<String>,
}

impl Config {
    /// `~/.leafrc`, if there is a home directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        if text.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /**
    Loads the given file, or the default one.

    A file named explicitly must exist. A missing default file yields an empty
    config, so host and token can come from flags or the environment alone.
     */
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Config::load(path);
        }
        match Config::default_path() {
            Some(path) if path.exists() => Config::load(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Resolves the endpoint, `host` and `token` take precedence over the file.
    pub fn endpoint(self, host: Option<String>, token: Option<String>) -> Result<DeviceEndpoint> {
        let host = host.or(self.host).ok_or_else(|| {
            anyhow!(
                "No host configured, set `host` in ~/{} or pass --host",
                DEFAULT_CONFIG_FILE
            )
        })?;
        let token = token.or(self.access_token).ok_or_else(|| {
            anyhow!(
                "No access token configured, set `access_token` in ~/{} or pass --token",
                DEFAULT_CONFIG_FILE
            )
        })?;
        DeviceEndpoint::parse(&host, &token).context("Invalid device endpoint")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load() {
        let file = config_file("host: 192.168.1.20:16021\naccess_token: abc\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.host.as_deref(), Some("192.168.1.20:16021"));
        assert_eq!(config.access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_load_empty_file() {
        let file = config_file("\n");
        assert_eq!(Config::load(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_load_ignores_unknown_keys() {
        let file = config_file("host: panels.local\naccess_token: abc\ncolor: red\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.host.as_deref(), Some("panels.local"));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let file = config_file("host: [unterminated\n");
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(Config::load_or_default(Some(&missing)).is_err());
    }

    #[test]
    fn test_endpoint_from_file() {
        let config = Config {
            host: Some("10.0.0.2".to_string()),
            access_token: Some("file-token".to_string()),
        };
        let endpoint = config.endpoint(None, None).unwrap();
        assert_eq!(endpoint.authority(), "10.0.0.2:16021");
        assert_eq!(endpoint.access_token(), "file-token");
    }

    #[test]
    fn test_endpoint_overrides_win() {
        let config = Config {
            host: Some("10.0.0.2".to_string()),
            access_token: Some("file-token".to_string()),
        };
        let endpoint = config
            .endpoint(Some("10.0.0.3:1234".to_string()), Some("flag-token".to_string()))
            .unwrap();
        assert_eq!(endpoint.authority(), "10.0.0.3:1234");
        assert_eq!(endpoint.access_token(), "flag-token");
    }

    #[test]
    fn test_endpoint_requires_host_and_token() {
        let err = Config::default().endpoint(None, Some("t".to_string())).unwrap_err();
        assert!(err.to_string().contains("No host configured"));
        let err = Config::default().endpoint(Some("h".to_string()), None).unwrap_err();
        assert!(err.to_string().contains("No access token configured"));
    }
}
