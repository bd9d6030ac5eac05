//! Server configuration for the test harness.

use crate::error::HarnessError;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 7470;
pub const DEFAULT_PROPERTIES_FILE: &str = "test-db.properties";

/// Where and how to run the test server.
///
/// The defaults reproduce the fixed values test suites conventionally use
/// (`localhost:7470`, overridable through `test-db.properties`). Port `0`
/// requests an OS-assigned port; the bound port is reported by the running
/// [`LocalTestServer`](crate::LocalTestServer).
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Optional `key = value` file overriding `host` and `port`. A missing
    /// file is ignored; an unparsable one is a configuration error.
    pub properties_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            properties_file: Some(PathBuf::from(DEFAULT_PROPERTIES_FILE)),
        }
    }
}

impl ServerConfig {
    /// Explicit host and port, with no properties file.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        ServerConfig {
            host: host.into(),
            port,
            properties_file: None,
        }
    }

    pub fn with_properties_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.properties_file = Some(path.into());
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The data-API root this configuration points at.
    pub fn data_url(&self) -> String {
        format!("http://{}:{}/db/data/", self.host, self.port)
    }

    /// Resolve the effective configuration, applying properties-file
    /// overrides when the file exists.
    pub fn load(&self) -> Result<ServerConfig, HarnessError> {
        let mut resolved = self.clone();
        if let Some(path) = &self.properties_file {
            if path.exists() {
                apply_properties(&mut resolved, path)?;
            }
        }
        Ok(resolved)
    }
}

fn apply_properties(config: &mut ServerConfig, path: &Path) -> Result<(), HarnessError> {
    let content = std::fs::read_to_string(path).map_err(|e| HarnessError::Config {
        context: path.display().to_string(),
        reason: e.to_string(),
    })?;
    for (line_number, line) in content.lines().enumerate() {
        let line = line.trim();
        // Properties files allow both comment markers
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(HarnessError::Config {
                context: format!("{}:{}", path.display(), line_number + 1),
                reason: format!("expected key = value, got '{line}'"),
            });
        };
        let (key, value) = (key.trim(), value.trim());
        match key {
            "host" => config.host = value.to_string(),
            "port" => {
                config.port = value.parse().map_err(|_| HarnessError::Config {
                    context: format!("{}:{}", path.display(), line_number + 1),
                    reason: format!("invalid port '{value}'"),
                })?;
            }
            _ => {
                return Err(HarnessError::Config {
                    context: format!("{}:{}", path.display(), line_number + 1),
                    reason: format!("unknown key '{key}'"),
                });
            }
        }
    }
    Ok(())
}
