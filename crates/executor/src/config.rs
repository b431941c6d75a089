//! Client configuration via `keyfront.toml`
//!
//! Everything needed to reach the store lives in [`ClientConfig`]: address,
//! credentials, logical database, the uniform I/O timeout, the namespace
//! prefix and the pool settings. Configs can be built in code or loaded from
//! a TOML file; missing keys fall back to their defaults.

use std::path::Path;
use std::time::Duration;

use keyfront_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Config file name conventionally used for a client.
pub const CONFIG_FILE_NAME: &str = "keyfront.toml";

/// Host used when none (or an empty one) is configured.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port used when none (or `0`) is configured.
pub const DEFAULT_PORT: u16 = 6379;

/// Connection pool settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoolConfig {
    /// Upper bound on pooled connections (default: 8)
    #[serde(default = "default_max_size")]
    pub max_size: u32,
    /// Idle connections older than this are closed (default: 240)
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
    /// A connection idle at least this long is PINGed before reuse (default: 60)
    #[serde(default = "default_probe_after_secs")]
    pub probe_after_secs: u64,
}

fn default_max_size() -> u32 {
    8
}

fn default_idle_timeout_secs() -> u64 {
    240
}

fn default_probe_after_secs() -> u64 {
    60
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            idle_timeout_secs: default_idle_timeout_secs(),
            probe_after_secs: default_probe_after_secs(),
        }
    }
}

impl PoolConfig {
    /// Idle timeout as a duration
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Staleness threshold for the liveness probe
    pub fn probe_after(&self) -> Duration {
        Duration::from_secs(self.probe_after_secs)
    }
}

/// Client configuration loaded from `keyfront.toml` or built in code.
///
/// # Example
///
/// ```toml
/// host = "127.0.0.1"
/// port = 6379
/// database = 0
/// timeout_secs = 5
/// prefix = "app:"
///
/// [pool]
/// max_size = 8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Store host name or address
    #[serde(default = "default_host")]
    pub host: String,
    /// Store TCP port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Password for `AUTH`, if the server requires one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Logical database selected on every new connection
    #[serde(default)]
    pub database: i64,
    /// Connect, read, write and checkout timeout in seconds (default: 5)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Namespace prefix prepended to every key
    #[serde(default)]
    pub prefix: String,
    /// Pool settings
    #[serde(default)]
    pub pool: PoolConfig,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            password: None,
            database: 0,
            timeout_secs: default_timeout_secs(),
            prefix: String::new(),
            pool: PoolConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Config for `host:port` with every other setting at its default.
    ///
    /// An empty host or a zero port is replaced by the default.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
        .normalized()
    }

    /// Set the namespace prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the `AUTH` password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the logical database
    pub fn with_database(mut self, database: i64) -> Self {
        self.database = database;
        self
    }

    /// Set the uniform timeout (whole seconds; sub-second parts are dropped)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Set the pool settings
    pub fn with_pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    /// Replace an empty host and a zero port with their defaults
    pub fn normalized(mut self) -> Self {
        if self.host.is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            self.port = DEFAULT_PORT;
        }
        self
    }

    /// Uniform timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `host:port`, for logs and error messages
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject settings the pool cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a zero pool size, a zero timeout
    /// or a zero idle timeout.
    pub fn validate(&self) -> Result<()> {
        if self.pool.max_size == 0 {
            return Err(Error::InvalidConfig {
                reason: "pool.max_size must be at least 1".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig {
                reason: "timeout_secs must be at least 1".to_string(),
            });
        }
        if self.pool.idle_timeout_secs == 0 {
            return Err(Error::InvalidConfig {
                reason: "pool.idle_timeout_secs must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Keyfront client configuration
#
# Store address. An empty host or port 0 falls back to 127.0.0.1:6379.
host = "127.0.0.1"
port = 6379

# Password sent with AUTH on every new connection.
# password = "secret"

# Logical database selected on every new connection.
database = 0

# Connect, read, write and pool checkout timeout, in seconds.
timeout_secs = 5

# Namespace prefix prepended to every key (e.g. "app:").
prefix = ""

[pool]
# Upper bound on pooled connections.
max_size = 8
# Idle connections older than this many seconds are closed.
idle_timeout_secs = 240
# Connections idle at least this many seconds are PINGed before reuse.
probe_after_secs = 60
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        let config: ClientConfig = toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            reason: format!("Failed to parse config file '{}': {}", path.display(), e),
        })?;
        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Io {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Serialization {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Io {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }
}
