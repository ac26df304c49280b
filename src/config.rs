//! Configuration for kvwire
//!
//! Built once at startup and passed by reference to the connector and the
//! reply decoder. Nothing here is mutated after construction.

use std::time::Duration;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 6379;

/// Default upper bound for a single bulk payload (512 MB)
pub const DEFAULT_MAX_BULK_LEN: u64 = 512 * 1024 * 1024;

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server host name or IP address
    pub host: String,

    /// Server TCP port
    pub port: u16,

    /// Connect timeout (milliseconds, 0 = block until the OS gives up)
    pub connect_timeout_ms: u64,

    /// Read timeout (milliseconds, 0 = block indefinitely)
    pub read_timeout_ms: u64,

    /// Write timeout (milliseconds, 0 = block indefinitely)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Largest bulk payload length accepted from the server
    pub max_bulk_len: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            connect_timeout_ms: 0,
            read_timeout_ms: 0,
            write_timeout_ms: 0,
            max_bulk_len: DEFAULT_MAX_BULK_LEN,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// `host:port` string used for resolution and error messages
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        to_duration(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        to_duration(self.read_timeout_ms)
    }

    pub fn write_timeout(&self) -> Option<Duration> {
        to_duration(self.write_timeout_ms)
    }
}

fn to_duration(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set connect, read and write timeouts at once (in milliseconds)
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self.config.read_timeout_ms = ms;
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the largest accepted bulk payload (in bytes)
    pub fn max_bulk_len(mut self, len: u64) -> Self {
        self.config.max_bulk_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
