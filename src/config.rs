use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration shared by the proxy, the client controller
/// and the reference upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub client: ClientSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

/// Where the proxy forwards `/sentence` calls
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    /// `host:port` of the sentence API. Left unset, every forwarded call fails.
    pub host: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            host: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the proxy as seen from the page
    #[serde(default = "default_proxy_url")]
    pub proxy_url: String,
    /// Delay between typed characters. Zero reveals the sentence at once.
    #[serde(default)]
    pub type_speed_ms: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            proxy_url: default_proxy_url(),
            type_speed_ms: 0,
        }
    }
}

fn default_proxy_url() -> String { "http://localhost:3000".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_engine_port")]
    pub port: u16,
    pub database_url: Option<String>,
    pub corpus_path: Option<String>,
    pub funny_path: Option<String>,
    pub not_funny_path: Option<String>,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            port: default_engine_port(),
            database_url: None,
            corpus_path: None,
            funny_path: None,
            not_funny_path: None,
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_engine_port() -> u16 { 8080 }
fn default_max_attempts() -> usize { 10_000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the structs
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SENTENCE__)
    /// 4. Deployment variables `API_HOST`, `PORT`, `DATABASE_URL`, `LOG_LEVEL`, `LOG_FORMAT`
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., SENTENCE__UPSTREAM__HOST -> upstream.host
            .add_source(
                Environment::with_prefix("SENTENCE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SENTENCE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the plain environment variables the site has always been deployed with
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(host) = env::var("API_HOST") {
        builder = builder.set_override("upstream.host", host)?;
    }
    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }
    if let Ok(url) = env::var("DATABASE_URL") {
        builder = builder.set_override("engine.database_url", url)?;
    }
    if let Ok(level) = env::var("LOG_LEVEL") {
        builder = builder.set_override("logging.level", level)?;
    }
    if let Ok(format) = env::var("LOG_FORMAT") {
        builder = builder.set_override("logging.format", format)?;
    }

    builder.build()
}
