//! Configuration for the registration proxy.

use anyhow::{ensure, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use webinarjam_client::{Credentials, DEFAULT_REGISTER_URL};

/// Prefix of the WebinarJam variables (`WEBINARJAM_API_KEY`, ...).
const WEBINARJAM_PREFIX: &str = "WEBINARJAM";

/// Set by the hosting platform on production instances only.
pub const HOSTED_MARKER_VAR: &str = "RENDER";

/// Proxy configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// WebinarJam account and request settings
    pub registration: RegistrationConfig,

    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub log: LogConfig,
}

/// Settings read from `WEBINARJAM_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationConfig {
    /// API key for the WebinarJam account
    pub api_key: SecretString,

    /// Webinar to register contacts for
    pub webinar_id: String,

    /// Schedule (session) within the webinar
    pub webinar_schedule_id: String,

    /// Register endpoint URL
    #[serde(default = "default_register_url")]
    pub register_url: String,

    /// Outbound request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

/// Everything that is not WebinarJam-specific.
#[derive(Debug, Deserialize)]
struct ServiceSettings {
    #[serde(default)]
    server: ServerConfig,

    #[serde(default)]
    log: LogConfig,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value functions
fn default_register_url() -> String {
    DEFAULT_REGISTER_URL.into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".into()
}

impl RegistrationConfig {
    /// Credentials handed to the WebinarJam client.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            api_key: self.api_key.clone(),
            webinar_id: self.webinar_id.clone(),
            schedule_id: self.webinar_schedule_id.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.api_key.expose_secret().trim().is_empty(),
            "WEBINARJAM_API_KEY must not be empty"
        );
        ensure!(
            !self.webinar_id.trim().is_empty(),
            "WEBINARJAM_WEBINAR_ID must not be empty"
        );
        ensure!(
            !self.webinar_schedule_id.trim().is_empty(),
            "WEBINARJAM_WEBINAR_SCHEDULE_ID must not be empty"
        );
        Ok(())
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::build(None)
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::build(Some(vars))
    }

    fn build(vars: Option<HashMap<String, String>>) -> Result<Self> {
        let registration: RegistrationConfig = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(WEBINARJAM_PREFIX)
                    .prefix_separator("_")
                    // Ids are opaque strings; keep leading zeros intact.
                    .try_parsing(false)
                    .source(vars.clone()),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context(
                "One or more required environment variables are missing. Please ensure \
                 WEBINARJAM_API_KEY, WEBINARJAM_WEBINAR_ID, and WEBINARJAM_WEBINAR_SCHEDULE_ID are set",
            )?;
        registration.validate()?;

        let settings: ServiceSettings = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false)
                    .source(vars),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        Ok(Self {
            registration,
            server: settings.server,
            log: settings.log,
        })
    }
}

/// Where configuration comes from, decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigProvider {
    /// Variables are injected by the hosting platform.
    Hosted,
    /// Development machine: a `.env` file is loaded first, if present.
    Local,
}

impl ConfigProvider {
    /// Pick the provider based on the hosting platform marker.
    pub fn detect() -> Self {
        Self::from_marker(std::env::var_os(HOSTED_MARKER_VAR).is_some())
    }

    fn from_marker(hosted: bool) -> Self {
        if hosted {
            ConfigProvider::Hosted
        } else {
            ConfigProvider::Local
        }
    }

    /// Load configuration from this provider.
    pub fn load(self) -> Result<Config> {
        if self == ConfigProvider::Local {
            // Load .env file if present
            dotenvy::dotenv().ok();
        }
        Config::from_env()
    }
}
