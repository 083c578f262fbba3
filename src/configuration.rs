//! Process configuration, loaded once at startup.
//!
//! Sources are layered: built-in defaults first, then environment variables.
//! `API_URL` points at the remote API; nested keys use `__` as separator
//! (`APPLICATION__PORT=8000`, `API__TIMEOUT_MILLISECONDS=2000`).

use std::time::Duration;

use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/v1";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("{0} is not a valid API base URL: {1}")]
    InvalidBaseUrl(String, String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub api: ApiSettings,
    pub api_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub timeout_milliseconds: u64,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }

    pub fn base_url(&self) -> Result<ApiBaseUrl, ConfigurationError> {
        ApiBaseUrl::parse(&self.api_url)
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

/// Root address every API path is appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    pub fn parse(s: &str) -> Result<ApiBaseUrl, ConfigurationError> {
        let url = Url::parse(s)
            .map_err(|e| ConfigurationError::InvalidBaseUrl(s.to_string(), e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(ConfigurationError::InvalidBaseUrl(
                s.to_string(),
                "URL cannot carry path segments".to_string(),
            ));
        }
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigurationError::InvalidBaseUrl(
                s.to_string(),
                format!("unsupported scheme {}", url.scheme()),
            ));
        }
        Ok(Self(url))
    }

    /// Appends `segments` to the base path, each percent-encoded as one segment.
    pub fn join_segments<'a, I>(&self, segments: I) -> Url
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl AsRef<Url> for ApiBaseUrl {
    fn as_ref(&self) -> &Url {
        &self.0
    }
}

pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    load_settings(environment())
}

fn environment() -> config::Environment {
    config::Environment::default()
        .separator("__")
        .try_parsing(true)
}

/// Layers `env` over the built-in defaults.
fn load_settings(env: config::Environment) -> Result<Settings, ConfigurationError> {
    let settings = config::Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 5173)?
        .set_default("api.timeout_milliseconds", 10_000)?
        .set_default("api_url", DEFAULT_API_URL)?
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
