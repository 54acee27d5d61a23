use std::{path::Path, time::Duration};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT_DEFAULT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0";

const YOUTUBE_FEED_ENDPOINT: &str = "http://gdata.youtube.com/feeds/api/videos";
const VIMEO_WATCH_ENDPOINT: &str = "http://vimeo.com";
const VIMEO_API_ENDPOINT: &str = "http://vimeo.com/api/v2/video";
const VIMEO_API_FORMAT: &str = "json";
/// Formats the thumbnail decoder understands
const SUPPORTED_VIMEO_API_FORMATS: &[&str] = &["json"];

/// Base URLs of the remote endpoints consulted for liveness and thumbnails.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// `{youtube_feed}/{id}` answers 200 for a live YouTube id
    #[serde(default = "default_youtube_feed")]
    pub youtube_feed: String,

    /// `{vimeo_watch}/{id}` answers 200 for a live Vimeo id
    #[serde(default = "default_vimeo_watch")]
    pub vimeo_watch: String,

    /// `{vimeo_api}/{id}.{format}` returns thumbnail metadata
    #[serde(default = "default_vimeo_api")]
    pub vimeo_api: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            youtube_feed: YOUTUBE_FEED_ENDPOINT.to_string(),
            vimeo_watch: VIMEO_WATCH_ENDPOINT.to_string(),
            vimeo_api: VIMEO_API_ENDPOINT.to_string(),
        }
    }
}

fn default_youtube_feed() -> String {
    YOUTUBE_FEED_ENDPOINT.to_string()
}

fn default_vimeo_watch() -> String {
    VIMEO_WATCH_ENDPOINT.to_string()
}

fn default_vimeo_api() -> String {
    VIMEO_API_ENDPOINT.to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Upper bound for every remote request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Proxy applied to all requests, e.g. `socks5://127.0.0.1:1080`
    #[serde(default)]
    pub proxy: Option<String>,

    #[serde(default)]
    pub endpoints: EndpointConfig,

    #[serde(default = "default_vimeo_api_format")]
    pub vimeo_api_format: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: USER_AGENT_DEFAULT.to_string(),
            proxy: None,
            endpoints: EndpointConfig::default(),
            vimeo_api_format: VIMEO_API_FORMAT.to_string(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    USER_AGENT_DEFAULT.to_string()
}

fn default_vimeo_api_format() -> String {
    VIMEO_API_FORMAT.to_string()
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than 0");
        }

        let endpoints = [
            ("endpoints.youtube_feed", &self.endpoints.youtube_feed),
            ("endpoints.vimeo_watch", &self.endpoints.vimeo_watch),
            ("endpoints.vimeo_api", &self.endpoints.vimeo_api),
        ];
        for (name, value) in endpoints {
            if value.trim().is_empty() {
                bail!("{name} must not be empty");
            }
        }

        if !SUPPORTED_VIMEO_API_FORMATS.contains(&self.vimeo_api_format.as_str()) {
            bail!(
                "vimeo_api_format {:?} is not supported, expected one of {:?}",
                self.vimeo_api_format,
                SUPPORTED_VIMEO_API_FORMATS
            );
        }

        if let Some(proxy) = &self.proxy {
            reqwest::Proxy::all(proxy).with_context(|| format!("invalid proxy url {proxy:?}"))?;
        }

        Ok(())
    }

    /// Read a YAML config file. A missing file yields the defaults.
    pub fn load_with(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("{}: not found, using default config", path.display());
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = serde_yml::from_str(&config_str)
            .with_context(|| format!("{} is malformed", path.display()))?;

        config.validate()?;

        Ok(config)
    }
}
