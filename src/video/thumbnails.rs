use reqwest::blocking::Client;

use crate::config::ResolverConfig;
use crate::errors::{ResolveError, ResolveResult};
use crate::video::http::{describe_error, iden};
use crate::video::types::VimeoThumbnails;

/// Source of Vimeo thumbnail URLs for a known-good id.
pub trait ThumbnailMetadataProvider: Send + Sync {
    fn vimeo_thumbnails(&self, id: u64) -> ResolveResult<VimeoThumbnails>;

    /// Get the name of this provider for logging
    fn name(&self) -> &'static str;
}

/// Reads thumbnails from Vimeo's simple v2 API (`/api/v2/video/{id}.json`).
pub struct VimeoApiThumbnails {
    client: Client,
    endpoint: String,
    format: String,
}

impl VimeoApiThumbnails {
    pub fn with_client(client: Client, config: &ResolverConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoints.vimeo_api.trim_end_matches('/').to_string(),
            format: config.vimeo_api_format.clone(),
        }
    }

    fn api_url(&self, id: u64) -> String {
        format!("{}/{id}.{}", self.endpoint, self.format)
    }

    /// The API answers with an array of video records; only the first is used.
    pub fn parse_response(body: &[u8]) -> ResolveResult<VimeoThumbnails> {
        let records: Vec<serde_json::Value> = serde_json::from_slice(body)?;

        let first = records
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::Metadata("empty response".to_string()))?;

        serde_json::from_value(first)
            .map_err(|e| ResolveError::Metadata(format!("missing thumbnail fields: {e}")))
    }
}

impl ThumbnailMetadataProvider for VimeoApiThumbnails {
    fn vimeo_thumbnails(&self, id: u64) -> ResolveResult<VimeoThumbnails> {
        let url = self.api_url(id);
        let iden = iden(&url);
        log::debug!("{iden}: requesting");

        let resp = self.client.get(&url).send().map_err(|err| {
            log::warn!("{iden}: {}", describe_error(&err));
            ResolveError::from_transport(&url, err)
        })?;

        let status = resp.status();
        if !status.is_success() {
            log::debug!("{iden}: {status}");
            return Err(ResolveError::Metadata(format!("status {status}")));
        }

        let bytes = resp
            .bytes()
            .map_err(|err| ResolveError::from_transport(&url, err))?;

        Self::parse_response(&bytes)
    }

    fn name(&self) -> &'static str {
        "Vimeo API v2"
    }
}
