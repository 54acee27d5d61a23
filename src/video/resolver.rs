use crate::config::{EndpointConfig, ResolverConfig};
use crate::errors::{ResolveError, ResolveResult};
use crate::video::classify::{is_valid_url, parse_vimeo_id, vimeo_id_candidate, youtube_id_candidate};
use crate::video::http::build_client;
use crate::video::status::{HttpStatusChecker, StatusChecker};
use crate::video::thumbnails::{ThumbnailMetadataProvider, VimeoApiThumbnails};
use crate::video::types::{ThumbnailSelection, ThumbnailSet, VideoReference};

/// Turns YouTube/Vimeo URLs and ids into embed, watch and thumbnail URLs.
///
/// Every operation comes in two flavours: `try_*` returns the reason a lookup
/// failed, the plain variant returns `None` for any failure. An id only counts
/// as valid when the provider currently serves it with a 200.
pub struct VideoResolver {
    checker: Box<dyn StatusChecker>,
    thumbnails: Box<dyn ThumbnailMetadataProvider>,
    endpoints: EndpointConfig,
}

impl VideoResolver {
    pub fn new(
        config: &ResolverConfig,
        checker: impl StatusChecker + 'static,
        thumbnails: impl ThumbnailMetadataProvider + 'static,
    ) -> Self {
        Self {
            checker: Box::new(checker),
            thumbnails: Box::new(thumbnails),
            endpoints: config.endpoints.clone(),
        }
    }

    /// Production wiring: both collaborators share one blocking HTTP client.
    pub fn from_config(config: &ResolverConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let client = build_client(config)?;
        let checker = HttpStatusChecker::with_client(client.clone());
        let thumbnails = VimeoApiThumbnails::with_client(client, config);

        Ok(Self::new(config, checker, thumbnails))
    }

    fn liveness_url(&self, video: &VideoReference) -> String {
        let base = match video {
            VideoReference::YouTube(_) => &self.endpoints.youtube_feed,
            VideoReference::Vimeo(_) => &self.endpoints.vimeo_watch,
        };
        format!("{}/{}", base.trim_end_matches('/'), video.id())
    }

    /// Ask the provider whether it currently serves this video.
    pub fn try_check(&self, video: &VideoReference) -> ResolveResult<()> {
        match video {
            VideoReference::YouTube(id) if id.is_empty() => {
                return Err(ResolveError::InvalidId(String::new()));
            }
            VideoReference::Vimeo(0) => return Err(ResolveError::InvalidId("0".to_string())),
            _ => {}
        }

        let url = self.liveness_url(video);
        match self.checker.status(&url)? {
            200 => Ok(()),
            status => Err(ResolveError::NotLive {
                id: video.id(),
                status,
            }),
        }
    }

    pub fn is_live(&self, video: &VideoReference) -> bool {
        settle("is_live", self.try_check(video)).is_some()
    }

    pub fn try_youtube_id(&self, url: &str) -> ResolveResult<String> {
        let id = youtube_id_candidate(url)?;
        self.try_check(&VideoReference::YouTube(id.clone()))?;
        Ok(id)
    }

    pub fn try_vimeo_id(&self, url: &str) -> ResolveResult<u64> {
        let id = vimeo_id_candidate(url)?;
        self.try_check(&VideoReference::Vimeo(id))?;
        Ok(id)
    }

    /// YouTube is tried first; Vimeo only when YouTube yields no live id.
    pub fn try_resolve(&self, url: &str) -> ResolveResult<VideoReference> {
        match self.try_youtube_id(url) {
            Ok(id) => Ok(VideoReference::YouTube(id)),
            Err(err) => {
                log::debug!("{url}: not a youtube video: {err}");
                self.try_vimeo_id(url).map(VideoReference::Vimeo)
            }
        }
    }

    pub fn try_video_iframe(&self, url: &str) -> ResolveResult<String> {
        self.try_resolve(url).map(|video| video.embed_url())
    }

    pub fn try_youtube_url(&self, id: &str) -> ResolveResult<String> {
        let video = VideoReference::YouTube(id.to_string());
        self.try_check(&video)?;
        Ok(video.watch_url())
    }

    pub fn try_vimeo_url(&self, id: u64) -> ResolveResult<String> {
        let video = VideoReference::Vimeo(id);
        self.try_check(&video)?;
        Ok(video.watch_url())
    }

    /// `id_or_url` is either a YouTube URL or a bare id.
    pub fn try_youtube_thumbs(
        &self,
        id_or_url: &str,
        index: Option<i64>,
    ) -> ResolveResult<ThumbnailSelection> {
        let id = if is_valid_url(id_or_url) {
            self.try_youtube_id(id_or_url)?
        } else {
            self.try_check(&VideoReference::YouTube(id_or_url.to_string()))?;
            id_or_url.to_string()
        };

        Ok(ThumbnailSet::youtube(&id).select(index))
    }

    /// `id_or_url` is either a Vimeo URL or a bare numeric id.
    pub fn try_vimeo_thumbs(
        &self,
        id_or_url: &str,
        index: Option<i64>,
    ) -> ResolveResult<ThumbnailSelection> {
        let id = if is_valid_url(id_or_url) {
            self.try_vimeo_id(id_or_url)?
        } else {
            let id = parse_vimeo_id(id_or_url)?;
            self.try_check(&VideoReference::Vimeo(id))?;
            id
        };

        let thumbs = self.thumbnails.vimeo_thumbnails(id).map_err(|err| {
            log::debug!("{}: no thumbnails for {id}: {err}", self.thumbnails.name());
            err
        })?;

        Ok(ThumbnailSet::from(thumbs).select(index))
    }

    pub fn resolve(&self, url: &str) -> Option<VideoReference> {
        settle("resolve", self.try_resolve(url))
    }

    pub fn video_iframe(&self, url: &str) -> Option<String> {
        settle("video_iframe", self.try_video_iframe(url))
    }

    pub fn youtube_id(&self, url: &str) -> Option<String> {
        settle("youtube_id", self.try_youtube_id(url))
    }

    pub fn vimeo_id(&self, url: &str) -> Option<u64> {
        settle("vimeo_id", self.try_vimeo_id(url))
    }

    pub fn youtube_url(&self, id: &str) -> Option<String> {
        settle("youtube_url", self.try_youtube_url(id))
    }

    pub fn vimeo_url(&self, id: u64) -> Option<String> {
        settle("vimeo_url", self.try_vimeo_url(id))
    }

    pub fn youtube_thumbs(&self, id_or_url: &str, index: Option<i64>) -> Option<ThumbnailSelection> {
        settle("youtube_thumbs", self.try_youtube_thumbs(id_or_url, index))
    }

    pub fn vimeo_thumbs(&self, id_or_url: &str, index: Option<i64>) -> Option<ThumbnailSelection> {
        settle("vimeo_thumbs", self.try_vimeo_thumbs(id_or_url, index))
    }
}

/// The one place where a failure turns into "no result".
fn settle<T>(op: &str, result: ResolveResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("{op}: {err}");
            None
        }
    }
}
