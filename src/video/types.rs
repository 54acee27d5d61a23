use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const YOUTUBE_THUMB_COUNT: usize = 4;
pub const VIMEO_THUMB_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    YouTube,
    Vimeo,
}

impl VideoProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoProvider::YouTube => "youtube",
            VideoProvider::Vimeo => "vimeo",
        }
    }
}

impl fmt::Display for VideoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provider-specific video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", content = "id", rename_all = "lowercase")]
pub enum VideoReference {
    YouTube(String),
    Vimeo(u64),
}

impl VideoReference {
    pub fn provider(&self) -> VideoProvider {
        match self {
            VideoReference::YouTube(_) => VideoProvider::YouTube,
            VideoReference::Vimeo(_) => VideoProvider::Vimeo,
        }
    }

    pub fn id(&self) -> String {
        match self {
            VideoReference::YouTube(id) => id.clone(),
            VideoReference::Vimeo(id) => id.to_string(),
        }
    }

    /// URL for loading the provider's player in an iframe
    pub fn embed_url(&self) -> String {
        match self {
            VideoReference::YouTube(id) => format!("http://www.youtube.com/embed/{id}"),
            VideoReference::Vimeo(id) => {
                format!("http://player.vimeo.com/video/{id}?title=0&byline=0&portrait=0")
            }
        }
    }

    pub fn watch_url(&self) -> String {
        match self {
            VideoReference::YouTube(id) => format!("http://www.youtube.com/v/{id}"),
            VideoReference::Vimeo(id) => format!("http://vimeo.com/{id}"),
        }
    }
}

/// Thumbnail URLs keyed by their index (0 is the first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThumbnailSet(BTreeMap<usize, String>);

impl ThumbnailSet {
    /// The four fixed-pattern YouTube thumbnails.
    pub fn youtube(id: &str) -> Self {
        (0..YOUTUBE_THUMB_COUNT)
            .map(|i| format!("http://img.youtube.com/vi/{id}/{i}.jpg"))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().map(|(i, url)| (*i, url.as_str()))
    }

    /// Pick one thumbnail when `index` names an entry, otherwise the whole set.
    ///
    /// Negative and too-large indices fall back to the whole set rather than
    /// failing; callers rely on this.
    pub fn select(self, index: Option<i64>) -> ThumbnailSelection {
        let picked = index
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| self.get(i).map(str::to_string));

        match picked {
            Some(url) => ThumbnailSelection::One(url),
            None => ThumbnailSelection::All(self),
        }
    }
}

impl FromIterator<String> for ThumbnailSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().enumerate().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ThumbnailSelection {
    One(String),
    All(ThumbnailSet),
}

/// Thumbnail URLs reported by Vimeo's metadata API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VimeoThumbnails {
    #[serde(rename = "thumbnail_small")]
    pub small: String,
    #[serde(rename = "thumbnail_medium")]
    pub medium: String,
    #[serde(rename = "thumbnail_large")]
    pub large: String,
}

impl From<VimeoThumbnails> for ThumbnailSet {
    fn from(thumbs: VimeoThumbnails) -> Self {
        [thumbs.small, thumbs.medium, thumbs.large]
            .into_iter()
            .collect()
    }
}
