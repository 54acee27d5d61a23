pub mod classify;
pub mod http;
pub mod resolver;
pub mod status;
pub mod thumbnails;
pub mod types;

pub use classify::is_valid_url;
pub use resolver::VideoResolver;
pub use status::{HttpStatusChecker, StatusChecker};
pub use thumbnails::{ThumbnailMetadataProvider, VimeoApiThumbnails};
pub use types::{ThumbnailSelection, ThumbnailSet, VideoProvider, VideoReference, VimeoThumbnails};
