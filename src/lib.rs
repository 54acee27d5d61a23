pub mod config;
pub mod errors;
pub mod video;

#[cfg(test)]
mod tests;

pub use config::ResolverConfig;
pub use errors::{ResolveError, ResolveResult};
pub use video::{
    ThumbnailSelection, ThumbnailSet, VideoProvider, VideoReference, VideoResolver,
};
