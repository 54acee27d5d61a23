use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[clap(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to a yaml config file.
    /// Falls back to $VIDREF_CONFIG.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Timeout for every remote request, in seconds
    #[clap(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the embeddable player url for a YouTube or Vimeo url
    Iframe {
        /// A url
        #[clap(allow_hyphen_values = true)]
        url: String,
    },
    /// Print provider and id for a YouTube or Vimeo url
    Resolve {
        /// A url
        #[clap(allow_hyphen_values = true)]
        url: String,
    },
    /// Extract a live YouTube id from a url
    YoutubeId {
        #[clap(allow_hyphen_values = true)]
        url: String,
    },
    /// Extract a live Vimeo id from a url
    VimeoId {
        #[clap(allow_hyphen_values = true)]
        url: String,
    },
    /// Print the YouTube video url for an id
    YoutubeUrl {
        /// YouTube id (may start with a hyphen)
        #[clap(allow_hyphen_values = true)]
        id: String,
    },
    /// Print the Vimeo video url for an id
    VimeoUrl { id: u64 },
    /// Print YouTube thumbnail urls
    YoutubeThumbs {
        /// YouTube url or id
        #[clap(allow_hyphen_values = true)]
        id_or_url: String,

        /// Pick a single thumbnail (0-3).
        /// Anything else prints all of them.
        #[clap(short, long, allow_negative_numbers = true)]
        index: Option<i64>,
    },
    /// Print Vimeo thumbnail urls
    VimeoThumbs {
        /// Vimeo url or numeric id
        id_or_url: String,

        /// Pick a single thumbnail (0-2).
        /// Anything else prints all of them.
        #[clap(short, long, allow_negative_numbers = true)]
        index: Option<i64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_thumbs_with_index() {
        let args = Args::try_parse_from([
            "vidref",
            "youtube-thumbs",
            "https://youtu.be/abc",
            "--index",
            "2",
        ])
        .unwrap();

        match args.command {
            Command::YoutubeThumbs { id_or_url, index } => {
                assert_eq!(id_or_url, "https://youtu.be/abc");
                assert_eq!(index, Some(2));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_index() {
        let args =
            Args::try_parse_from(["vidref", "vimeo-thumbs", "42", "-i", "-1"]).unwrap();
        assert!(matches!(
            args.command,
            Command::VimeoThumbs { index: Some(-1), .. }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "vidref",
            "iframe",
            "https://vimeo.com/42",
            "--timeout",
            "3",
            "--config",
            "/tmp/vidref.yaml",
        ])
        .unwrap();

        assert_eq!(args.global.timeout, Some(3));
        assert_eq!(
            args.global.config.as_deref(),
            Some(std::path::Path::new("/tmp/vidref.yaml"))
        );
    }

    #[test]
    fn test_vimeo_url_requires_number() {
        assert!(Args::try_parse_from(["vidref", "vimeo-url", "abc"]).is_err());
    }
}
