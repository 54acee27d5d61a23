use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{Args, Command};
use vidref::{ResolverConfig, VideoResolver};

const CONFIG_ENV: &str = "VIDREF_CONFIG";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(global: &cli::GlobalArgs) -> anyhow::Result<ResolverConfig> {
    let path = global
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let mut config = match path {
        Some(path) => ResolverConfig::load_with(path)?,
        None => ResolverConfig::default(),
    };

    if let Some(timeout) = global.timeout {
        config.timeout_secs = timeout;
    }

    config.validate()?;

    Ok(config)
}

/// Print a result as json. Nothing found prints `false` and exits with 1.
fn print<T: Serialize>(value: Option<T>) -> anyhow::Result<()> {
    match value {
        Some(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        None => {
            println!("false");
            std::process::exit(1);
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();
    let config = load_config(&args.global)?;
    tracing::debug!(timeout_secs = config.timeout_secs, "config loaded");

    let resolver = VideoResolver::from_config(&config)?;

    match args.command {
        Command::Iframe { url } => print(resolver.video_iframe(&url)),
        Command::Resolve { url } => print(resolver.resolve(&url)),
        Command::YoutubeId { url } => print(resolver.youtube_id(&url)),
        Command::VimeoId { url } => print(resolver.vimeo_id(&url)),
        Command::YoutubeUrl { id } => print(resolver.youtube_url(&id)),
        Command::VimeoUrl { id } => print(resolver.vimeo_url(id)),
        Command::YoutubeThumbs { id_or_url, index } => {
            print(resolver.youtube_thumbs(&id_or_url, index))
        }
        Command::VimeoThumbs { id_or_url, index } => {
            print(resolver.vimeo_thumbs(&id_or_url, index))
        }
    }
}
