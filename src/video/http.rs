use std::error::Error;

use reqwest::blocking::Client;

use crate::config::ResolverConfig;

/// Build the blocking client shared by the production collaborators.
pub fn build_client(config: &ResolverConfig) -> anyhow::Result<Client> {
    let mut client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .connect_timeout(config.timeout());

    if let Some(proxy) = &config.proxy {
        log::debug!("using proxy {proxy:#?}");
        client = client.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(client.build()?)
}

/// Innermost cause of a reqwest failure, which is usually the readable one.
pub fn describe_error(error: &reqwest::Error) -> String {
    match error.source() {
        Some(e) => match e.source() {
            Some(e) => e.to_string(),
            None => e.to_string(),
        },
        None => error.to_string(),
    }
}

/// `host/path` of a URL, used to tag log lines.
pub fn iden(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(parsed) => format!("{}{}", parsed.host_str().unwrap_or_default(), parsed.path()),
        Err(_) => url.to_string(),
    }
}
