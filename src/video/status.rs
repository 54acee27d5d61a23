use reqwest::blocking::Client;

use crate::errors::{ResolveError, ResolveResult};
use crate::video::http::{describe_error, iden};

/// Answers "what status does this URL respond with right now".
pub trait StatusChecker: Send + Sync {
    fn status(&self, url: &str) -> ResolveResult<u16>;
}

/// Production checker: one blocking GET per call, body never read.
pub struct HttpStatusChecker {
    client: Client,
}

impl HttpStatusChecker {
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl StatusChecker for HttpStatusChecker {
    fn status(&self, url: &str) -> ResolveResult<u16> {
        let iden = iden(url);
        log::debug!("{iden}: requesting");

        match self.client.get(url).send() {
            Ok(resp) => {
                let status = resp.status();
                log::debug!("{iden}: {status}");
                Ok(status.as_u16())
            }
            Err(err) => {
                log::warn!("{iden}: {}", describe_error(&err));
                Err(ResolveError::from_transport(url, err))
            }
        }
    }
}
