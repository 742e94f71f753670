use std::future::Future;

use reqwest::Client;
use tracing::debug;

use crate::lyrics::types::LyricsError;

/// Anything that can GET a page and hand back its body.
///
/// A non-2xx status or a broken connection is an `Err`; the engine never
/// turns those into not-found.
pub trait Fetch {
    fn get(&self, url: &str) -> impl Future<Output = Result<String, LyricsError>>;
}

/// Plain unauthenticated HTTP(S) fetcher.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String, LyricsError> {
        debug!(url, "GET");
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(LyricsError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.text().await?)
    }
}
