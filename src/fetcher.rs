use crate::model::FetchError;
use reqwest::Client;
use std::time::Duration;

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct SheetFetcher {
    client: Client,
}

impl SheetFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; OfertaWatcher/0.1)")
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for SheetFetcher {
    /// Single best-effort GET of the published CSV. A non-success status is
    /// a `FetchError` for this invocation; the caller decides when to rerun.
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status));
        }

        Ok(response.text().await?)
    }
}
