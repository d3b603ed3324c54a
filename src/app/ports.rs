use crate::error::Result;
use async_trait::async_trait;

/// Outbound HTTP seam used by every feed fetcher
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpGetResult>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub status: u16,
    pub bytes: Vec<u8>,
}
