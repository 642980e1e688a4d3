use crate::utils::error::Result;
use async_trait::async_trait;

/// Performs a single GET and reports the response status code.
///
/// An `Err` means no response arrived at all (DNS, refused connection, TLS).
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self, url: &str) -> Result<u16>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
}
