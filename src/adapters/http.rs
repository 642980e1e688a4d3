use crate::core::StatusSource;
use crate::utils::error::Result;
use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// `StatusSource` backed by a reqwest client.
///
/// Sends a bare GET: no custom headers, query or body. The client still carries its
/// default user agent, without which GitHub's API refuses the request.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    client: Client,
}

impl HttpStatusSource {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch_status(&self, url: &str) -> Result<u16> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        tracing::debug!("API response status: {}", response.status());
        Ok(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_status_returns_code() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(404);
            })
            .await;

        let source = HttpStatusSource::new().unwrap();
        let status = source.fetch_status(&server.url("/")).await.unwrap();

        assert_eq!(status, 404);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_carries_default_user_agent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/").header("user-agent", USER_AGENT);
                then.status(200);
            })
            .await;

        let source = HttpStatusSource::new().unwrap();
        let status = source.fetch_status(&server.url("/")).await.unwrap();

        assert_eq!(status, 200);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let source = HttpStatusSource::new().unwrap();
        let result = source
            .fetch_status(&format!("http://127.0.0.1:{}/", port))
            .await;

        assert!(matches!(result, Err(crate::utils::error::ProbeError::Http(_))));
    }
}
