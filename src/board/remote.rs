use reqwest::{Client, StatusCode};
use tracing::debug;

use super::domain::Aspirant;

/// Where the board obtains its roster. The seam keeps the board exercisable
/// without a network: tests substitute an in-memory source.
pub trait AspirantSource {
    fn fetch_all(&self) -> impl std::future::Future<Output = Result<Vec<Aspirant>, FetchError>> + Send;
}

/// Single failure class for the fetch path. Transport errors, non-2xx
/// responses, and undecodable bodies are all treated uniformly by callers.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to roster API failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("roster API answered with status {0}")]
    Status(StatusCode),
    #[error("roster payload is not a valid aspirant array: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Source backed by one HTTP GET against the configured roster endpoint.
#[derive(Debug, Clone)]
pub struct HttpAspirantSource {
    client: Client,
    url: String,
}

impl HttpAspirantSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AspirantSource for HttpAspirantSource {
    async fn fetch_all(&self) -> Result<Vec<Aspirant>, FetchError> {
        debug!(url = %self.url, "fetching aspirant roster");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let aspirants = response
            .json::<Vec<Aspirant>>()
            .await
            .map_err(FetchError::Decode)?;

        debug!(count = aspirants.len(), "roster fetched");
        Ok(aspirants)
    }
}
