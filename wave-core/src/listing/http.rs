use async_trait::async_trait;
use reqwest::Client;
use url::Url;
use wave_config::ListingConfig;
use wave_model::User;

use super::{FetchError, UserListing};

/// reqwest-backed listing adapter: one GET per call, JSON array body.
#[derive(Debug, Clone)]
pub struct HttpUserListing {
    client: Client,
    endpoint: Option<Url>,
}

impl HttpUserListing {
    pub fn from_config(config: &ListingConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self::with_client(client, config.endpoint.clone()))
    }

    pub fn with_client(client: Client, endpoint: Option<Url>) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }
}

#[async_trait]
impl UserListing for HttpUserListing {
    async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        let Some(endpoint) = &self.endpoint else {
            return Err(FetchError::MissingEndpoint);
        };

        tracing::debug!(%endpoint, "GET users listing");

        let response = self
            .client
            .get(endpoint.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        serde_json::from_slice(&body).map_err(FetchError::Decode)
    }
}
