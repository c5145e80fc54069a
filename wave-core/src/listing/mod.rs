//! Port for the remote, read-only users listing endpoint.

mod fixture;
mod http;

pub use fixture::{FixtureResponse, FixtureUserListing};
pub use http::HttpUserListing;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use wave_model::User;

/// Why a listing request produced no users.
///
/// The `Display` text is what the store keeps as its `error` message.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No endpoint configured; no request was attempted.
    #[error("Users API URL is not configured")]
    MissingEndpoint,

    #[error("Failed to fetch users: {0}")]
    Status(StatusCode),

    #[error("Failed to fetch users: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to parse users response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Source of the canonical user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserListing: Send + Sync {
    /// Issue one request and return every user the endpoint lists.
    async fn list_users(&self) -> Result<Vec<User>, FetchError>;
}
