use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;
use wave_model::User;

use super::{FetchError, UserListing};

/// What a [`FixtureUserListing`] answers with.
#[derive(Debug, Clone)]
pub enum FixtureResponse {
    Users(Vec<User>),
    Status(StatusCode),
}

/// In-memory listing for demos and tests that counts the requests it
/// receives.
#[derive(Debug)]
pub struct FixtureUserListing {
    response: Mutex<FixtureResponse>,
    calls: AtomicUsize,
}

impl FixtureUserListing {
    pub fn new(users: Vec<User>) -> Self {
        Self::with_response(FixtureResponse::Users(users))
    }

    pub fn failing(status: StatusCode) -> Self {
        Self::with_response(FixtureResponse::Status(status))
    }

    pub fn with_response(response: FixtureResponse) -> Self {
        Self {
            response: Mutex::new(response),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the answer for subsequent requests.
    pub fn respond_with(&self, response: FixtureResponse) {
        *self.response.lock().unwrap_or_else(|e| e.into_inner()) = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserListing for FixtureUserListing {
    async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response =
            self.response.lock().unwrap_or_else(|e| e.into_inner()).clone();
        match response {
            FixtureResponse::Users(users) => Ok(users),
            FixtureResponse::Status(status) => Err(FetchError::Status(status)),
        }
    }
}
