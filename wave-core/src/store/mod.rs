//! Users data store.
//!
//! [`UsersStore`] owns the canonical user collection and funnels every
//! change through [`update`], the pure transition function. The only
//! suspending operation is the listing fetch; everything else runs to
//! completion synchronously. Observers follow changes through a
//! `tokio::sync::watch` receiver.
//!
//! For callers on several threads, [`actor::spawn`] moves the store into an
//! owning task and hands out cloneable [`UsersStoreHandle`]s.

pub mod actor;
pub mod clock;
pub mod messages;
pub mod state;
pub mod update;

pub use actor::UsersStoreHandle;
pub use clock::{Clock, ManualClock, SystemClock};
pub use messages::{FetchMode, UsersMessage};
pub use state::{RequestId, StoreStatus, UsersState};
pub use update::{UsersEffect, UsersEvent, UsersUpdate, update};

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use wave_config::CacheConfig;
use wave_model::{NewUser, User, UserId};

use crate::error::StoreError;
use crate::listing::UserListing;

pub struct UsersStore {
    listing: Arc<dyn UserListing>,
    clock: Arc<dyn Clock>,
    state: watch::Sender<UsersState>,
}

impl fmt::Debug for UsersStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("UsersStore")
            .field("clock", &self.clock)
            .field("users", &state.users().len())
            .field("loading", &state.is_loading())
            .field("error", &state.error())
            .finish()
    }
}

impl UsersStore {
    pub fn new(listing: Arc<dyn UserListing>, cache: &CacheConfig) -> Self {
        Self::with_clock(listing, Arc::new(SystemClock), cache)
    }

    pub fn with_clock(
        listing: Arc<dyn UserListing>,
        clock: Arc<dyn Clock>,
        cache: &CacheConfig,
    ) -> Self {
        let (state, _) = watch::channel(UsersState::from_config(cache));
        Self {
            listing,
            clock,
            state,
        }
    }

    /// Apply one message, waking subscribers only when state changed.
    pub fn dispatch(&self, message: UsersMessage) -> UsersUpdate {
        let mut outcome = None;
        self.state.send_if_modified(|state| {
            let result = update(state, message);
            let modified = !result.event.is_noop();
            outcome = Some(result);
            modified
        });
        match outcome {
            Some(outcome) => outcome,
            None => unreachable!("send_if_modified always runs its closure"),
        }
    }

    /// Fetch unless the last success is inside the staleness window.
    pub async fn fetch_users(&self) -> UsersEvent {
        self.fetch(FetchMode::IfStale).await
    }

    /// Fetch regardless of staleness.
    pub async fn refetch_users(&self) -> UsersEvent {
        self.fetch(FetchMode::Force).await
    }

    async fn fetch(&self, mode: FetchMode) -> UsersEvent {
        let started = self.request_fetch(mode);
        match started.effect {
            UsersEffect::Fetch(request) => {
                let guard = InFlight {
                    store: self,
                    request: Some(request),
                };
                let completion = perform_fetch(
                    Arc::clone(&self.listing),
                    Arc::clone(&self.clock),
                    request,
                )
                .await;
                guard.disarm();
                self.dispatch(completion).event
            }
            UsersEffect::None => started.event,
        }
    }

    fn request_fetch(&self, mode: FetchMode) -> UsersUpdate {
        self.dispatch(UsersMessage::FetchRequested {
            mode,
            at: self.clock.now(),
        })
    }

    /// Append a locally created user and return the id it was given.
    pub fn add_user(&self, user: NewUser) -> UserId {
        match self.dispatch(UsersMessage::UserAdded(user)).event {
            UsersEvent::Added(id) => id,
            other => unreachable!("UserAdded produced {other:?}"),
        }
    }

    pub fn update_user(&self, user: User) -> Result<(), StoreError> {
        match self.dispatch(UsersMessage::UserUpdated(user)).event {
            UsersEvent::NotFound(id) => Err(StoreError::UserNotFound(id)),
            _ => Ok(()),
        }
    }

    pub fn delete_user(&self, id: UserId) -> Result<(), StoreError> {
        match self.dispatch(UsersMessage::UserDeleted(id)).event {
            UsersEvent::NotFound(id) => Err(StoreError::UserNotFound(id)),
            _ => Ok(()),
        }
    }

    pub fn clear_error(&self) {
        self.dispatch(UsersMessage::ErrorCleared);
    }

    /// Borrow the current state. Hold the guard briefly; it blocks
    /// dispatches until dropped.
    pub fn state(&self) -> watch::Ref<'_, UsersState> {
        self.state.borrow()
    }

    pub fn snapshot(&self) -> UsersState {
        self.state.borrow().clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.state.borrow().users().to_vec()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error().map(str::to_owned)
    }

    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        self.state.borrow().last_fetched()
    }

    pub fn subscribe(&self) -> watch::Receiver<UsersState> {
        self.state.subscribe()
    }

    /// Move the store into its own task; see [`actor`].
    pub fn spawn(self) -> UsersStoreHandle {
        actor::spawn(self)
    }
}

/// Closes out a fetch whose future is dropped before the listing answers.
struct InFlight<'a> {
    store: &'a UsersStore,
    request: Option<RequestId>,
}

impl InFlight<'_> {
    fn disarm(mut self) {
        self.request = None;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(request) = self.request.take() {
            tracing::debug!(%request, "users fetch dropped before completion");
            self.store.dispatch(UsersMessage::FetchAbandoned { request });
        }
    }
}

/// Run one listing request and turn its outcome into the completion
/// message for `request`.
async fn perform_fetch(
    listing: Arc<dyn UserListing>,
    clock: Arc<dyn Clock>,
    request: RequestId,
) -> UsersMessage {
    match listing.list_users().await {
        Ok(users) => {
            tracing::info!(%request, count = users.len(), "fetched users");
            UsersMessage::FetchSucceeded {
                request,
                users,
                at: clock.now(),
            }
        }
        Err(err) => {
            tracing::warn!(%request, error = %err, "failed to fetch users");
            UsersMessage::FetchFailed {
                request,
                error: err.to_string(),
            }
        }
    }
}
