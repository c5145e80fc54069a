//! Users store transition function.

use wave_model::UserId;

use super::messages::{FetchMode, UsersMessage};
use super::state::{RequestId, UsersState};

/// Side effect the caller must run after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsersEffect {
    None,
    /// Call the listing endpoint and feed the result back tagged with this
    /// request.
    Fetch(RequestId),
}

/// What a transition did, for logging and for callers awaiting a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersEvent {
    FetchStarted(RequestId),
    CacheHit,
    Loaded { count: usize },
    LoadFailed { error: String },
    /// The newest request was dropped unfinished; loading stopped without
    /// recording an error.
    Abandoned(RequestId),
    /// Completion of a request that is no longer the newest one.
    Superseded(RequestId),
    Added(UserId),
    Updated(UserId),
    Removed(UserId),
    NotFound(UserId),
    ErrorCleared,
}

impl UsersEvent {
    /// Whether the transition that produced this event left state untouched.
    pub fn is_noop(&self) -> bool {
        matches!(
            self,
            UsersEvent::CacheHit
                | UsersEvent::Superseded(_)
                | UsersEvent::NotFound(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersUpdate {
    pub effect: UsersEffect,
    pub event: UsersEvent,
}

impl UsersUpdate {
    fn event(event: UsersEvent) -> Self {
        Self {
            effect: UsersEffect::None,
            event,
        }
    }

    fn fetch(request: RequestId) -> Self {
        Self {
            effect: UsersEffect::Fetch(request),
            event: UsersEvent::FetchStarted(request),
        }
    }
}

pub fn update(state: &mut UsersState, message: UsersMessage) -> UsersUpdate {
    tracing::debug!(message = message.name(), "users update");

    match message {
        UsersMessage::FetchRequested { mode, at } => {
            if mode == FetchMode::IfStale && state.is_fresh(at) {
                return UsersUpdate::event(UsersEvent::CacheHit);
            }
            UsersUpdate::fetch(state.begin_request())
        }

        UsersMessage::FetchSucceeded { request, users, at } => {
            if !state.is_current(request) {
                return UsersUpdate::event(UsersEvent::Superseded(request));
            }
            let count = users.len();
            state.users = users;
            state.error = None;
            state.last_fetched = Some(at);
            state.loading = false;
            state.in_flight = None;
            UsersUpdate::event(UsersEvent::Loaded { count })
        }

        UsersMessage::FetchFailed { request, error } => {
            if !state.is_current(request) {
                return UsersUpdate::event(UsersEvent::Superseded(request));
            }
            state.error = Some(error.clone());
            state.loading = false;
            state.in_flight = None;
            UsersUpdate::event(UsersEvent::LoadFailed { error })
        }

        UsersMessage::FetchAbandoned { request } => {
            if !state.is_current(request) {
                return UsersUpdate::event(UsersEvent::Superseded(request));
            }
            state.loading = false;
            state.in_flight = None;
            UsersUpdate::event(UsersEvent::Abandoned(request))
        }

        UsersMessage::UserAdded(new_user) => {
            let id = UserId::next_after(state.users.iter().map(|u| u.id));
            state.users.push(new_user.with_id(id));
            UsersUpdate::event(UsersEvent::Added(id))
        }

        UsersMessage::UserUpdated(user) => {
            let id = user.id;
            match state.users.iter_mut().find(|existing| existing.id == id) {
                Some(slot) => {
                    *slot = user;
                    UsersUpdate::event(UsersEvent::Updated(id))
                }
                None => UsersUpdate::event(UsersEvent::NotFound(id)),
            }
        }

        UsersMessage::UserDeleted(id) => {
            match state.users.iter().position(|user| user.id == id) {
                Some(index) => {
                    state.users.remove(index);
                    UsersUpdate::event(UsersEvent::Removed(id))
                }
                None => UsersUpdate::event(UsersEvent::NotFound(id)),
            }
        }

        UsersMessage::ErrorCleared => {
            state.error = None;
            UsersUpdate::event(UsersEvent::ErrorCleared)
        }
    }
}
