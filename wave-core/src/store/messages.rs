use chrono::{DateTime, Utc};
use wave_model::{NewUser, User, UserId};

use super::state::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Serve from memory while the last success is inside the staleness
    /// window.
    IfStale,
    /// Always issue a request.
    Force,
}

/// Every state transition of the users store.
///
/// Timestamps are carried by the message, never read by the reducer, so a
/// recorded message log replays to the same state.
#[derive(Debug, Clone, PartialEq)]
pub enum UsersMessage {
    FetchRequested {
        mode: FetchMode,
        at: DateTime<Utc>,
    },
    FetchSucceeded {
        request: RequestId,
        users: Vec<User>,
        at: DateTime<Utc>,
    },
    FetchFailed {
        request: RequestId,
        error: String,
    },
    /// The caller stopped waiting before the request finished.
    FetchAbandoned {
        request: RequestId,
    },
    UserAdded(NewUser),
    UserUpdated(User),
    UserDeleted(UserId),
    ErrorCleared,
}

impl UsersMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchRequested { .. } => "Users::FetchRequested",
            Self::FetchSucceeded { .. } => "Users::FetchSucceeded",
            Self::FetchFailed { .. } => "Users::FetchFailed",
            Self::FetchAbandoned { .. } => "Users::FetchAbandoned",
            Self::UserAdded(_) => "Users::UserAdded",
            Self::UserUpdated(_) => "Users::UserUpdated",
            Self::UserDeleted(_) => "Users::UserDeleted",
            Self::ErrorCleared => "Users::ErrorCleared",
        }
    }
}
