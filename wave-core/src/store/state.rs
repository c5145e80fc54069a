use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use wave_config::CacheConfig;
use wave_model::User;

/// Identifies one started fetch. Only the completion carrying the id of the
/// newest request may write state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub(super) u64);

impl RequestId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse lifecycle of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus<'a> {
    /// Nothing fetched or failed yet.
    Idle,
    Loading,
    Ready { error: Option<&'a str> },
}

/// Everything the users store owns.
#[derive(Debug, Clone, PartialEq)]
pub struct UsersState {
    pub(super) users: Vec<User>,
    pub(super) loading: bool,
    pub(super) error: Option<String>,
    pub(super) last_fetched: Option<DateTime<Utc>>,
    pub(super) staleness_window: TimeDelta,
    pub(super) in_flight: Option<RequestId>,
    pub(super) next_request: u64,
}

impl Default for UsersState {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

impl UsersState {
    pub fn new(staleness_window: TimeDelta) -> Self {
        Self {
            users: Vec::new(),
            loading: false,
            error: None,
            last_fetched: None,
            staleness_window,
            in_flight: None,
            next_request: 1,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        let window = TimeDelta::from_std(config.staleness_window)
            .unwrap_or(TimeDelta::MAX);
        Self::new(window)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        self.last_fetched
    }

    pub fn staleness_window(&self) -> TimeDelta {
        self.staleness_window
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// A successful fetch happened less than one staleness window before
    /// `at`.
    pub fn is_fresh(&self, at: DateTime<Utc>) -> bool {
        self.last_fetched
            .is_some_and(|fetched| at - fetched < self.staleness_window)
    }

    pub fn status(&self) -> StoreStatus<'_> {
        if self.loading {
            StoreStatus::Loading
        } else if self.last_fetched.is_none() && self.error.is_none() {
            StoreStatus::Idle
        } else {
            StoreStatus::Ready {
                error: self.error.as_deref(),
            }
        }
    }

    pub(super) fn begin_request(&mut self) -> RequestId {
        let request = RequestId(self.next_request);
        self.next_request += 1;
        self.in_flight = Some(request);
        self.loading = true;
        self.error = None;
        request
    }

    pub(super) fn is_current(&self, request: RequestId) -> bool {
        self.in_flight == Some(request)
    }
}
