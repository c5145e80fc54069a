//! Sorting of user rows by a single column.

pub mod natural;

pub use natural::natural_cmp;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use wave_model::User;

/// Column a user list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Name,
    Email,
    City,
    CompanyName,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::Email,
        SortKey::City,
        SortKey::CompanyName,
    ];

    /// Field path of the column, e.g. `address.city`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Email => "email",
            SortKey::City => "address.city",
            SortKey::CompanyName => "company.name",
        }
    }

    pub fn value(self, user: &User) -> &str {
        match self {
            SortKey::Name => &user.name,
            SortKey::Email => &user.email,
            SortKey::City => user.city(),
            SortKey::CompanyName => user.company_name(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key `{0}`")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Flip the comparator sign for descending order. Equal stays equal, so
    /// a stable sort keeps ties in input order either way.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Column header click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        self.direction
            .apply(natural_cmp(self.key.value(a), self.key.value(b)))
    }
}

/// Stable in-place sort.
pub fn sort_users(users: &mut [&User], sort: SortConfig) {
    users.sort_by(|a, b| sort.compare(a, b));
}
