//! User record as served by the listing endpoint.

use crate::ids::UserId;

/// Coordinate placeholder for locally created users (no geocoding).
pub const DEFAULT_GEO_COORDINATE: &str = "0";

/// Placeholder `company.bs` for locally created users.
pub const DEFAULT_COMPANY_BS: &str = "business services";

/// One person record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phone: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    #[cfg_attr(feature = "serde", serde(default))]
    pub street: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub suite: String,
    pub city: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub zipcode: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub geo: Geo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

impl Default for Geo {
    fn default() -> Self {
        Geo {
            lat: DEFAULT_GEO_COORDINATE.to_string(),
            lng: DEFAULT_GEO_COORDINATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Company {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub catch_phrase: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bs: String,
}

/// A user record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

impl NewUser {
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
            address: self.address,
            phone: self.phone,
            website: self.website,
            company: self.company,
        }
    }
}

impl User {
    /// City from the nested address; used by sorting and list rows.
    pub fn city(&self) -> &str {
        &self.address.city
    }

    pub fn company_name(&self) -> &str {
        &self.company.name
    }
}
