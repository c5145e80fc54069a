//! Core data model definitions shared across Wave crates.
#![allow(missing_docs)]

pub mod draft;
pub mod error;
pub mod field;
pub mod ids;
pub mod user;

pub use draft::{DraftAddress, DraftCompany, UserDraft};
pub use error::{ModelError, Result as ModelResult};
pub use field::FieldPath;
pub use ids::UserId;
pub use user::{
    Address, Company, DEFAULT_COMPANY_BS, DEFAULT_GEO_COORDINATE, Geo,
    NewUser, User,
};
