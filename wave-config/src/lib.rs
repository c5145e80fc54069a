//! Shared configuration library for Wave.
//!
//! Loads the listing endpoint, cache staleness window and page size from an
//! optional TOML file, the process environment and a `.env` file, and
//! reports non-fatal problems as [`ConfigWarnings`].

#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    CacheConfig, Config, ConfigMetadata, ListingConfig, PaginationConfig,
};
pub use validation::{ConfigWarning, ConfigWarnings};
