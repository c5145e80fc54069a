//! # Wave Core
//!
//! Client-side core of the Wave Health dashboard: the users data store, the
//! query pipeline that turns the collection into a rendered page, and the
//! validation and form state used when authoring a record.
//!
//! ## Architecture
//!
//! - [`listing`]: the remote listing endpoint port and its reqwest adapter
//! - [`store`]: reducer-driven users cache with a staleness window, plus an
//!   owning actor task for multi-threaded callers
//! - [`query`]: filter, natural-order sort and pagination over the collection
//! - [`validation`]: per-field rules and `validate_form`
//! - [`form`]: draft, touched and error tracking for the add/edit form
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use wave_config::ConfigLoader;
//! use wave_core::{
//!     listing::HttpUserListing, query::UsersListView, store::UsersStore,
//! };
//!
//! async fn first_page() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new().load()?.config;
//!     let listing = HttpUserListing::from_config(&config.listing)?;
//!     let store = UsersStore::new(Arc::new(listing), &config.cache);
//!
//!     store.fetch_users().await;
//!
//!     let view = UsersListView::from_config(&config.pagination);
//!     let page = view.render(&store.users());
//!     if let Some(summary) = page.summary() {
//!         println!("{summary}");
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]

pub mod error;
pub mod form;
pub mod listing;
pub mod query;
pub mod store;
pub mod validation;

pub use error::{FormError, StoreError};
pub use form::{SubmitOutcome, UserForm};
pub use listing::{FetchError, HttpUserListing, UserListing};
pub use query::{UserPage, UserQuery, UsersListView, project};
pub use store::{UsersState, UsersStore, UsersStoreHandle};
pub use validation::{FormErrors, validate_form};
