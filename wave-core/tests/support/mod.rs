#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use wave_config::CacheConfig;
use wave_core::UsersStore;
use wave_core::listing::FixtureUserListing;
use wave_core::store::ManualClock;
use wave_model::{Address, Company, Geo, User, UserId};

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

pub fn user(id: u64, name: &str) -> User {
    let handle = name.to_lowercase().replace(' ', ".");
    User {
        id: UserId(id),
        name: name.to_string(),
        username: handle.clone(),
        email: format!("{handle}@example.com"),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        phone: "1-770-736-8031".to_string(),
        website: "hildegard.org".to_string(),
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

pub struct Harness {
    pub store: UsersStore,
    pub listing: Arc<FixtureUserListing>,
    pub clock: Arc<ManualClock>,
}

pub fn harness(listing: FixtureUserListing) -> Harness {
    let listing = Arc::new(listing);
    let clock = Arc::new(ManualClock::new(start_time()));
    let store = UsersStore::with_clock(
        listing.clone(),
        clock.clone(),
        &CacheConfig::default(),
    );
    Harness {
        store,
        listing,
        clock,
    }
}

/// Route store logs to the test writer when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
