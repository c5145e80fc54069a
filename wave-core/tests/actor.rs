mod support;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use wave_config::CacheConfig;
use wave_core::listing::{FetchError, FixtureUserListing, UserListing};
use wave_core::store::{UsersEvent, UsersStore};
use wave_core::StoreError;
use wave_model::{NewUser, User, UserId};

use support::{harness, user};

/// Listing whose request never finishes; records when it is dropped.
struct HangingListing {
    started: Arc<Notify>,
    dropped: Arc<AtomicBool>,
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserListing for HangingListing {
    async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        let _flag = DropFlag(self.dropped.clone());
        self.started.notify_one();
        std::future::pending::<()>().await;
        Ok(Vec::new())
    }
}

/// First request waits for `release`; every later request panics.
struct PanicsAfterFirstListing {
    calls: AtomicUsize,
    started: Arc<Notify>,
    release: Arc<Notify>,
}

#[async_trait]
impl UserListing for PanicsAfterFirstListing {
    async fn list_users(&self) -> Result<Vec<User>, FetchError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) > 0 {
            panic!("listing backend crashed");
        }
        self.started.notify_one();
        self.release.notified().await;
        Ok(vec![user(1, "Alpha")])
    }
}

async fn wait_until(flag: &AtomicBool) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !flag.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("flag was not set in time");
}

#[tokio::test]
async fn handle_serves_the_store_surface() {
    let h = harness(FixtureUserListing::new(vec![user(2, "Bravo"), user(5, "Echo")]));
    let listing = h.listing.clone();
    let handle = h.store.spawn();

    assert_eq!(
        handle.fetch_users().await,
        Ok(UsersEvent::Loaded { count: 2 })
    );
    assert_eq!(handle.fetch_users().await, Ok(UsersEvent::CacheHit));
    assert_eq!(listing.calls(), 1);

    let id = handle
        .add_user(NewUser {
            name: "Golf".to_string(),
            ..NewUser::default()
        })
        .await
        .expect("add");
    assert_eq!(id, UserId(6));

    assert_eq!(
        handle.update_user(user(42, "Ghost")).await,
        Err(StoreError::UserNotFound(UserId(42)))
    );
    handle.delete_user(UserId(2)).await.expect("delete");

    let names: Vec<String> = handle
        .snapshot()
        .users()
        .iter()
        .map(|u| u.name.clone())
        .collect();
    assert_eq!(names, vec!["Echo", "Golf"]);
}

#[tokio::test]
async fn local_mutations_proceed_while_a_fetch_is_outstanding() {
    let started = Arc::new(Notify::new());
    let dropped = Arc::new(AtomicBool::new(false));
    let store = UsersStore::new(
        Arc::new(HangingListing {
            started: started.clone(),
            dropped: dropped.clone(),
        }),
        &CacheConfig::default(),
    );
    let handle = store.spawn();

    let fetching = {
        let handle = handle.clone();
        tokio::spawn(async move { handle.fetch_users().await })
    };
    started.notified().await;
    assert!(handle.snapshot().is_loading());

    let id = handle.add_user(NewUser::default()).await.expect("add");
    assert_eq!(id, UserId(1));
    assert!(handle.snapshot().is_loading());
    assert!(!fetching.is_finished());

    fetching.abort();
}

#[tokio::test]
async fn dropping_every_handle_aborts_in_flight_fetch() {
    let started = Arc::new(Notify::new());
    let dropped = Arc::new(AtomicBool::new(false));
    let store = UsersStore::new(
        Arc::new(HangingListing {
            started: started.clone(),
            dropped: dropped.clone(),
        }),
        &CacheConfig::default(),
    );
    let handle = store.spawn();
    let mut observer = handle.subscribe();

    let fetching = {
        let handle = handle.clone();
        tokio::spawn(async move { handle.fetch_users().await })
    };
    started.notified().await;

    // The spawned caller holds the last clone; stopping it closes the
    // command channel.
    drop(handle);
    fetching.abort();

    wait_until(&dropped).await;
    assert!(observer.borrow_and_update().is_loading());
}

#[tokio::test]
async fn task_keeps_running_while_any_handle_remains() {
    let started = Arc::new(Notify::new());
    let dropped = Arc::new(AtomicBool::new(false));
    let store = UsersStore::new(
        Arc::new(HangingListing {
            started: started.clone(),
            dropped: dropped.clone(),
        }),
        &CacheConfig::default(),
    );
    let handle = store.spawn();
    let clone = handle.clone();

    let waiting = tokio::spawn(async move { clone.fetch_users().await });
    started.notified().await;
    drop(handle);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!dropped.load(Ordering::SeqCst));

    waiting.abort();
    wait_until(&dropped).await;
}

#[tokio::test]
async fn panicking_newest_fetch_becomes_an_error_while_older_one_runs() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let store = UsersStore::new(
        Arc::new(PanicsAfterFirstListing {
            calls: AtomicUsize::new(0),
            started: started.clone(),
            release: release.clone(),
        }),
        &CacheConfig::default(),
    );
    let handle = store.spawn();

    let first = {
        let handle = handle.clone();
        tokio::spawn(async move { handle.fetch_users().await })
    };
    started.notified().await;

    let second = tokio::time::timeout(Duration::from_secs(2), handle.refetch_users())
        .await
        .expect("panicked fetch must still answer");
    match second {
        Ok(UsersEvent::LoadFailed { error }) => {
            assert!(error.starts_with("Failed to fetch users"), "{error}");
        }
        other => panic!("expected a failed load, got {other:?}"),
    }

    let state = handle.snapshot();
    assert!(!state.is_loading());
    assert!(state.in_flight().is_none());
    assert!(state.error().is_some());

    release.notify_one();
    let first = tokio::time::timeout(Duration::from_secs(2), first)
        .await
        .expect("first fetch finishes")
        .expect("join");
    assert!(matches!(first, Ok(UsersEvent::Superseded(_))));
    assert!(handle.snapshot().users().is_empty());
}

#[test]
fn calls_after_the_task_is_gone_report_closed() {
    let store_runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let store = harness(FixtureUserListing::new(Vec::new())).store;
    let handle = store_runtime.block_on(async { store.spawn() });
    drop(store_runtime);

    let caller = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    assert_eq!(caller.block_on(handle.fetch_users()), Err(StoreError::Closed));
    assert_eq!(
        caller.block_on(handle.add_user(NewUser::default())),
        Err(StoreError::Closed)
    );
}
