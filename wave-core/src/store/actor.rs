//! Owning task for the users store.
//!
//! The task is the single writer: handles send commands over an mpsc
//! channel and read state through a watch receiver. Fetches run in a
//! `JoinSet` so the task keeps serving local mutations while a request is
//! outstanding. When the last handle is dropped the task exits and the
//! `JoinSet` aborts any fetch still in flight, so no completion can land
//! after teardown.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::{self, JoinError, JoinSet};
use wave_model::{NewUser, User, UserId};

use super::messages::{FetchMode, UsersMessage};
use super::state::{RequestId, UsersState};
use super::update::{UsersEffect, UsersEvent};
use super::{UsersStore, perform_fetch};
use crate::error::StoreError;

const COMMAND_BUFFER: usize = 64;

#[derive(Debug)]
enum Command {
    Fetch {
        mode: FetchMode,
        reply: oneshot::Sender<UsersEvent>,
    },
    Add {
        user: NewUser,
        reply: oneshot::Sender<UserId>,
    },
    Update {
        user: User,
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
    Delete {
        id: UserId,
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
    ClearError,
}

/// Cloneable handle to a store running in its own task.
#[derive(Debug, Clone)]
pub struct UsersStoreHandle {
    commands: mpsc::Sender<Command>,
    state: watch::Receiver<UsersState>,
}

/// Move `store` into a new task on the current tokio runtime.
pub fn spawn(store: UsersStore) -> UsersStoreHandle {
    let (commands, inbox) = mpsc::channel(COMMAND_BUFFER);
    let state = store.subscribe();
    tokio::spawn(run(store, inbox));
    UsersStoreHandle { commands, state }
}

impl UsersStoreHandle {
    pub async fn fetch_users(&self) -> Result<UsersEvent, StoreError> {
        self.fetch(FetchMode::IfStale).await
    }

    pub async fn refetch_users(&self) -> Result<UsersEvent, StoreError> {
        self.fetch(FetchMode::Force).await
    }

    async fn fetch(&self, mode: FetchMode) -> Result<UsersEvent, StoreError> {
        self.request(|reply| Command::Fetch { mode, reply }).await
    }

    pub async fn add_user(&self, user: NewUser) -> Result<UserId, StoreError> {
        self.request(|reply| Command::Add { user, reply }).await
    }

    pub async fn update_user(&self, user: User) -> Result<(), StoreError> {
        self.request(|reply| Command::Update { user, reply }).await?
    }

    pub async fn delete_user(&self, id: UserId) -> Result<(), StoreError> {
        self.request(|reply| Command::Delete { id, reply }).await?
    }

    pub async fn clear_error(&self) -> Result<(), StoreError> {
        self.commands
            .send(Command::ClearError)
            .await
            .map_err(|_| StoreError::Closed)
    }

    pub fn snapshot(&self) -> UsersState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UsersState> {
        self.state.clone()
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, StoreError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)
    }
}

/// Fetches in flight, with the request each task belongs to.
#[derive(Default)]
struct Fetches {
    tasks: JoinSet<UsersMessage>,
    requests: HashMap<task::Id, RequestId>,
    waiting: HashMap<RequestId, Vec<oneshot::Sender<UsersEvent>>>,
}

async fn run(store: UsersStore, mut inbox: mpsc::Receiver<Command>) {
    let mut fetches = Fetches::default();

    tracing::debug!("users store task started");

    loop {
        tokio::select! {
            command = inbox.recv() => {
                let Some(command) = command else {
                    break;
                };
                handle_command(&store, command, &mut fetches);
            }
            Some(joined) = fetches.tasks.join_next_with_id(),
                if !fetches.tasks.is_empty() =>
            {
                handle_completion(&store, joined, &mut fetches);
            }
        }
    }

    if !fetches.tasks.is_empty() {
        tracing::debug!(
            in_flight = fetches.tasks.len(),
            "aborting users fetches on shutdown"
        );
    }
    fetches.tasks.abort_all();
    tracing::debug!("users store task stopped");
}

fn handle_command(store: &UsersStore, command: Command, fetches: &mut Fetches) {
    match command {
        Command::Fetch { mode, reply } => {
            let started = store.request_fetch(mode);
            match started.effect {
                UsersEffect::Fetch(request) => {
                    let task = fetches.tasks.spawn(perform_fetch(
                        Arc::clone(&store.listing),
                        Arc::clone(&store.clock),
                        request,
                    ));
                    fetches.requests.insert(task.id(), request);
                    fetches.waiting.entry(request).or_default().push(reply);
                }
                UsersEffect::None => {
                    let _ = reply.send(started.event);
                }
            }
        }
        Command::Add { user, reply } => {
            let _ = reply.send(store.add_user(user));
        }
        Command::Update { user, reply } => {
            let _ = reply.send(store.update_user(user));
        }
        Command::Delete { id, reply } => {
            let _ = reply.send(store.delete_user(id));
        }
        Command::ClearError => store.clear_error(),
    }
}

fn handle_completion(
    store: &UsersStore,
    joined: Result<(task::Id, UsersMessage), JoinError>,
    fetches: &mut Fetches,
) {
    match joined {
        Ok((task, message)) => {
            fetches.requests.remove(&task);
            let request = completed_request(&message);
            let event = store.dispatch(message).event;
            if let Some(request) = request {
                reply_all(fetches.waiting.remove(&request), &event);
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "users fetch task failed");
            let Some(request) = fetches.requests.remove(&err.id()) else {
                return;
            };
            // A superseded request dispatches as a no-op; the newest one
            // records the failure and stops loading.
            let event = store
                .dispatch(UsersMessage::FetchFailed {
                    request,
                    error: format!("Failed to fetch users: {err}"),
                })
                .event;
            reply_all(fetches.waiting.remove(&request), &event);
        }
    }
}

fn completed_request(message: &UsersMessage) -> Option<RequestId> {
    match message {
        UsersMessage::FetchSucceeded { request, .. }
        | UsersMessage::FetchFailed { request, .. } => Some(*request),
        _ => None,
    }
}

fn reply_all(
    replies: Option<Vec<oneshot::Sender<UsersEvent>>>,
    event: &UsersEvent,
) {
    for reply in replies.into_iter().flatten() {
        let _ = reply.send(event.clone());
    }
}
