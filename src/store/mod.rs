//! Single-writer application store.
//!
//! One tokio task owns `AppState`. Everything else talks to it through a
//! cloneable `Dispatcher`: actions go in over a bounded channel and are
//! applied strictly in receipt order, new snapshots come out over a
//! `watch` channel.

mod root;

pub use root::{AppAction, AppState, RootReducer};

use std::collections::VecDeque;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::mvi::{Action, Reducer};

/// Default command buffer size.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Most recent action kinds kept by `spawn_with_history`.
pub const HISTORY_LIMIT: usize = 1024;

/// Errors returned to dispatchers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store task has stopped")]
    Disconnected,

    #[error("Store command channel is full")]
    Full,
}

/// Messages processed by the store task.
pub enum StoreCommand {
    Dispatch(AppAction),
    GetState {
        respond_to: oneshot::Sender<AppState>,
    },
    GetHistory {
        respond_to: oneshot::Sender<Vec<&'static str>>,
    },
}

/// Owner of `AppState`. Runs until every `Dispatcher` is dropped.
pub struct Store {
    state: AppState,
    receiver: mpsc::Receiver<StoreCommand>,
    publisher: watch::Sender<AppState>,
    history: Option<VecDeque<&'static str>>,
}

impl Store {
    /// Spawn the store task.
    ///
    /// The join handle resolves to the final state once all dispatchers
    /// are gone.
    pub fn spawn(initial: AppState, capacity: usize) -> (Dispatcher, JoinHandle<AppState>) {
        Self::spawn_inner(initial, capacity, false)
    }

    /// Like `spawn`, but also records the kinds of applied actions.
    ///
    /// Meant for tests and diagnostics. Only the last `HISTORY_LIMIT`
    /// kinds are kept.
    pub fn spawn_with_history(
        initial: AppState,
        capacity: usize,
    ) -> (Dispatcher, JoinHandle<AppState>) {
        Self::spawn_inner(initial, capacity, true)
    }

    fn spawn_inner(
        initial: AppState,
        capacity: usize,
        record_history: bool,
    ) -> (Dispatcher, JoinHandle<AppState>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let (publisher, watcher) = watch::channel(initial.clone());

        let store = Store {
            state: initial,
            receiver,
            publisher,
            history: record_history.then(VecDeque::new),
        };

        let handle = tokio::spawn(store.run());
        (Dispatcher { sender, watcher }, handle)
    }

    async fn run(mut self) -> AppState {
        tracing::debug!("Store started");
        while let Some(command) = self.receiver.recv().await {
            match command {
                StoreCommand::Dispatch(action) => self.apply(action),
                StoreCommand::GetState { respond_to } => {
                    if respond_to.send(self.state.clone()).is_err() {
                        tracing::trace!("Store: GetState response dropped (receiver gone)");
                    }
                }
                StoreCommand::GetHistory { respond_to } => {
                    let history: Vec<&'static str> = self
                        .history
                        .as_ref()
                        .map(|h| h.iter().copied().collect())
                        .unwrap_or_default();
                    if respond_to.send(history).is_err() {
                        tracing::trace!("Store: GetHistory response dropped (receiver gone)");
                    }
                }
            }
        }
        tracing::debug!("Store stopped, all dispatchers dropped");
        self.state
    }

    fn apply(&mut self, action: AppAction) {
        let kind = action.kind();
        tracing::debug!(action = kind, "Applying action");

        let next = RootReducer::reduce(std::mem::take(&mut self.state), action);
        let changed = next != *self.publisher.borrow();
        if changed {
            self.publisher.send_replace(next.clone());
        }
        self.state = next;

        if let Some(history) = self.history.as_mut() {
            if history.len() == HISTORY_LIMIT {
                history.pop_front();
            }
            history.push_back(kind);
        }
    }
}

/// Cloneable handle for sending actions to the store and reading state.
#[derive(Clone)]
pub struct Dispatcher {
    sender: mpsc::Sender<StoreCommand>,
    watcher: watch::Receiver<AppState>,
}

impl Dispatcher {
    /// Queue an action. Actions from one dispatcher apply in call order.
    pub async fn dispatch(&self, action: impl Into<AppAction>) -> Result<(), StoreError> {
        self.sender
            .send(StoreCommand::Dispatch(action.into()))
            .await
            .map_err(|_| StoreError::Disconnected)
    }

    /// Queue an action without waiting for channel capacity.
    ///
    /// Usable from synchronous contexts such as `Drop`.
    pub fn try_dispatch(&self, action: impl Into<AppAction>) -> Result<(), StoreError> {
        self.sender
            .try_send(StoreCommand::Dispatch(action.into()))
            .map_err(|err| match err {
                mpsc::error::TrySendError::Full(_) => StoreError::Full,
                mpsc::error::TrySendError::Closed(_) => StoreError::Disconnected,
            })
    }

    /// Snapshot taken after every action previously dispatched through
    /// this handle has been applied.
    pub async fn state(&self) -> Result<AppState, StoreError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(StoreCommand::GetState { respond_to })
            .await
            .map_err(|_| StoreError::Disconnected)?;

        receiver.await.map_err(|_| StoreError::Disconnected)
    }

    /// Kinds of applied actions, oldest first, capped at `HISTORY_LIMIT`.
    ///
    /// Empty unless the store was started with `spawn_with_history`.
    pub async fn history(&self) -> Result<Vec<&'static str>, StoreError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(StoreCommand::GetHistory { respond_to })
            .await
            .map_err(|_| StoreError::Disconnected)?;

        receiver.await.map_err(|_| StoreError::Disconnected)
    }

    /// Latest published snapshot without a round trip to the store task.
    pub fn current(&self) -> AppState {
        self.watcher.borrow().clone()
    }

    /// Receiver notified each time the state changes.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.watcher.clone()
    }
}
