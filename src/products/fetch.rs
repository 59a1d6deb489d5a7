//! Fetch orchestration.
//!
//! `fetch_products` is the only place that turns a network call into
//! phase signals. Errors never escape it: a failed fetch becomes a
//! `ProductAction::Failed` in the store, and the caller only learns the
//! outcome for logging.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{Dispatcher, StoreError};

use super::action::ProductAction;
use super::error::ErrorDescriptor;
use super::source::ProductSource;

/// What a single fetch invocation ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Success signal emitted with this many products.
    Loaded(usize),
    /// Failure signal emitted.
    Failed,
    /// Another fetch was already running; nothing was emitted.
    Skipped,
}

/// How `ProductFetcher` treats a call made while a fetch is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Ignore the new call until the running fetch completes.
    #[default]
    Skip,
    /// Start another request; terminal signals land in receipt order.
    Race,
}

/// Message carried by the failure signal of a fetch dropped mid-flight.
pub const CANCELLED_MESSAGE: &str = "Product fetch cancelled before completion";

/// Emit `Begin`, fetch once, then emit exactly one terminal signal.
///
/// Dropping the future after `Begin` (task abort, `select!` losing branch)
/// still emits a `Failed` carrying `CANCELLED_MESSAGE`, so the slice never
/// stays loading. That signal is sent without waiting and is lost only if
/// the store's command channel is full at that moment.
///
/// Returns `Err` only when the store has shut down.
pub async fn fetch_products<S>(
    source: &S,
    dispatcher: &Dispatcher,
) -> Result<FetchOutcome, StoreError>
where
    S: ProductSource + ?Sized,
{
    dispatcher.dispatch(ProductAction::begin()).await?;
    let mut pending = PendingTerminal::arm(dispatcher);
    tracing::debug!(endpoint = source.endpoint(), "Fetching products");

    let (action, outcome) = match source.fetch_products().await {
        Ok(products) => {
            let count = products.len();
            tracing::info!(endpoint = source.endpoint(), count, "Products loaded");
            (ProductAction::succeeded(products), FetchOutcome::Loaded(count))
        }
        Err(err) => {
            tracing::warn!(endpoint = source.endpoint(), error = %err, "Product fetch failed");
            (ProductAction::failed(err), FetchOutcome::Failed)
        }
    };

    dispatcher.dispatch(action).await?;
    pending.disarm();
    Ok(outcome)
}

/// Sends the cancellation failure if dropped while still armed.
struct PendingTerminal<'a> {
    dispatcher: &'a Dispatcher,
    armed: bool,
}

impl<'a> PendingTerminal<'a> {
    fn arm(dispatcher: &'a Dispatcher) -> Self {
        Self {
            dispatcher,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PendingTerminal<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!("Product fetch dropped before completion");
        let action = ProductAction::failed(ErrorDescriptor::new(CANCELLED_MESSAGE));
        if let Err(err) = self.dispatcher.try_dispatch(action) {
            tracing::warn!(error = %err, "Failed to signal cancelled product fetch");
        }
    }
}

/// Handed to views as the "fetch products" callback.
#[derive(Clone)]
pub struct ProductFetcher {
    source: Arc<dyn ProductSource>,
    dispatcher: Dispatcher,
    policy: OverlapPolicy,
    in_flight: Arc<AtomicBool>,
}

impl ProductFetcher {
    pub fn new(
        source: Arc<dyn ProductSource>,
        dispatcher: Dispatcher,
        policy: OverlapPolicy,
    ) -> Self {
        Self {
            source,
            dispatcher,
            policy,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Whether a fetch started through this handle (or a clone) is running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run one fetch under this handle's overlap policy.
    ///
    /// Cancelling the returned future is safe: the slice receives a
    /// `Failed` signal and the in-flight flag is released.
    pub async fn fetch(&self) -> Result<FetchOutcome, StoreError> {
        let _guard = match self.policy {
            OverlapPolicy::Skip => match InFlightGuard::acquire(&self.in_flight) {
                Some(guard) => Some(guard),
                None => {
                    tracing::debug!("Product fetch already in flight, skipping");
                    return Ok(FetchOutcome::Skipped);
                }
            },
            OverlapPolicy::Race => None,
        };

        fetch_products(self.source.as_ref(), &self.dispatcher).await
    }
}

/// Clears the in-flight flag when the fetch future finishes or is dropped.
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
