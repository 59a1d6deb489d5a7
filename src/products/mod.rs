//! Product list slice and its asynchronous fetch sequence.
//!
//! # Architecture
//!
//! - `product.rs` - Product value decoded from the remote API
//! - `state.rs` - `FetchState` slice and derived `FetchPhase`
//! - `action.rs` - Phase signals (begin, succeeded, failed)
//! - `reducer.rs` - Slice transitions
//! - `source.rs` - Where products come from (HTTP by default)
//! - `fetch.rs` - Orchestration that emits the phase signals

mod action;
mod error;
mod fetch;
mod product;
mod reducer;
mod source;
mod state;

pub use action::ProductAction;
pub use error::{ErrorDescriptor, FetchError};
pub use fetch::{fetch_products, FetchOutcome, OverlapPolicy, ProductFetcher, CANCELLED_MESSAGE};
pub use product::Product;
pub use reducer::ProductReducer;
pub use source::{HttpProductSource, ProductSource};
pub use state::{FetchPhase, FetchState};
