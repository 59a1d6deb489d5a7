//! Unidirectional state primitives.
//!
//! Application state is split into slices. Each slice is owned by exactly
//! one reducer, and the only way to change a slice is to send an action
//! through that reducer.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ Slice ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **Slice**: Immutable snapshot of one portion of application state
//! - **Action**: Closed set of signals a slice reacts to
//! - **Reducer**: Pure function from (Slice, Action) to the next Slice

mod action;
mod reducer;
mod slice;

pub use action::Action;
pub use reducer::Reducer;
pub use slice::Slice;
