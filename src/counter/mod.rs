//! Counter slice.
//!
//! The simplest possible slice: one number and three actions.

mod action;
mod reducer;
mod state;

pub use action::CounterAction;
pub use reducer::CounterReducer;
pub use state::CounterState;
