//! Reducer trait.

use super::action::Action;
use super::slice::Slice;

/// Reducer transforms a slice based on actions.
///
/// The reducer is the only place where a slice changes.
/// It must be a pure function: (Slice, Action) -> Slice
pub trait Reducer {
    /// The slice this reducer owns.
    type Slice: Slice;

    /// The actions this reducer handles.
    type Action: Action;

    /// Apply an action and return the next slice.
    fn reduce(state: Self::Slice, action: Self::Action) -> Self::Slice;
}
