//! Reducer for the product list slice.

use crate::mvi::Reducer;

use super::action::ProductAction;
use super::state::FetchState;

/// Reducer for product fetch phase signals.
pub struct ProductReducer;

impl Reducer for ProductReducer {
    type Slice = FetchState;
    type Action = ProductAction;

    fn reduce(state: Self::Slice, action: Self::Action) -> Self::Slice {
        match action {
            ProductAction::Begin => FetchState {
                loading: true,
                error: None,
                loaded: false,
                ..state
            },

            ProductAction::Succeeded(items) => FetchState {
                items,
                loading: false,
                error: None,
                loaded: true,
            },

            // Previous items stay visible behind the error
            ProductAction::Failed(error) => FetchState {
                loading: false,
                error: Some(error),
                loaded: false,
                ..state
            },
        }
    }
}
