//! Root state and reducer combining every slice.

use crate::counter::{CounterAction, CounterReducer, CounterState};
use crate::mvi::{Action, Reducer, Slice};
use crate::products::{FetchState, ProductAction, ProductReducer};

/// Complete application state, one field per slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub counter: CounterState,
    pub products: FetchState,
}

impl Slice for AppState {}

/// Any action the store accepts, tagged by the slice it targets.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Counter(CounterAction),
    Products(ProductAction),
}

impl Action for AppAction {
    fn kind(&self) -> &'static str {
        match self {
            AppAction::Counter(action) => action.kind(),
            AppAction::Products(action) => action.kind(),
        }
    }
}

impl From<CounterAction> for AppAction {
    fn from(action: CounterAction) -> Self {
        AppAction::Counter(action)
    }
}

impl From<ProductAction> for AppAction {
    fn from(action: ProductAction) -> Self {
        AppAction::Products(action)
    }
}

/// Routes each action to the reducer owning its slice.
pub struct RootReducer;

impl Reducer for RootReducer {
    type Slice = AppState;
    type Action = AppAction;

    fn reduce(state: Self::Slice, action: Self::Action) -> Self::Slice {
        match action {
            AppAction::Counter(action) => AppState {
                counter: CounterReducer::reduce(state.counter, action),
                ..state
            },
            AppAction::Products(action) => AppState {
                products: ProductReducer::reduce(state.products, action),
                ..state
            },
        }
    }
}
