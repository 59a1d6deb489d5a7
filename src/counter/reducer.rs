use crate::mvi::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Reducer for the counter slice.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type Slice = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::Slice, action: Self::Action) -> Self::Slice {
        let count = match action {
            CounterAction::Increment => state.count.saturating_add(1),
            CounterAction::Decrement => state.count.saturating_sub(1),
            CounterAction::Reset => 0,
        };
        CounterState { count }
    }
}
