use crate::mvi::Action;

/// Actions handled by the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl Action for CounterAction {
    fn kind(&self) -> &'static str {
        match self {
            CounterAction::Increment => "counter/increment",
            CounterAction::Decrement => "counter/decrement",
            CounterAction::Reset => "counter/reset",
        }
    }
}
