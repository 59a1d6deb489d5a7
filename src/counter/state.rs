use crate::mvi::Slice;

/// Counter slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub(super) count: i64,
}

impl CounterState {
    pub fn count(&self) -> i64 {
        self.count
    }
}

impl Slice for CounterState {}
