//! State slice for the product list.

use crate::mvi::Slice;

use super::error::ErrorDescriptor;
use super::product::Product;

/// Where the slice stands relative to the last phase signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// Nothing requested yet.
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last request succeeded.
    Loaded,
    /// The last request failed.
    Failed,
}

/// Product list slice.
///
/// Only `ProductReducer` writes to it; everything else reads through the
/// accessors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchState {
    pub(super) items: Vec<Product>,
    pub(super) loading: bool,
    pub(super) error: Option<ErrorDescriptor>,
    pub(super) loaded: bool,
}

impl FetchState {
    /// Products from the most recent successful fetch.
    ///
    /// Kept across failures, so this may be stale when `error()` is set.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ErrorDescriptor> {
        self.error.as_ref()
    }

    pub fn phase(&self) -> FetchPhase {
        if self.loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Failed
        } else if self.loaded {
            FetchPhase::Loaded
        } else {
            FetchPhase::Idle
        }
    }

    /// True when at most one of loading, loaded and failed holds.
    pub fn is_consistent(&self) -> bool {
        let failed = self.error.is_some();
        [self.loading, self.loaded, failed]
            .iter()
            .filter(|flag| **flag)
            .count()
            <= 1
    }
}

impl Slice for FetchState {}
