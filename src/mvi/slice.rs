//! Base trait for state slices.

/// Marker trait for state slices.
///
/// Slices should be:
/// - Immutable (Clone to create new snapshots)
/// - Self-contained (all data a view needs)
/// - Comparable (PartialEq so subscribers can skip redundant renders)
/// - Defaulted to their initial lifecycle value
pub trait Slice: Clone + PartialEq + Default + Send + Sync + 'static {}
