//! Plain-text views over state slices.
//!
//! Views receive the slice they render by reference and never touch the
//! store themselves.

use crate::counter::CounterState;
use crate::products::FetchState;

/// Render the product list.
///
/// An error wins over loading, which wins over the item list.
pub fn render_products(state: &FetchState) -> Vec<String> {
    if let Some(error) = state.error() {
        return vec![format!("Error! {}", error.message())];
    }

    if state.loading() {
        return vec!["Loading...".to_string()];
    }

    state
        .items()
        .iter()
        .flat_map(|product| {
            [
                format!("#{} {}", product.id_label(), product.title),
                format!("    {}", product.body),
            ]
        })
        .collect()
}

pub fn render_counter(state: &CounterState) -> String {
    format!("Counter: {}", state.count())
}
