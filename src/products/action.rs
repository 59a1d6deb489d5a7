//! Phase signals for the product fetch.

use crate::mvi::Action;

use super::error::ErrorDescriptor;
use super::product::Product;

/// Signals that drive `FetchState`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// A request has been issued.
    Begin,

    /// The request completed with the full product list.
    Succeeded(Vec<Product>),

    /// The request failed.
    Failed(ErrorDescriptor),
}

impl ProductAction {
    pub fn begin() -> Self {
        ProductAction::Begin
    }

    pub fn succeeded(products: Vec<Product>) -> Self {
        ProductAction::Succeeded(products)
    }

    pub fn failed(error: impl Into<ErrorDescriptor>) -> Self {
        ProductAction::Failed(error.into())
    }
}

impl Action for ProductAction {
    fn kind(&self) -> &'static str {
        match self {
            ProductAction::Begin => "products/begin",
            ProductAction::Succeeded(_) => "products/succeeded",
            ProductAction::Failed(_) => "products/failed",
        }
    }
}
