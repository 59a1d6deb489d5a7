//! State slices, reducers and an async product fetch driven through a
//! single-writer store.

pub mod cli;
pub mod config;
pub mod counter;
pub mod logging;
pub mod mvi;
pub mod products;
pub mod runtime;
pub mod store;
pub mod view;
