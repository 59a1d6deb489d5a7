//! Wires config, store, fetcher and views together for the binary.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;

use crate::cli::{Cli, Command, CounterOp};
use crate::config::Config;
use crate::counter::CounterAction;
use crate::products::{FetchOutcome, HttpProductSource, ProductFetcher};
use crate::store::{AppState, Store};
use crate::view::{render_counter, render_products};

/// Run the selected command.
///
/// Returns `Ok(false)` when the command ran but the product fetch failed;
/// the failure itself has already been rendered.
pub async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command.unwrap_or(Command::Products { endpoint: None }) {
        Command::Products { endpoint } => run_products(config, endpoint, &mut io::stdout()).await,
        Command::Counter { ops } => run_counter(config, ops, &mut io::stdout()).await,
    }
}

async fn run_products(
    mut config: Config,
    endpoint: Option<String>,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    if let Some(endpoint) = endpoint {
        config.fetch.endpoint = endpoint;
        config.validate()?;
    }

    let (dispatcher, store) = Store::spawn(AppState::default(), config.store.channel_capacity);
    let source =
        HttpProductSource::from_config(&config.fetch).context("Failed to create product source")?;
    let fetcher = ProductFetcher::new(Arc::new(source), dispatcher.clone(), config.fetch.overlap);
    tracing::info!(
        endpoint = %config.fetch.endpoint,
        overlap = ?fetcher.policy(),
        "Starting product fetch"
    );

    let outcome = fetcher.fetch().await?;
    let state = dispatcher.state().await?;
    for line in render_products(&state.products) {
        writeln!(out, "{}", line)?;
    }

    drop(fetcher);
    drop(dispatcher);
    store.await.context("Store task panicked")?;

    Ok(outcome != FetchOutcome::Failed)
}

async fn run_counter(
    config: Config,
    ops: Vec<CounterOp>,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let (dispatcher, store) = Store::spawn(AppState::default(), config.store.channel_capacity);

    for op in ops {
        dispatcher.dispatch(CounterAction::from(op)).await?;
    }

    let state = dispatcher.state().await?;
    writeln!(out, "{}", render_counter(&state.counter))?;

    drop(dispatcher);
    store.await.context("Store task panicked")?;
    Ok(true)
}
