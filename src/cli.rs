//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::counter::CounterAction;

#[derive(Debug, Parser)]
#[command(name = "productfeed", version, about = "Fetch and display a product list")]
pub struct Cli {
    /// Path to config file (default: ~/.config/productfeed/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the product list once and print it
    Products {
        /// Override the configured endpoint
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },
    /// Apply counter operations in order and print the result
    Counter {
        #[arg(value_enum)]
        ops: Vec<CounterOp>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CounterOp {
    Inc,
    Dec,
    Reset,
}

impl From<CounterOp> for CounterAction {
    fn from(op: CounterOp) -> Self {
        match op {
            CounterOp::Inc => CounterAction::Increment,
            CounterOp::Dec => CounterAction::Decrement,
            CounterOp::Reset => CounterAction::Reset,
        }
    }
}
