use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
pub const LOG_ENV_VAR: &str = "PRODUCTFEED_LOG";

/// Filter used when `RUST_LOG` is unset: this crate at `info`, dependencies
/// (reqwest, hyper) only when they warn.
const DEFAULT_DIRECTIVES: &str = "warn,productfeed=info";

/// Initialize tracing to a file when `PRODUCTFEED_LOG` is set.
///
/// Stdout carries the rendered views, so nothing is logged there. Returns
/// the log file actually written, which gets a `.{timestamp}.{pid}` suffix.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR)?;
    let path = unique_log_path(Path::new(&base));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(build_filter())
        .with(file_layer)
        .init();

    tracing::info!(path = %path.display(), version = env!("CARGO_PKG_VERSION"), "Logging started");
    Some(path)
}

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

fn unique_log_path(base: &Path) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, std::process::id()));
    PathBuf::from(name)
}
