use std::path::Path;

use bikeshare_core::registry::City;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `level` is a `tracing` directive such as `"warn"`.  Output goes to stderr so
/// it never interleaves with the prompts on stdout.
pub fn setup_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;

    Ok(())
}

// ── Data-dir check ─────────────────────────────────────────────────────────────

/// Cities whose backing file is absent from `data_dir`.
pub fn missing_sources(data_dir: &Path) -> Vec<City> {
    City::ALL
        .into_iter()
        .filter(|city| !data_dir.join(city.source_file()).is_file())
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
