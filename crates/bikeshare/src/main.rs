mod bootstrap;
mod display;
mod session;

use std::io;

use anyhow::Result;
use bikeshare_core::settings::Settings;
use bikeshare_data::loader::Loader;
use session::Session;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(settings.tracing_level())?;

    tracing::info!("bikeshare v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", settings.data_dir.display());

    for city in bootstrap::missing_sources(&settings.data_dir) {
        tracing::warn!(
            "No {} in {}; {} queries will fail",
            city.source_file(),
            settings.data_dir.display(),
            city
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        Loader::new(&settings.data_dir),
    );
    session.run()
}
