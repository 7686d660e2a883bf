use std::io;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gof_patterns::config::LogFormat;
use gof_patterns::{catalog, Config, Console, Selection};

fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(env_filter);

    // stdout carries the narration; diagnostics go to stderr.
    match config.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_target(true).with_writer(io::stderr))
            .init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config);
    for warning in &config.warnings {
        warn!("{warning}");
    }

    let color = config.color_enabled();
    colored::control::set_override(color);

    let selection = Selection::from_names(config.patterns.as_slice());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut console = Console::new(&mut handle, color);

    let summary = catalog::run(&mut console, &selection).context("writing the catalog to stdout")?;
    info!(ran = summary.ran, failed = summary.failed, "catalog finished");
    Ok(())
}
