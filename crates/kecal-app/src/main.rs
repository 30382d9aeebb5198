use anyhow::Context;
use clap::Parser;
use kecal_app::cli::Cli;
use kecal_core::config::load_config;
use kecal_service::convert::convert_schedule_file;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let request = cli.into_request(&config)?;

    tracing::info!(
        input = %request.input.display(),
        output = %request.output.display(),
        timetable = %request.timetable.display(),
        first_monday = %request.anchor.date(),
        "Converting class schedule"
    );

    let summary = convert_schedule_file(&request)
        .with_context(|| format!("Failed to convert {}", request.input.display()))?;

    tracing::info!(
        events = summary.events,
        exception_dates = summary.exception_dates,
        meetings = summary.meetings,
        "Done"
    );

    Ok(())
}
