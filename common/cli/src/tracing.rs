use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing_log::AsTrace;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Configures tracing output for a CLI binary.
///
/// Messages at or above the level selected by the verbosity flags go to stderr.
/// When a trace file is given, everything down to TRACE is also written to it.
pub fn configure_tracing(trace: Option<PathBuf>, verbosity: Verbosity<InfoLevel>) -> anyhow::Result<()> {
    let trace_file_layer = match trace {
        Some(path) => {
            let trace_file = File::create(&path)
                .with_context(|| format!("Error creating trace file. path: {}", path.display()))?;

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(trace_file))
                .with_ansi(false)
                .with_filter(LevelFilter::TRACE);

            Some(layer)
        }
        None => None,
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(
            verbosity
                .log_level_filter()
                .as_trace(),
        );

    tracing_subscriber::registry()
        .with(trace_file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}
