mod cli;

use webp_convert::{
    config::{self, WatchConfig},
    convert,
    mode::{Invocation, Mode},
    watch,
};
use webp_convert_common::{ConversionRequest, OutputFormat};

use anyhow::{Context, Result};
use cli::Cli;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "webp_convert=debug,webp_convert_common=debug,notify=debug".to_string()
        } else {
            "webp_convert=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;
    let invocation = Invocation::from_args(
        cli.input,
        cli.watch,
        cli.output_type.as_deref(),
        &config,
    )?;

    match invocation.mode {
        Mode::OneShot(input) => convert_once(input, invocation.format),
        Mode::Watch(dir) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(watch_until_interrupted(&dir, invocation.format, &config.watch))
        }
    }
}

fn convert_once(input: PathBuf, format: OutputFormat) -> Result<()> {
    let output = convert::convert(&ConversionRequest::new(input, format))?;

    tracing::debug!("Output: {:?}", output);
    println!("Done: Conversion completed successfully");
    Ok(())
}

async fn watch_until_interrupted(
    dir: &Path,
    format: OutputFormat,
    config: &WatchConfig,
) -> Result<()> {
    let cancel = CancellationToken::new();

    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            return;
        }
        tracing::info!("Received Ctrl-C, shutting down");
        ctrl_c.cancel();
    });

    let subscription = watch::WatchSubscription::register(dir, config.event_buffer)?;
    println!(
        "Watching {} for new .webp files (output: {})",
        dir.display(),
        format
    );

    let summary = watch::WatchLoop::new(format, config.on_error)
        .run(subscription, cancel)
        .await
        .with_context(|| format!("Watch mode failed for {:?}", dir))?;

    println!(
        "Stopped: {} converted, {} failed",
        summary.converted, summary.failed
    );
    Ok(())
}
