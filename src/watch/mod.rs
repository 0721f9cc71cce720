//! Directory watch loop.
//!
//! Watches a single directory (non-recursively) and converts every newly
//! created `.webp` file in it. Conversions run one at a time: the next event
//! is not read until the current conversion has finished.

use std::path::{Path, PathBuf};

use notify::event::CreateKind;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use webp_convert_common::paths::is_webp_path;
use webp_convert_common::{ConversionRequest, OutputFormat};

use crate::config::{ErrorPolicy, MAX_EVENT_BUFFER};
use crate::convert::convert;
use crate::error::WatchError;

/// A live registration of one directory with the platform file watcher.
///
/// Dropping the subscription unregisters the directory.
pub struct WatchSubscription {
    path: PathBuf,
    events: mpsc::Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl WatchSubscription {
    /// Register `path` for non-recursive watching.
    ///
    /// Events are forwarded from the notify thread through a channel holding
    /// at most `buffer` pending events, clamped to `1..=MAX_EVENT_BUFFER`.
    pub fn register(path: &Path, buffer: usize) -> Result<Self, WatchError> {
        if !path.is_dir() {
            return Err(WatchError::NotADirectory(path.to_path_buf()));
        }

        let (event_tx, event_rx) = mpsc::channel(buffer.clamp(1, MAX_EVENT_BUFFER));
        let setup_error = |source| WatchError::Setup {
            path: path.to_path_buf(),
            source,
        };

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                // Receiver is gone once the loop has stopped
                let _ = event_tx.blocking_send(res);
            },
            Config::default(),
        )
        .map_err(setup_error)?;

        watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(setup_error)?;
        tracing::info!("Watching directory: {:?}", path);

        Ok(Self {
            path: path.to_path_buf(),
            events: event_rx,
            _watcher: watcher,
        })
    }

    /// The watched directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn next_event(&mut self) -> Option<notify::Result<Event>> {
        self.events.recv().await
    }
}

/// Counts reported when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Event consumer bridging filesystem notifications to the conversion engine.
pub struct WatchLoop {
    format: OutputFormat,
    policy: ErrorPolicy,
    summary: WatchSummary,
}

impl WatchLoop {
    pub fn new(format: OutputFormat, policy: ErrorPolicy) -> Self {
        Self {
            format,
            policy,
            summary: WatchSummary::default(),
        }
    }

    pub fn summary(&self) -> WatchSummary {
        self.summary
    }

    /// Consume events until `cancel` fires.
    ///
    /// Returns early with an error only when a conversion fails under
    /// [`ErrorPolicy::Exit`].
    pub async fn run(
        mut self,
        mut subscription: WatchSubscription,
        cancel: CancellationToken,
    ) -> Result<WatchSummary, WatchError> {
        tracing::debug!("Consuming watch events for {:?}", subscription.path());

        loop {
            tokio::select! {
                biased;

                _ = cancel.cancelled() => break,

                res = subscription.next_event() => match res {
                    Some(res) => self.handle(res).await?,
                    None => {
                        tracing::warn!("Watch event channel closed");
                        break;
                    }
                },
            }
        }

        tracing::info!(
            converted = self.summary.converted,
            failed = self.summary.failed,
            "File watcher stopped"
        );
        Ok(self.summary)
    }

    /// Process one delivery from the watch subsystem.
    ///
    /// Delivery errors are logged and swallowed.
    pub async fn handle(&mut self, res: notify::Result<Event>) -> Result<(), WatchError> {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "File watcher error");
                return Ok(());
            }
        };

        for path in conversion_targets(&event) {
            tracing::debug!("New file: {:?}", path);
            let request = ConversionRequest::new(path, self.format);

            let result = tokio::task::spawn_blocking(move || convert(&request))
                .await
                .unwrap_or_else(|e| std::panic::resume_unwind(e.into_panic()));

            match result {
                Ok(_) => self.summary.converted += 1,
                Err(e) => {
                    self.summary.failed += 1;
                    match self.policy {
                        ErrorPolicy::Continue => {
                            tracing::error!(error = %e, "Conversion failed, continuing to watch");
                        }
                        ErrorPolicy::Exit => return Err(e.into()),
                    }
                }
            }
        }

        Ok(())
    }
}

/// Paths in `event` that should be converted: `.webp` files that were just
/// created. Every other event kind is ignored.
pub fn conversion_targets(event: &Event) -> Vec<PathBuf> {
    match event.kind {
        EventKind::Create(kind) if kind != CreateKind::Folder => event
            .paths
            .iter()
            .filter(|path| is_webp_path(path))
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}
