use crate::session::SessionSnapshot;
use anyhow::{Context, Result};
use notify::{Event, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// How often the blocking loop checks whether anyone is still listening.
const CLOSE_POLL: Duration = Duration::from_millis(250);

/// Publishes a fresh snapshot whenever the session file changes.
pub struct SessionWatcher {
    path: PathBuf,
    tx: watch::Sender<SessionSnapshot>,
}

impl SessionWatcher {
    /// Creates a watcher for `path`, seeded with an already loaded snapshot.
    ///
    /// Returns the watcher and a receiver for snapshot updates.
    #[must_use]
    pub fn new(
        path: impl Into<PathBuf>,
        initial: SessionSnapshot,
    ) -> (Self, watch::Receiver<SessionSnapshot>) {
        let (tx, rx) = watch::channel(initial);
        (
            Self {
                path: path.into(),
                tx,
            },
            rx,
        )
    }

    /// Watches the session file until every receiver has been dropped.
    ///
    /// The parent directory is watched so editors that replace the file on
    /// save are still picked up. Snapshots that fail to load are skipped with
    /// a warning; unchanged snapshots are not re-published.
    ///
    /// # Errors
    ///
    /// Returns an error if file watching cannot be initiated or if the watcher task fails.
    pub async fn watch(&self) -> Result<()> {
        let tx = self.tx.clone();
        let path = self.path.clone();
        let dir = watch_dir(&path);

        tokio::task::spawn_blocking(move || {
            let (notify_tx, notify_rx) = std::sync::mpsc::channel();

            let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
                if let Ok(event) = res {
                    let _ = notify_tx.send(event);
                }
            })?;

            watcher
                .watch(&dir, RecursiveMode::NonRecursive)
                .with_context(|| format!("Failed to watch {}", dir.display()))?;
            info!(path = %path.display(), "Watching session file");

            loop {
                let event = match notify_rx.recv_timeout(CLOSE_POLL) {
                    Ok(event) => event,
                    Err(RecvTimeoutError::Timeout) => {
                        if tx.is_closed() {
                            break;
                        }
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                };

                handle_event(&event, &path, &tx);
            }

            debug!(path = %path.display(), "Session watcher stopped");
            Ok::<_, anyhow::Error>(())
        })
        .await??;

        Ok(())
    }
}

/// Reloads the snapshot if `event` changed the session file.
///
/// Returns whether a new snapshot was published.
fn handle_event(event: &Event, path: &Path, tx: &watch::Sender<SessionSnapshot>) -> bool {
    if !(event.kind.is_modify() || event.kind.is_create()) || !touches(event, path) {
        return false;
    }

    match SessionSnapshot::load(path) {
        Ok(snapshot) => {
            let changed = tx.send_if_modified(|current| {
                if *current == snapshot {
                    false
                } else {
                    *current = snapshot;
                    true
                }
            });
            debug!(changed, "Session file event handled");
            changed
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to reload session");
            false
        }
    }
}

fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn touches(event: &Event, path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    event.paths.iter().any(|p| p.file_name() == Some(name))
}
