use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::Store;
use crate::event::AppMessage;

#[derive(Debug)]
pub enum StoreCommand {
    Load,
    Save(Box<Store>),
}

/// Start the task that owns the store file and return its command queue.
///
/// Commands run one at a time in send order: a later snapshot always lands
/// after an earlier one, and a `Load` sees every save queued before it.
pub fn spawn_store_worker(
    path: PathBuf,
    msg_tx: mpsc::UnboundedSender<AppMessage>,
) -> mpsc::UnboundedSender<StoreCommand> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(worker_task(path, rx, msg_tx));
    tx
}

async fn worker_task(
    path: PathBuf,
    mut rx: mpsc::UnboundedReceiver<StoreCommand>,
    msg_tx: mpsc::UnboundedSender<AppMessage>,
) {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            StoreCommand::Load => load(&path, &msg_tx).await,
            StoreCommand::Save(store) => match store.save(&path).await {
                Ok(()) => {
                    let _ = msg_tx.send(AppMessage::Saved);
                }
                Err(e) => {
                    warn!(error = %e, "store save failed");
                    let _ = msg_tx.send(AppMessage::Error(format!("Save error: {}", e)));
                }
            },
        }
    }
    debug!("store worker exiting");
}

async fn load(path: &Path, msg_tx: &mpsc::UnboundedSender<AppMessage>) {
    let _ = msg_tx.send(AppMessage::LoadingStarted("Reading store...".into()));
    match Store::load(path).await {
        Ok(store) => {
            let _ = msg_tx.send(AppMessage::StoreReady(Box::new(store)));
        }
        Err(e) if e.is_not_found() => {
            warn!(path = %path.display(), "store missing");
            let _ = msg_tx.send(AppMessage::Error(format!(
                "No store at {}; run `schooldesk seed` first",
                path.display()
            )));
        }
        Err(e) => {
            warn!(error = %e, "store load failed");
            let _ = msg_tx.send(AppMessage::Error(format!("Load error: {}", e)));
        }
    }
    let _ = msg_tx.send(AppMessage::LoadingFinished);
}
