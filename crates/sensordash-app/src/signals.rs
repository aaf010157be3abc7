//! OS signal handling: a termination signal becomes `Message::Quit`.

use std::future::Future;

use tokio::sync::mpsc;

use sensordash_core::prelude::*;

use crate::message::Message;

/// Listen for SIGINT/SIGTERM (Ctrl+C on Windows) in the background.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(forward_quit(termination(), tx));
}

/// Wait for `shutdown` and queue a quit. A listener that fails to install
/// leaves the dashboard running; the `q` key still quits.
pub(crate) async fn forward_quit<F>(shutdown: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<()>>,
{
    match shutdown.await {
        Ok(()) => {
            info!("termination signal, quitting");
            let _ = tx.send(Message::Quit).await;
        }
        Err(e) => warn!("signal listener unavailable: {}", e),
    }
}

#[cfg(unix)]
async fn termination() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("{name} listener: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    tokio::select! {
        _ = interrupt.recv() => debug!("SIGINT"),
        _ = terminate.recv() => debug!("SIGTERM"),
    }
    Ok(())
}

#[cfg(not(unix))]
async fn termination() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C listener: {e}")))
}
