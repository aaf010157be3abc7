//! WebSocket driver for the sensor push channel.
//!
//! [`spawn_channel`] opens one connection in a background task and reports
//! what happens on it as [`ChannelEvent`]s. Each connection emits `Opened`
//! (if the handshake succeeds), zero or more `Message`s, and then exactly one
//! terminal event (`Closed` or `Error`). Reconnecting is the caller's job.
//!
//! ```text
//! ┌───────────────┐  Disconnect   ┌──────────────────────────┐
//! │ ChannelHandle │──────────────▶│ background task          │
//! └───────────────┘               │  connect_async(url)      │
//!                                 │  select! { frame, cmd }  │
//!   mpsc<ChannelEvent> ◀──────────│  Text → Message(raw)     │
//!                                 └──────────────────────────┘
//! ```

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use sensordash_core::prelude::*;

use crate::connection::ChannelEvent;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

#[derive(Debug)]
enum ChannelCommand {
    Disconnect,
}

/// Handle to one running push-channel connection.
///
/// Dropping the handle closes the socket without emitting a terminal event.
#[derive(Debug)]
pub struct ChannelHandle {
    url: String,
    cmd_tx: mpsc::Sender<ChannelCommand>,
}

impl ChannelHandle {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.cmd_tx.is_closed()
    }

    /// Ask the background task to send a Close frame and exit.
    pub async fn disconnect(&self) {
        let _ = self.cmd_tx.send(ChannelCommand::Disconnect).await;
    }
}

/// Open a push channel to `url` in a background task.
///
/// Events are delivered on `events`. If the receiver goes away the task
/// closes the socket and exits.
pub fn spawn_channel(url: impl Into<String>, events: mpsc::Sender<ChannelEvent>) -> ChannelHandle {
    let url = url.into();
    let (cmd_tx, cmd_rx) = mpsc::channel(1);
    tokio::spawn(run_channel_task(url.clone(), cmd_rx, events));
    ChannelHandle { url, cmd_tx }
}

async fn run_channel_task(
    url: String,
    mut cmd_rx: mpsc::Receiver<ChannelCommand>,
    events: mpsc::Sender<ChannelEvent>,
) {
    info!("Connecting to sensor feed at {}", url);

    let ws_stream = match connect_ws(&url).await {
        Ok(ws_stream) => ws_stream,
        Err(err) => {
            warn!("feed: connect failed: {}", err);
            let _ = events.send(ChannelEvent::Error(err.to_string())).await;
            return;
        }
    };

    if events.send(ChannelEvent::Opened).await.is_err() {
        debug!("feed: event receiver dropped before open was reported");
        return;
    }

    match run_io_loop(ws_stream, &mut cmd_rx, &events).await {
        Some(terminal) => {
            let _ = events.send(terminal).await;
        }
        None => debug!("feed: channel shut down by owner"),
    }

    debug!("feed: background task exiting");
}

/// Run the read loop for one connection.
///
/// Returns the terminal event to report, or `None` when the owner asked for
/// the shutdown (Disconnect, dropped handle, or dropped event receiver).
async fn run_io_loop(
    ws_stream: WsStream,
    cmd_rx: &mut mpsc::Receiver<ChannelCommand>,
    events: &mpsc::Sender<ChannelEvent>,
) -> Option<ChannelEvent> {
    let (mut ws_sink, mut ws_stream) = ws_stream.split();

    loop {
        tokio::select! {
            // ── Incoming WebSocket frame ─────────────────────────────────
            frame = ws_stream.next() => {
                match frame {
                    Some(Ok(WsMessage::Text(text))) => {
                        let raw = text.as_str().to_string();
                        if events.send(ChannelEvent::Message(raw)).await.is_err() {
                            send_close(&mut ws_sink).await;
                            return None;
                        }
                    }
                    Some(Ok(WsMessage::Close(frame))) => {
                        debug!("feed: received Close frame {:?}", frame);
                        return Some(ChannelEvent::Closed);
                    }
                    Some(Ok(_)) => {
                        // Binary/Ping/Pong carry no readings
                    }
                    Some(Err(err)) => {
                        warn!("feed: WebSocket read error: {}", err);
                        return Some(ChannelEvent::Error(err.to_string()));
                    }
                    None => {
                        debug!("feed: WebSocket stream ended");
                        return Some(ChannelEvent::Closed);
                    }
                }
            }

            // ── Owner command ────────────────────────────────────────────
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(ChannelCommand::Disconnect) | None => {
                        send_close(&mut ws_sink).await;
                        return None;
                    }
                }
            }
        }
    }
}

async fn connect_ws(url: &str) -> Result<WsStream> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|err| Error::feed(format!("failed to connect to {url}: {err}")))?;
    Ok(ws_stream)
}

/// Send a WebSocket Close frame, ignoring any write errors.
async fn send_close(ws_sink: &mut SplitSink<WsStream, WsMessage>) {
    let _ = ws_sink.send(WsMessage::Close(None)).await;
}
