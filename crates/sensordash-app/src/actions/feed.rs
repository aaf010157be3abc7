//! Push channel actions: open a connection, arm the reconnect timer

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use sensordash_feed::{spawn_channel, ChannelEvent, ChannelHandle};

use crate::message::Message;

/// Buffered channel events between the driver and the forwarder.
const CHANNEL_EVENT_CAPACITY: usize = 256;

/// Open a push channel and forward its events as `Message::Channel`.
pub(super) fn open_channel(url: String, msg_tx: mpsc::Sender<Message>) -> ChannelHandle {
    let (event_tx, mut event_rx) = mpsc::channel::<ChannelEvent>(CHANNEL_EVENT_CAPACITY);
    let handle = spawn_channel(url, event_tx);

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if msg_tx.send(Message::Channel(event)).await.is_err() {
                debug!("feed: message queue closed, stopping event forwarder");
                break;
            }
        }
    });

    handle
}

/// Send `Message::ReconnectDue` once `delay` has elapsed.
pub(super) fn spawn_reconnect_timer(delay: Duration, msg_tx: mpsc::Sender<Message>) {
    debug!("feed: reconnecting in {:?}", delay);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = msg_tx.send(Message::ReconnectDue).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_reconnect_timer_fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let start = Instant::now();

        spawn_reconnect_timer(Duration::from_secs(5), tx);

        let msg = rx.recv().await;
        assert!(matches!(msg, Some(Message::ReconnectDue)));
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(5), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(6), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reconnect_timer_does_not_fire_early() {
        let (tx, mut rx) = mpsc::channel(4);
        spawn_reconnect_timer(Duration::from_secs(5), tx);

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(matches!(rx.try_recv(), Ok(Message::ReconnectDue)));
    }

    #[tokio::test]
    async fn test_open_channel_forwards_connect_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (tx, mut rx) = mpsc::channel(4);
        let handle = open_channel(format!("ws://{addr}/ws/sensors/"), tx);
        assert!(handle.url().ends_with("/ws/sensors/"));

        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap();
        assert!(matches!(msg, Some(Message::Channel(ChannelEvent::Error(_)))));
    }
}
