//! Range load actions

use tokio::sync::mpsc;

use sensordash_feed::RangeApi;

use crate::message::Message;

/// Load historical data and report the outcome stamped with `generation`.
pub(super) fn spawn_fetch_historical<A>(
    api: A,
    hours: u32,
    generation: u64,
    msg_tx: mpsc::Sender<Message>,
) where
    A: RangeApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match api.historical(hours).await {
            Ok(series) => Message::HistoricalLoaded { generation, series },
            Err(e) => Message::HistoricalFailed {
                generation,
                hours,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

/// Load security events and report the outcome stamped with `generation`.
pub(super) fn spawn_fetch_security_events<A>(
    api: A,
    hours: u32,
    generation: u64,
    msg_tx: mpsc::Sender<Message>,
) where
    A: RangeApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match api.security_events(hours).await {
            Ok(events) => Message::SecurityEventsLoaded { generation, events },
            Err(e) => Message::SecurityEventsFailed {
                generation,
                hours,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensordash_core::Error;
    use sensordash_feed::test_utils::FakeRangeApi;

    #[tokio::test]
    async fn test_fetch_historical_reports_success() {
        let api = FakeRangeApi::new();
        let (tx, mut rx) = mpsc::channel(4);

        spawn_fetch_historical(api.clone(), 6, 3, tx);

        match rx.recv().await {
            Some(Message::HistoricalLoaded { generation, series }) => {
                assert_eq!(generation, 3);
                assert_eq!(series.hours, 6);
            }
            other => panic!("unexpected message: {other:?}"),
        }
        assert_eq!(api.historical_calls(), vec![6]);
    }

    #[tokio::test]
    async fn test_fetch_historical_reports_failure() {
        let api = FakeRangeApi::new();
        api.push_historical(Err(Error::api_status("/api/historical-data/", 500)));
        let (tx, mut rx) = mpsc::channel(4);

        spawn_fetch_historical(api, 24, 7, tx);

        match rx.recv().await {
            Some(Message::HistoricalFailed {
                generation,
                hours,
                error,
            }) => {
                assert_eq!((generation, hours), (7, 24));
                assert!(error.contains("500"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_security_events_reports_both_outcomes() {
        let api = FakeRangeApi::new();
        api.push_security(Err(Error::api("connection refused")));
        let (tx, mut rx) = mpsc::channel(4);

        spawn_fetch_security_events(api.clone(), 1, 1, tx.clone());
        assert!(matches!(
            rx.recv().await,
            Some(Message::SecurityEventsFailed { generation: 1, .. })
        ));

        spawn_fetch_security_events(api, 168, 2, tx);
        assert!(matches!(
            rx.recv().await,
            Some(Message::SecurityEventsLoaded { generation: 2, .. })
        ));
    }
}
