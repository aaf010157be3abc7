//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every background task reports back by sending a [`Message`] on the shared
//! queue; none of them touch [`crate::state::AppState`].

use tokio::sync::mpsc;

use sensordash_feed::{ChannelHandle, RangeApi};

use crate::message::Message;
use crate::UpdateAction;

pub(super) mod feed;
pub(super) mod ranges;

/// Executes [`UpdateAction`]s against the network.
///
/// Holds the range API client and the handle of the current push channel.
pub struct ActionRunner<A> {
    api: A,
    channel: Option<ChannelHandle>,
}

impl<A> ActionRunner<A>
where
    A: RangeApi + Clone + Send + Sync + 'static,
{
    pub fn new(api: A) -> Self {
        Self { api, channel: None }
    }

    /// URL of the most recently opened push channel.
    pub fn channel_url(&self) -> Option<&str> {
        self.channel.as_ref().map(|c| c.url())
    }

    /// Execute an action by spawning a background task
    pub fn handle_action(&mut self, action: UpdateAction, msg_tx: &mpsc::Sender<Message>) {
        match action {
            UpdateAction::OpenChannel { url } => {
                // The previous connection has already reported its terminal
                // event by the time a new one is opened.
                self.channel = Some(feed::open_channel(url, msg_tx.clone()));
            }

            UpdateAction::ScheduleReconnect { delay } => {
                feed::spawn_reconnect_timer(delay, msg_tx.clone());
            }

            UpdateAction::FetchHistorical { hours, generation } => {
                ranges::spawn_fetch_historical(
                    self.api.clone(),
                    hours,
                    generation,
                    msg_tx.clone(),
                );
            }

            UpdateAction::FetchSecurityEvents { hours, generation } => {
                ranges::spawn_fetch_security_events(
                    self.api.clone(),
                    hours,
                    generation,
                    msg_tx.clone(),
                );
            }
        }
    }

    /// Close the push channel, if one is open.
    pub async fn shutdown(&mut self) {
        if let Some(channel) = self.channel.take() {
            channel.disconnect().await;
        }
    }
}
