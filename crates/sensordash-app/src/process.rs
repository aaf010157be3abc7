//! Message processing
//!
//! Runs a message through the TEA update function, follows any chained
//! messages, and hands actions to the [`ActionRunner`].

use tokio::sync::mpsc;

use sensordash_feed::RangeApi;

use crate::actions::ActionRunner;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    actions: &mut ActionRunner<A>,
) where
    A: RangeApi + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            actions.handle_action(action, msg_tx);
        }

        msg = result.message;
    }
}
