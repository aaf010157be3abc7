//! Applies [`ConnectionCommand`]s from the connection manager

use chrono::Local;
use sensordash_feed::ConnectionCommand;

use crate::dispatch::dispatch;
use crate::sink::RenderSink;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// State changes and frames are applied in place; opening the socket and
/// arming the reconnect timer become the returned action.
pub(crate) fn apply_commands(state: &mut AppState, commands: Vec<ConnectionCommand>) -> UpdateResult {
    let mut result = UpdateResult::none();

    for command in commands {
        match command {
            ConnectionCommand::StateChanged(connection) => {
                state.dashboard.show_connection(connection);
            }
            ConnectionCommand::Dispatch(raw) => {
                dispatch(&raw, &mut state.live, &mut state.dashboard, Local::now());
            }
            ConnectionCommand::Open { url } => {
                result.action = Some(UpdateAction::OpenChannel { url });
            }
            ConnectionCommand::ScheduleReconnect(delay) => {
                result.action = Some(UpdateAction::ScheduleReconnect { delay });
            }
        }
    }

    result
}
