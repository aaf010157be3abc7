//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use sensordash_app::message::Message;
use sensordash_app::signals;
use sensordash_app::{process_message, ActionRunner, AppState, Settings};
use sensordash_core::prelude::*;
use sensordash_feed::{Endpoints, HttpRangeApi, RangeApi};

use super::{event, render, terminal};

/// Capacity of the shared message queue
const MESSAGE_QUEUE_CAPACITY: usize = 256;

/// Run the dashboard against the server at `endpoints`
pub async fn run(settings: Settings, endpoints: Endpoints) -> Result<()> {
    let api = HttpRangeApi::new(endpoints.clone(), settings.server.request_timeout())?;
    info!("Dashboard starting against {}", endpoints.origin());

    let state = AppState::new(settings, endpoints.feed_url().to_string());
    run_with_api(state, api).await
}

/// Run the dashboard with any range API implementation
pub async fn run_with_api<A>(mut state: AppState, api: A) -> Result<()>
where
    A: RangeApi + Clone + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_QUEUE_CAPACITY);
    signals::spawn_signal_handler(msg_tx.clone());

    let mut actions = ActionRunner::new(api);
    for message in Message::startup() {
        process_message(&mut state, message, &msg_tx, &mut actions);
    }

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &mut actions);

    actions.shutdown().await;
    ratatui::restore();

    info!("Dashboard stopped");
    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    actions: &mut ActionRunner<A>,
) -> Result<()>
where
    A: RangeApi + Clone + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Channel events, timers, range responses and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, actions);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, actions);
        }
    }

    Ok(())
}
