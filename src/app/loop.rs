use crate::app::{
    action::Action,
    input::{map_event_to_action, MenuContext},
    menu::CommandMenu,
    reducer,
    state::AppState,
    ui,
};
use crate::components::palette_view::PaletteView;
use crate::domain::ports::{ActionDispatcher, Navigator};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B, N, A>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    menu: CommandMenu<PaletteView, N, A>,
    action_rx: mpsc::Receiver<Action>,
) -> Result<AppState>
where
    B: Backend,
    N: Navigator,
    A: ActionDispatcher,
{
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || forward_events(&event_tx, event::poll, event::read));

    run_loop_with_events(terminal, app_state, menu, event_rx, action_rx).await
}

/// Blocking input reader. Polls with a timeout so it notices when the loop
/// has dropped its receiver, and never holds the runtime open on exit.
fn forward_events<P, R>(
    event_tx: &mpsc::Sender<Result<Event, std::io::Error>>,
    mut poll: P,
    mut read: R,
) where
    P: FnMut(Duration) -> std::io::Result<bool>,
    R: FnMut() -> std::io::Result<Event>,
{
    while !event_tx.is_closed() {
        let res = match poll(TICK_RATE) {
            Ok(false) => continue,
            Ok(true) => read(),
            Err(e) => Err(e),
        };
        let failed = res.is_err();
        if event_tx.blocking_send(res).is_err() || failed {
            break;
        }
    }
}

/// Render, wait for one event, reduce. Collaborator feedback (`action_rx`)
/// is drained before the next input event is taken.
pub async fn run_loop_with_events<B, N, A>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    mut menu: CommandMenu<PaletteView, N, A>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
    mut action_rx: mpsc::Receiver<Action>,
) -> Result<AppState>
where
    B: Backend,
    N: Navigator,
    A: ActionDispatcher,
{
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state, &mut menu);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            biased;

            // Collaborator feedback
            Some(a) = action_rx.recv() => Some(a),

            // User Input
            res = event_rx.recv() => {
                let Some(res) = res else {
                    tracing::debug!("input stream closed");
                    break;
                };
                let event = res?;
                let ctx = MenuContext {
                    is_open: menu.is_open(),
                    query: menu.query(),
                    view: menu.surface(),
                };
                map_event_to_action(event, &app_state, &ctx, terminal.size()?)
            },

            _ = interval.tick() => Some(Action::Tick),
        };

        // --- 3. Update ---
        if let Some(action) = action {
            if !matches!(action, Action::Tick) {
                tracing::trace!(?action, "reducing");
            }
            reducer::update(&mut app_state, &mut menu, action);
            if app_state.should_quit {
                break;
            }
        }
    }

    Ok(app_state)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
