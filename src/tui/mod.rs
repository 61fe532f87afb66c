//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after a terminal event or a
//! transport event. Between those it sleeps in `poll_event_timeout`.
//!
//! ## Keys
//!
//! - Tab / Shift+Tab: next / previous action
//! - Up / Down: select field
//! - typing, paste, Backspace: edit the selected field (Space toggles bools)
//! - Enter: send the selected action
//! - Esc / Ctrl+C: quit

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::schema::ActionsConfig;
use crate::core::state::{App, ConnectionStatus};
use crate::transport::{DisconnectedTransport, Transport, TransportEvent, WebSocketTransport};
use crate::tui::component::EventHandler;
use crate::tui::components::{ActionMenuState, FieldEvent, FieldInputs, MenuEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long the loop sleeps waiting for input before checking the transport.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub menu: ActionMenuState,
    /// One field editor per form, same order as `App::actions`
    pub inputs: Vec<FieldInputs>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let inputs = app
            .actions
            .iter()
            .map(|form| FieldInputs::new(form.schema(), form.state()))
            .collect();
        Self {
            menu: ActionMenuState::new(app.actions.len()),
            inputs,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for field editing
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Connect to the server. A failed connection still yields a usable
/// (always failing) transport so the forms can be browsed offline.
pub async fn connect(
    url: &str,
) -> (
    Arc<dyn Transport>,
    Option<UnboundedReceiver<TransportEvent>>,
    ConnectionStatus,
) {
    match WebSocketTransport::connect(url).await {
        Ok((transport, events)) => {
            info!("Sending actions to {} via {}", transport.url(), transport.name());
            let transport: Arc<dyn Transport> = Arc::new(transport);
            (transport, Some(events), ConnectionStatus::Connected)
        }
        Err(e) => {
            warn!("Could not connect to {}: {}", url, e);
            let transport: Arc<dyn Transport> = Arc::new(DisconnectedTransport);
            (
                transport,
                None,
                ConnectionStatus::Disconnected(Some(e.to_string())),
            )
        }
    }
}

pub async fn run(config: ResolvedConfig, actions: Option<ActionsConfig>) -> std::io::Result<()> {
    let (transport, mut transport_events, connection) = connect(&config.server_url).await;
    let mut app = App::new(actions.as_ref(), transport, config.server_url.clone(), connection);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if handle_event(&mut app, &mut tui, &event) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }

        // Handle transport events (server frames, disconnect)
        if let Some(rx) = transport_events.as_mut() {
            while let Ok(transport_event) = rx.try_recv() {
                needs_redraw = true;
                debug!("Event loop received: {:?}", transport_event);
                let action = match transport_event {
                    TransportEvent::Received(payload) => Action::MessageReceived(payload),
                    TransportEvent::Closed(reason) => Action::Disconnected(reason),
                };
                update(&mut app, action);
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route one terminal event to the menu, the selected form's field editor,
/// or the core reducer.
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => Effect::None,
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::NextAction | TuiEvent::PrevAction => {
            if let Some(MenuEvent::Selected(index)) = tui.menu.handle_event(event) {
                debug!("Selected action {}", index);
            }
            Effect::None
        }
        TuiEvent::Submit => update(app, Action::Send(tui.menu.selected)),
        _ => {
            let form = tui.menu.selected;
            let Some(inputs) = tui.inputs.get_mut(form) else {
                return Effect::None;
            };
            match inputs.handle_event(event) {
                Some(FieldEvent::Changed { field, value }) => {
                    update(app, Action::SetField { form, field, value })
                }
                None => Effect::None,
            }
        }
    }
}
