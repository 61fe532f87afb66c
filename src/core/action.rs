//! # Actions
//!
//! Everything that can happen in the inspector becomes an `Action`.
//! User edits a field? That's `Action::SetField { .. }`.
//! Server pushes a frame? That's `Action::MessageReceived(payload)`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what to do next.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Sending goes through the form's transport handle, which only queues the
//! payload, so `update()` never blocks.

use log::{debug, info, warn};
use serde_json::Value;

use crate::core::state::{App, ConnectionStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Setter for one field of the form at `form`.
    SetField {
        form: usize,
        field: String,
        value: Value,
    },
    /// Trigger the form at this index.
    Send(usize),
    MessageReceived(String),
    Disconnected(Option<String>),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetField { form, field, value } => {
            match app.actions.get_mut(form) {
                Some(action_form) => action_form.set_field(field, value),
                None => debug!("SetField for unknown form index {}", form),
            }
            Effect::None
        }
        Action::Send(index) => {
            let Some(form) = app.actions.get(index) else {
                debug!("Send for unknown form index {}", index);
                return Effect::None;
            };
            let last_sent = &mut app.last_sent;
            match form.send(|msg| *last_sent = Some(msg)) {
                Ok(()) => {
                    app.sent_count += 1;
                    app.status_message = format!("Sent {}", form.name());
                }
                Err(e) => {
                    warn!("Failed to send {}: {}", form.name(), e);
                    app.status_message = format!("Send failed: {}", e);
                }
            }
            Effect::None
        }
        Action::MessageReceived(payload) => {
            app.push_received(payload);
            Effect::None
        }
        Action::Disconnected(reason) => {
            info!("Disconnected: {:?}", reason);
            app.status_message = match &reason {
                Some(r) if !r.is_empty() => format!("Disconnected: {}", r),
                _ => String::from("Disconnected"),
            };
            app.connection = ConnectionStatus::Disconnected(reason);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
