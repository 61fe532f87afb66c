//! # Action Form
//!
//! One editable form per action. The form owns its field values, seeded once
//! from the schema defaults, and knows how to send them.
//!
//! ```text
//!  editing ──send()──► serialize ─► record(msg) ─► transport.send(json) ──► editing
//!     ▲  │
//!     └──┘ set_field / set_state
//! ```
//!
//! Nothing is validated before sending. Whatever the state holds goes out.

use log::info;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::core::message::Message;
use crate::core::schema::{ActionSchema, FormState};
use crate::transport::{Transport, TransportError};

/// Why a send did not make it onto the transport.
#[derive(Debug)]
pub enum SendError {
    /// The form state (or the record around it) could not be encoded.
    Serialize(serde_json::Error),
    /// The transport refused the payload.
    Transport(TransportError),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Serialize(e) => write!(f, "serialization error: {e}"),
            SendError::Transport(e) => write!(f, "transport error: {e}"),
        }
    }
}

impl std::error::Error for SendError {}

impl From<serde_json::Error> for SendError {
    fn from(e: serde_json::Error) -> Self {
        SendError::Serialize(e)
    }
}

impl From<TransportError> for SendError {
    fn from(e: TransportError) -> Self {
        SendError::Transport(e)
    }
}

pub struct ActionForm {
    name: String,
    schema: ActionSchema,
    state: FormState,
    transport: Arc<dyn Transport>,
}

impl ActionForm {
    pub fn new(name: impl Into<String>, schema: ActionSchema, transport: Arc<dyn Transport>) -> Self {
        let state = schema.default_value();
        Self {
            name: name.into(),
            schema,
            state,
            transport,
        }
    }

    /// Action name, also the form's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &ActionSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Replace the whole form state.
    pub fn set_state(&mut self, state: FormState) {
        self.state = state;
    }

    /// Update a single field.
    pub fn set_field(&mut self, field: impl Into<String>, value: Value) {
        self.state.insert(field.into(), value);
    }

    /// Serialize the current state, hand the record to `record`, then transmit it.
    ///
    /// Serialization failures stop before anything is recorded. Transport
    /// failures happen after the record callback has run.
    pub fn send(&self, record: impl FnOnce(Message)) -> Result<(), SendError> {
        let content = serde_json::to_string(&self.state)?;
        let message = Message::new(self.name.as_str(), content);
        let payload = message.encode()?;

        record(message);

        info!(
            "Sending {} via {} ({} bytes)",
            self.name,
            self.transport.name(),
            payload.len()
        );
        self.transport.send(payload)?;
        Ok(())
    }
}
