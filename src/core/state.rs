//! # Application State
//!
//! Core state for the inspector. No TUI types here; presentation state
//! (selection, text drafts) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── actions: ActionList           // one form per configured action
//! ├── last_sent: Option<Message>    // record of the most recent send
//! ├── sent_count: usize             // sends since startup
//! ├── received: VecDeque<String>    // server payloads, newest last
//! ├── connection: ConnectionStatus  // shown in the title bar
//! ├── server_url: String
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::core::action_list::ActionList;
use crate::core::message::Message;
use crate::core::schema::ActionsConfig;
use crate::transport::Transport;

/// How many received payloads are kept for display.
pub const MAX_RECEIVED: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected(Option<String>),
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnected(_) => "disconnected",
        }
    }
}

pub struct App {
    pub actions: ActionList,
    pub last_sent: Option<Message>,
    pub sent_count: usize,
    pub received: VecDeque<String>,
    pub connection: ConnectionStatus,
    pub server_url: String,
    pub status_message: String,
}

impl App {
    pub fn new(
        config: Option<&ActionsConfig>,
        transport: Arc<dyn Transport>,
        server_url: String,
        connection: ConnectionStatus,
    ) -> Self {
        let actions = ActionList::new(config, transport);
        let status_message = if actions.is_empty() {
            String::from("No actions loaded")
        } else {
            format!("{} actions loaded", actions.len())
        };
        Self {
            actions,
            last_sent: None,
            sent_count: 0,
            received: VecDeque::new(),
            connection,
            server_url,
            status_message,
        }
    }

    /// Append a server payload, dropping the oldest beyond `MAX_RECEIVED`.
    pub fn push_received(&mut self, payload: String) {
        if self.received.len() == MAX_RECEIVED {
            self.received.pop_front();
        }
        self.received.push_back(payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.last_sent.is_none());
        assert_eq!(app.sent_count, 0);
        assert_eq!(app.connection, ConnectionStatus::Connected);
        assert_eq!(app.status_message, "3 actions loaded");
    }

    #[test]
    fn test_app_without_config() {
        let app = App::new(
            None,
            Arc::new(crate::test_support::RecordingTransport::new()),
            "ws://test".to_string(),
            ConnectionStatus::Connected,
        );
        assert!(app.actions.is_empty());
        assert_eq!(app.status_message, "No actions loaded");
    }

    #[test]
    fn test_received_is_bounded() {
        let mut app = test_app();
        for i in 0..MAX_RECEIVED + 5 {
            app.push_received(i.to_string());
        }
        assert_eq!(app.received.len(), MAX_RECEIVED);
        assert_eq!(app.received.front().map(String::as_str), Some("5"));
        assert_eq!(
            app.received.back().cloned(),
            Some((MAX_RECEIVED + 4).to_string())
        );
    }
}
