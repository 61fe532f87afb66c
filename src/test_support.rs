//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use crate::core::schema::{ActionSchema, ActionsConfig, ParamType};
use crate::core::state::{App, ConnectionStatus};
use crate::transport::{Transport, TransportError};

/// Transport that keeps every payload in memory.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Transport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    fn send(&self, payload: String) -> Result<(), TransportError> {
        self.sent
            .lock()
            .map_err(|_| TransportError::Closed)?
            .push(payload);
        Ok(())
    }
}

/// Transport whose connection is always gone.
pub struct FailingTransport;

impl Transport for FailingTransport {
    fn name(&self) -> &str {
        "failing"
    }

    fn send(&self, _payload: String) -> Result<(), TransportError> {
        Err(TransportError::Closed)
    }
}

/// `ping` with a single integer field `x`.
pub fn ping_schema() -> ActionSchema {
    ActionSchema::new([("x".to_string(), ParamType::Int)])
}

/// Three actions: `movePlayer`, `ping`, `spawnZoneItems`.
pub fn sample_config() -> ActionsConfig {
    let mut config = ActionsConfig::default();
    config.actions.insert("ping".into(), ping_schema());
    config.actions.insert(
        "movePlayer".into(),
        ActionSchema::new([
            ("changeX".to_string(), ParamType::Float),
            ("changeY".to_string(), ParamType::Float),
            ("player".to_string(), ParamType::Id("player".into())),
        ]),
    );
    config.actions.insert(
        "spawnZoneItems".into(),
        ActionSchema::new([(
            "items".to_string(),
            ParamType::List(Box::new(ParamType::Id("item".into()))),
        )]),
    );
    config
}

/// Creates a test App over `sample_config()` and a throwaway RecordingTransport.
pub fn test_app() -> App {
    test_app_with().0
}

/// Like `test_app()`, but also hands back the transport for inspection.
pub fn test_app_with() -> (App, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    let app = App::new(
        Some(&sample_config()),
        transport.clone(),
        "ws://localhost:3496/ws".to_string(),
        ConnectionStatus::Connected,
    );
    (app, transport)
}
