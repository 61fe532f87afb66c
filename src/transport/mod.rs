//! # Transport
//!
//! The capability forms use to put a payload on the wire. Forms only ever
//! call [`Transport::send`]; connecting, reading and shutting down belong to
//! the concrete implementation.

pub mod websocket;

use std::fmt;

pub use websocket::{DisconnectedTransport, TransportEvent, WebSocketTransport};

/// Errors surfaced by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Could not establish the connection (bad URL, refused, handshake failed).
    Connect(String),
    /// The connection is gone; nothing can be sent anymore.
    Closed,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Connect(msg) => write!(f, "connect error: {msg}"),
            TransportError::Closed => write!(f, "connection closed"),
        }
    }
}

impl std::error::Error for TransportError {}

/// A handle that transmits text payloads.
///
/// `send` must not block: implementations queue the payload and return.
/// There is no acknowledgement.
pub trait Transport: Send + Sync {
    /// Returns the name of the transport (shown in the title bar).
    fn name(&self) -> &str;

    /// Queue a text payload for transmission.
    fn send(&self, payload: String) -> Result<(), TransportError>;
}
