//! # Outbound Messages
//!
//! What gets recorded and put on the wire when a form is sent. The shape is
//! fixed by the server: exactly `kind` and `content`, where `content` is the
//! form state already encoded as JSON text.
//!
//! ```json
//! {"kind":"movePlayer","content":"{\"changeX\":1.0,\"player\":3}"}
//! ```

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Action name
    pub kind: String,
    /// Serialized form state
    pub content: String,
}

impl Message {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            content: content.into(),
        }
    }

    /// Encode the record as the text payload handed to the transport.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
