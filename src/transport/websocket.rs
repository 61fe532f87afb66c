//! WebSocket transport.
//!
//! The socket is split into two tasks:
//! - a writer that drains an unbounded channel into text frames, so
//!   [`Transport::send`] never blocks the UI loop;
//! - a reader that forwards incoming frames as [`TransportEvent`]s and reports
//!   the end of the connection exactly once.

use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use super::{Transport, TransportError};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Something that happened on the connection, delivered to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// A text (or UTF-8 decoded binary) frame from the server.
    Received(String),
    /// The connection ended, with the close reason or error if there was one.
    Closed(Option<String>),
}

pub struct WebSocketTransport {
    url: String,
    outgoing: mpsc::UnboundedSender<String>,
    reader: JoinHandle<()>,
}

impl WebSocketTransport {
    /// Connect to `url` and start the reader/writer tasks.
    ///
    /// Returns the transport plus the receiver for incoming events.
    pub async fn connect(
        url: &str,
    ) -> Result<(Self, mpsc::UnboundedReceiver<TransportEvent>), TransportError> {
        let (socket, _response) = connect_async(url)
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        info!("Connected to {}", url);

        let (write_half, read_half) = socket.split();
        let (outgoing, outgoing_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        spawn_writer(write_half, outgoing_rx);
        let reader = spawn_reader(read_half, events_tx);

        Ok((
            Self {
                url: url.to_string(),
                outgoing,
                reader,
            },
            events_rx,
        ))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for WebSocketTransport {
    fn name(&self) -> &str {
        "websocket"
    }

    fn send(&self, payload: String) -> Result<(), TransportError> {
        debug!("Queueing {} bytes for {}", payload.len(), self.url);
        self.outgoing
            .send(payload)
            .map_err(|_| TransportError::Closed)
    }
}

impl Drop for WebSocketTransport {
    fn drop(&mut self) {
        // The writer stops on its own once `outgoing` is dropped.
        self.reader.abort();
    }
}

fn spawn_writer(
    mut write_half: SplitSink<WsStream, WsMessage>,
    mut rx: mpsc::UnboundedReceiver<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            if let Err(e) = write_half.send(WsMessage::Text(payload.into())).await {
                warn!("WebSocket write failed: {}", e);
                return;
            }
        }
        let _ = write_half.close().await;
    })
}

fn spawn_reader(
    mut read_half: SplitStream<WsStream>,
    tx: mpsc::UnboundedSender<TransportEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let reason = loop {
            let text = match read_half.next().await {
                Some(Ok(WsMessage::Text(text))) => {
                    let text: &str = &text;
                    text.to_string()
                }
                Some(Ok(WsMessage::Binary(bytes))) => String::from_utf8_lossy(&bytes).into_owned(),
                Some(Ok(WsMessage::Close(frame))) => {
                    break frame.map(|f| {
                        let reason: &str = &f.reason;
                        reason.to_string()
                    });
                }
                Some(Ok(_)) => continue, // ping/pong
                Some(Err(e)) => break Some(e.to_string()),
                None => break None,
            };

            debug!("Received {} bytes", text.len());
            if tx.send(TransportEvent::Received(text)).is_err() {
                // UI loop is gone
                return;
            }
        };

        info!("Connection closed: {:?}", reason);
        let _ = tx.send(TransportEvent::Closed(reason));
    })
}

/// Stand-in used when the initial connection failed. Every send fails.
pub struct DisconnectedTransport;

impl Transport for DisconnectedTransport {
    fn name(&self) -> &str {
        "disconnected"
    }

    fn send(&self, _payload: String) -> Result<(), TransportError> {
        Err(TransportError::Closed)
    }
}
