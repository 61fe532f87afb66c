//! # TitleBar Component
//!
//! Top status bar. Stateless: everything it shows is a prop.
//!
//! The text collapses depending on what there is to say:
//!
//! 1. **Status message**: `"Inspector (ws://localhost:3496/ws) | connected | Sent ping"`
//! 2. **Default**: `"Inspector (ws://localhost:3496/ws) | connected"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::ConnectionStatus;
use crate::tui::component::Component;

pub struct TitleBar<'a> {
    pub server_url: &'a str,
    pub connection: &'a ConnectionStatus,
    pub status_message: &'a str,
}

impl TitleBar<'_> {
    fn connection_style(&self) -> Style {
        match self.connection {
            ConnectionStatus::Connected => Style::default().fg(Color::Green),
            ConnectionStatus::Disconnected(_) => Style::default().fg(Color::Red),
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::raw(format!("Inspector ({}) | ", self.server_url)),
            Span::styled(self.connection.label(), self.connection_style()),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
