//! # MessageLog Component
//!
//! Bottom panel: the record of the last send, followed by the most recent
//! payloads received from the server (newest at the bottom, older lines
//! cut off when the panel is full).

use std::collections::VecDeque;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::message::Message;
use crate::tui::component::Component;

pub struct MessageLog<'a> {
    pub last_sent: Option<&'a Message>,
    pub sent_count: usize,
    pub received: &'a VecDeque<String>,
}

impl Component for MessageLog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Sent {} | Received {} ", self.sent_count, self.received.len()));
        let inner = block.inner(area);

        let sent_line = match self.last_sent {
            Some(msg) => Line::from(vec![
                Span::styled("→ ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    msg.kind.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(msg.content.clone()),
            ]),
            None => Line::styled("Nothing sent yet.", Style::default().fg(Color::DarkGray)),
        };

        // One row for the sent line, the rest for the newest received payloads
        let room = (inner.height as usize).saturating_sub(1);
        let skip = self.received.len().saturating_sub(room);

        let mut lines = vec![sent_line];
        lines.extend(self.received.iter().skip(skip).map(|payload| {
            Line::from(vec![
                Span::styled("← ", Style::default().fg(Color::Yellow)),
                Span::raw(payload.clone()),
            ])
        }));

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
