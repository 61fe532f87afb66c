//! # FormCard Component
//!
//! Card for the selected action: the action name as the title, the field
//! editor inside, and the send hint along the bottom border.
//!
//! `FormCard` is transient (created each frame). It borrows the persistent
//! `FieldInputs` for the form being shown.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding};

use crate::tui::component::Component;
use crate::tui::components::field_input::FieldInputs;

pub struct FormCard<'a> {
    /// Action name (Prop)
    pub name: &'a str,
    /// Field editor for this action
    pub inputs: &'a mut FieldInputs,
}

impl Component for FormCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(" ➤ ", Style::default().fg(Color::Blue)),
            Span::styled(
                self.name,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);
        let hint = Line::from(" Enter Send  Tab Next action  ↑↓ Field  Esc Quit ").centered();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue))
            .title(title)
            .title_bottom(hint)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.inputs.render(frame, inner);
    }
}
