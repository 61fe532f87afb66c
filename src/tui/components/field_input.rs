//! # FieldInputs Component
//!
//! Schema-driven editor for one action form. Renders a row per declared
//! param and turns keystrokes into typed values.
//!
//! ## State Management
//!
//! Each field keeps a text draft. After every edit the draft is parsed with
//! the field's `ParamType`:
//! - parse ok → `FieldEvent::Changed` is emitted and the parent feeds it to
//!   the form's setter;
//! - parse error → the row is flagged and the form keeps its previous value.
//!
//! The form state itself is never touched from here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use crate::core::schema::{ActionSchema, FormState, ParamType};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by FieldInputs
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// A field's draft parsed into a new value.
    Changed { field: String, value: Value },
}

struct FieldDraft {
    name: String,
    ty: ParamType,
    text: String,
    error: Option<String>,
}

pub struct FieldInputs {
    fields: Vec<FieldDraft>,
    /// Index of the field receiving keystrokes
    pub selected: usize,
}

impl FieldInputs {
    /// Seed drafts from the form's current state.
    pub fn new(schema: &ActionSchema, state: &FormState) -> Self {
        let fields = schema
            .params
            .iter()
            .map(|(name, ty)| FieldDraft {
                name: name.clone(),
                ty: ty.clone(),
                text: state
                    .get(name)
                    .map(|value| ty.format_value(value))
                    .unwrap_or_default(),
                error: None,
            })
            .collect();
        Self {
            fields,
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn selected_field(&self) -> Option<&str> {
        self.fields.get(self.selected).map(|f| f.name.as_str())
    }

    /// Current draft text of a field.
    pub fn draft(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.text.as_str())
    }

    /// Parse error of a field, if its draft doesn't parse.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.error.as_deref())
    }

    /// Parse the selected draft and emit the new value if it is well formed.
    fn commit(&mut self) -> Option<FieldEvent> {
        let field = self.fields.get_mut(self.selected)?;
        match field.ty.parse_input(&field.text) {
            Ok(value) => {
                field.error = None;
                Some(FieldEvent::Changed {
                    field: field.name.clone(),
                    value,
                })
            }
            Err(e) => {
                field.error = Some(e);
                None
            }
        }
    }
}

impl EventHandler for FieldInputs {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if !self.fields.is_empty() {
                    self.selected = (self.selected + 1).min(self.fields.len() - 1);
                }
                None
            }
            TuiEvent::InputChar(c) => {
                let field = self.fields.get_mut(self.selected)?;
                if field.ty == ParamType::Bool {
                    // Space flips; nothing else is meaningful for a checkbox
                    if *c != ' ' {
                        return None;
                    }
                    field.text = if field.text == "true" { "false" } else { "true" }.to_string();
                } else {
                    field.text.push(*c);
                }
                self.commit()
            }
            TuiEvent::Paste(text) => {
                let field = self.fields.get_mut(self.selected)?;
                if field.ty == ParamType::Bool {
                    return None;
                }
                field.text.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
                self.commit()
            }
            TuiEvent::Backspace => {
                let field = self.fields.get_mut(self.selected)?;
                if field.ty == ParamType::Bool || field.text.pop().is_none() {
                    return None;
                }
                self.commit()
            }
            _ => None,
        }
    }
}

impl Component for FieldInputs {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.fields.is_empty() {
            let empty = Paragraph::new("No parameters.").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        let label_width = self
            .fields
            .iter()
            .map(|f| f.name.width())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let is_selected = i == self.selected;
                let label_style = if is_selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let value_style = if field.error.is_some() {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Green)
                };

                let mut spans = vec![
                    Span::styled(format!("{:<label_width$}", field.name), label_style),
                    Span::raw(" "),
                    Span::styled(
                        format!("({})", field.ty),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(" "),
                    Span::styled(field.text.clone(), value_style),
                ];
                if let Some(error) = &field.error {
                    spans.push(Span::styled(
                        format!("  {error}"),
                        Style::default().fg(Color::Red).add_modifier(Modifier::DIM),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);

        if let Some(field) = self.fields.get(self.selected) {
            let prefix = label_width + 1 + field.ty.to_string().width() + 2 + 1;
            // Drafts can be wider than u16; no cursor when it would land off screen
            let x = u16::try_from(prefix + field.text.width())
                .ok()
                .and_then(|col| area.x.checked_add(col));
            let y = u16::try_from(self.selected)
                .ok()
                .and_then(|row| area.y.checked_add(row));
            if let (Some(x), Some(y)) = (x, y)
                && x < area.right()
                && y < area.bottom()
            {
                frame.set_cursor_position((x, y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ping_schema;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use serde_json::json;

    fn bool_schema() -> ActionSchema {
        ActionSchema::new([
            ("flag".to_string(), ParamType::Bool),
            ("name".to_string(), ParamType::String),
        ])
    }

    #[test]
    fn test_drafts_seeded_from_state() {
        let schema = ping_schema();
        let inputs = FieldInputs::new(&schema, &schema.default_value());
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs.draft("x"), Some("0"));
    }

    #[test]
    fn test_typing_emits_parsed_value() {
        let schema = ping_schema();
        let mut inputs = FieldInputs::new(&schema, &schema.default_value());

        // "0" → "" → "4" → "42"
        assert_eq!(inputs.handle_event(&TuiEvent::Backspace), None);
        assert!(inputs.error("x").is_some());
        assert_eq!(
            inputs.handle_event(&TuiEvent::InputChar('4')),
            Some(FieldEvent::Changed {
                field: "x".into(),
                value: json!(4)
            })
        );
        assert_eq!(
            inputs.handle_event(&TuiEvent::InputChar('2')),
            Some(FieldEvent::Changed {
                field: "x".into(),
                value: json!(42)
            })
        );
        assert!(inputs.error("x").is_none());
    }

    #[test]
    fn test_invalid_draft_emits_nothing() {
        let schema = ping_schema();
        let mut inputs = FieldInputs::new(&schema, &schema.default_value());
        assert_eq!(inputs.handle_event(&TuiEvent::InputChar('z')), None);
        assert_eq!(inputs.draft("x"), Some("0z"));
        assert!(inputs.error("x").is_some());
    }

    #[test]
    fn test_space_toggles_bool() {
        let schema = bool_schema();
        let mut inputs = FieldInputs::new(&schema, &schema.default_value());
        assert_eq!(inputs.selected_field(), Some("flag"));

        assert_eq!(
            inputs.handle_event(&TuiEvent::InputChar(' ')),
            Some(FieldEvent::Changed {
                field: "flag".into(),
                value: json!(true)
            })
        );
        assert_eq!(inputs.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(inputs.draft("flag"), Some("true"));
    }

    #[test]
    fn test_navigation_clamps() {
        let schema = bool_schema();
        let mut inputs = FieldInputs::new(&schema, &schema.default_value());
        inputs.handle_event(&TuiEvent::CursorUp);
        assert_eq!(inputs.selected, 0);
        inputs.handle_event(&TuiEvent::CursorDown);
        inputs.handle_event(&TuiEvent::CursorDown);
        assert_eq!(inputs.selected_field(), Some("name"));
    }

    #[test]
    fn test_paste_strips_newlines() {
        let schema = bool_schema();
        let mut inputs = FieldInputs::new(&schema, &schema.default_value());
        inputs.handle_event(&TuiEvent::CursorDown);
        let event = inputs.handle_event(&TuiEvent::Paste("hello\nworld".into()));
        assert_eq!(
            event,
            Some(FieldEvent::Changed {
                field: "name".into(),
                value: json!("helloworld")
            })
        );
    }

    #[test]
    fn test_render_shows_fields_and_types() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let schema = ping_schema();
        let mut inputs = FieldInputs::new(&schema, &schema.default_value());

        terminal
            .draw(|f| {
                inputs.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("x (int) 0"));
    }

    #[test]
    fn test_cursor_follows_selected_field() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let schema = bool_schema();
        let mut inputs = FieldInputs::new(&schema, &schema.default_value());
        inputs.handle_event(&TuiEvent::CursorDown);
        inputs.handle_event(&TuiEvent::InputChar('a'));

        terminal
            .draw(|f| {
                inputs.render(f, f.area());
            })
            .unwrap();

        // "name (string) a" → cursor right after the draft, on row 1
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!((cursor.x, cursor.y), (15, 1));
    }

    #[test]
    fn test_render_with_draft_wider_than_terminal() {
        let backend = TestBackend::new(100, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let schema = bool_schema();
        let mut inputs = FieldInputs::new(&schema, &schema.default_value());
        inputs.handle_event(&TuiEvent::CursorDown);
        inputs.handle_event(&TuiEvent::Paste("a".repeat(65535 - 11)));

        terminal
            .draw(|f| {
                inputs.render(f, Rect::new(30, 0, 70, 5));
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("name (string) aaaa"));
    }
}
