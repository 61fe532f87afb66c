//! # Action Menu Component
//!
//! Left-hand list of every configured action. Tab / Shift+Tab move the
//! selection, wrapping at both ends.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ActionMenuState` lives in `TuiState`
//! - `ActionMenu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the action menu.
pub struct ActionMenuState {
    pub len: usize,
    pub selected: usize,
    pub list_state: ListState,
}

impl ActionMenuState {
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self {
            len,
            selected: 0,
            list_state,
        }
    }

    fn select(&mut self, index: usize) -> Option<MenuEvent> {
        self.selected = index;
        self.list_state.select(Some(index));
        Some(MenuEvent::Selected(index))
    }
}

/// Events emitted by the action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Selected(usize),
}

impl EventHandler for ActionMenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::NextAction => self.select((self.selected + 1) % self.len),
            TuiEvent::PrevAction => self.select((self.selected + self.len - 1) % self.len),
            _ => None,
        }
    }
}

/// Transient render wrapper for the action menu.
pub struct ActionMenu<'a> {
    state: &'a mut ActionMenuState,
    names: Vec<&'a str>,
}

impl<'a> ActionMenu<'a> {
    pub fn new(state: &'a mut ActionMenuState, names: Vec<&'a str>) -> Self {
        Self { state, names }
    }
}

impl Component for ActionMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Actions ");

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::styled(truncate_str(name, inner_width), style))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.to_string().width() > max_width - 3 {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_tab_wraps_around() {
        let mut state = ActionMenuState::new(3);
        assert_eq!(
            state.handle_event(&TuiEvent::PrevAction),
            Some(MenuEvent::Selected(2))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::NextAction),
            Some(MenuEvent::Selected(0))
        );
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_empty_menu_ignores_events() {
        let mut state = ActionMenuState::new(0);
        assert_eq!(state.handle_event(&TuiEvent::NextAction), None);
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("ping", 10), "ping");
        assert_eq!(truncate_str("spawnZoneItems", 8), "spawn...");
        assert_eq!(truncate_str("abc", 2), "..");
    }

    #[test]
    fn test_render_lists_names() {
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ActionMenuState::new(2);

        terminal
            .draw(|f| {
                ActionMenu::new(&mut state, vec!["movePlayer", "ping"]).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("movePlayer"));
        assert!(text.contains("ping"));
    }
}
