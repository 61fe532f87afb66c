use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ActionMenu, FormCard, MessageLog, TitleBar};

/// Rows reserved for the sent/received panel.
const LOG_HEIGHT: u16 = 8;
/// Width of the action menu column.
const MENU_WIDTH: u16 = 26;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(LOG_HEIGHT)]);
    let [title_area, main_area, log_area] = layout.areas(frame.area());

    TitleBar {
        server_url: &app.server_url,
        connection: &app.connection,
        status_message: &app.status_message,
    }
    .render(frame, title_area);

    if app.actions.is_empty() {
        draw_empty_view(frame, main_area);
    } else {
        draw_actions(frame, main_area, app, tui);
    }

    MessageLog {
        last_sent: app.last_sent.as_ref(),
        sent_count: app.sent_count,
        received: &app.received,
    }
    .render(frame, log_area);
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [menu_area, form_area] = Layout::horizontal([Length(MENU_WIDTH), Min(0)]).areas(area);

    ActionMenu::new(&mut tui.menu, app.actions.names()).render(frame, menu_area);

    let selected = tui.menu.selected;
    if let (Some(form), Some(inputs)) = (app.actions.get(selected), tui.inputs.get_mut(selected)) {
        FormCard {
            name: form.name(),
            inputs,
        }
        .render(frame, form_area);
    }
}

fn draw_empty_view(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(
        "No actions configured.\nPass --actions <file> or set INSPECTOR_ACTIONS to a backend config (.yml or .json).",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));

    frame.render_widget(hint, area);
}
