use ratatui::{prelude::*, widgets::*};

use crate::tui::app::App;

const HINTS: &str = "Tab switch panel   Enter submit   r refresh   a auto-refresh   q quit";

/// Bottom rows: the shared error banner (red, when set) above the key
/// hints and refresh status. The banner stays until the next successful
/// interface load clears it.
pub fn render_bottom(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    if let Some(error) = &app.error {
        let banner = Paragraph::new(error.as_str()).alignment(Alignment::Left).style(
            Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(banner, rows[0]);
    } else {
        let hints = Paragraph::new(HINTS)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hints, rows[0]);
    }

    let auto = if app.auto_refresh {
        "Auto-refresh: on"
    } else {
        "Auto-refresh: off"
    };
    let last = app
        .last_refresh
        .map(|t| format!("Last refresh {}", t.format("%H:%M:%S")))
        .unwrap_or_else(|| "Last refresh never".to_string());
    let status = Paragraph::new(format!("{auto}    {last}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green));
    f.render_widget(status, rows[1]);
}
