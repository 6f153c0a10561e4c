use ratatui::{prelude::*, widgets::*};

use crate::tui::{
    app::{App, Focus},
    ui::nic_card::render_device_list,
};

pub const SCANNING_TEXT: &str = "Scanning network... This may take a few moments.";

/// Lower-right panel: discovery form, status line, and the device list of
/// the last successful scan.
pub fn render_discovery_panel(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Discovery;
    let mut block = Block::default()
        .title(" Device Discovery ")
        .borders(Borders::ALL)
        .border_type(BorderType::Plain);
    if focused {
        block = block.border_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // prefix
            Constraint::Length(1), // notice
            Constraint::Length(1), // trigger
            Constraint::Length(1), // status
            Constraint::Min(0),    // device list
        ])
        .split(inner);

    let indicator = if focused {
        Span::styled("> ", Style::default().fg(Color::Green))
    } else {
        Span::raw("  ")
    };
    let mut prefix_spans = vec![
        indicator,
        Span::styled("Prefix: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(app.discovery_form.prefix.clone()),
    ];
    if app.discovery_form.prefix.is_empty() {
        prefix_spans.push(Span::styled(
            "(e.g. 192.168.1)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(prefix_spans)), rows[0]);

    if let Some(notice) = &app.discovery_form.notice {
        f.render_widget(
            Paragraph::new(notice.as_str()).style(Style::default().fg(Color::Yellow)),
            rows[1],
        );
    }

    let trigger_style = if app.discover_running {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(format!("[ {} ]", app.discover_trigger_label())).style(trigger_style),
        rows[2],
    );

    // Status text: scanning while in flight, then the settled summary;
    // recolored red on failure.
    if app.discover_running {
        f.render_widget(
            Paragraph::new(SCANNING_TEXT).style(Style::default().fg(Color::DarkGray)),
            rows[3],
        );
    } else if let Some(status) = &app.discovery_status {
        let color = if status.ok { Color::Green } else { Color::Red };
        f.render_widget(
            Paragraph::new(status.text.as_str()).style(Style::default().fg(color)),
            rows[3],
        );
    }

    if let Some(devices) = &app.devices {
        let list = Paragraph::new(render_device_list(devices)).wrap(Wrap { trim: false });
        f.render_widget(list, rows[4]);
    }
}
