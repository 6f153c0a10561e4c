use ratatui::{prelude::*, widgets::*};

use crate::tui::app::{App, Focus, PingField};

pub const PING_PLACEHOLDER: &str = "Executing ping...";

const INDICATOR_SELECTED: &str = "> ";
const INDICATOR_UNSELECTED: &str = "  ";

fn field_line(label: &str, value: &str, selected: bool, editing_hint: &str) -> Line<'static> {
    let indicator = if selected {
        Span::styled(INDICATOR_SELECTED, Style::default().fg(Color::Green))
    } else {
        Span::raw(INDICATOR_UNSELECTED)
    };
    let mut spans = vec![
        indicator,
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
    ];
    if value.is_empty() && !editing_hint.is_empty() {
        spans.push(Span::styled(
            editing_hint.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Upper-right panel: ping form plus its result pane. The result pane's
/// border color is the success indicator; its text is the raw backend
/// output, shown verbatim.
pub fn render_ping_panel(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Ping;
    let mut block = Block::default()
        .title(" Ping Tool ")
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
            Constraint::Length(1), // host
            Constraint::Length(1), // count
            Constraint::Length(1), // notice
            Constraint::Length(1), // trigger
            Constraint::Min(0),    // result pane
        ])
        .split(inner);

    let host_selected = focused && app.ping_field == PingField::Host;
    let count_selected = focused && app.ping_field == PingField::Count;
    f.render_widget(
        Paragraph::new(field_line("Host", &app.ping_form.host, host_selected, "")),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(field_line(
            "Count",
            &app.ping_form.count,
            count_selected,
            "(default 4)",
        )),
        rows[1],
    );

    if let Some(notice) = &app.ping_form.notice {
        f.render_widget(
            Paragraph::new(notice.as_str()).style(Style::default().fg(Color::Yellow)),
            rows[2],
        );
    }

    let trigger_style = if app.ping_running {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(format!("[ {} ]", app.ping_trigger_label())).style(trigger_style),
        rows[3],
    );

    let border_color = match &app.ping_result {
        _ if app.ping_running => Color::DarkGray,
        Some(result) if result.ok => Color::Green,
        Some(_) => Color::Red,
        None => Color::DarkGray,
    };
    let result_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let text: String = if app.ping_running {
        PING_PLACEHOLDER.to_string()
    } else {
        app.ping_result
            .as_ref()
            .map(|result| result.text.clone())
            .unwrap_or_default()
    };
    f.render_widget(
        Paragraph::new(text)
            .block(result_block)
            .wrap(Wrap { trim: false }),
        rows[4],
    );
}
