use ratatui::{prelude::*, widgets::*};

use crate::tui::{
    app::{App, Focus},
    ui::nic_card::{render_nic_card, NO_NICS_PLACEHOLDER},
};

pub const LOADING_TEXT: &str = "Loading network interfaces...";

/// Left panel: one card per cached interface, or the loading/placeholder
/// line. The panel content is rebuilt from scratch on every draw, so two
/// draws over the same list are identical.
pub fn render_nics_panel(f: &mut Frame, area: Rect, app: &App) {
    let mut block = Block::default()
        .title(" Network Interfaces ")
        .borders(Borders::ALL)
        .border_type(BorderType::Plain);
    if app.focus == Focus::Nics {
        block = block.border_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    }

    let content: Vec<Line> = if app.loading {
        vec![Line::from(Span::styled(
            LOADING_TEXT,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        match &app.nics_view {
            None => Vec::new(),
            Some(nics) if nics.is_empty() => vec![Line::from(Span::styled(
                NO_NICS_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))],
            Some(nics) => {
                let mut lines = Vec::new();
                for (index, nic) in nics.iter().enumerate() {
                    if index > 0 {
                        lines.push(Line::default());
                    }
                    lines.extend(render_nic_card(nic));
                }
                lines
            }
        }
    };

    let offset = content
        .len()
        .saturating_sub(1)
        .min(app.nics_scroll);
    let paragraph = Paragraph::new(content).block(block).scroll((offset as u16, 0));
    f.render_widget(paragraph, area);
}
