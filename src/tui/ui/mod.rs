pub mod bottom;
pub mod discovery_panel;
pub mod nic_card;
pub mod nics_panel;
pub mod ping_panel;

use ratatui::{prelude::*, widgets::*};

use crate::tui::app::App;

/// Draw one frame: title, the interface panel on the left, the ping and
/// discovery tools stacked on the right, hints and the error banner at
/// the bottom. Reads from `app` only; all mutation happens in the UI loop.
pub fn render_ui(f: &mut Frame, app: &App) {
    let area = f.area();
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(3),    // panels
            Constraint::Length(2), // banner + hints
        ])
        .split(area);

    let title = Paragraph::new("NIC Commander").alignment(Alignment::Center).style(
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, main_chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[1]);

    nics_panel::render_nics_panel(f, panels[0], app);

    let tools = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(panels[1]);
    ping_panel::render_ping_panel(f, tools[0], app);
    discovery_panel::render_discovery_panel(f, tools[1], app);

    bottom::render_bottom(f, main_chunks[2], app);
}
