pub mod app;
pub mod input;
pub mod ui;

use anyhow::{anyhow, Result};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

use ratatui::{backend::CrosstermBackend, prelude::*};

use crate::{
    core::{
        bus::{Bus, UiToCore},
        worker,
    },
    protocol::client::ApiClient,
    tui::{
        app::{App, Focus},
        input::{map_key, Action},
    },
};

/// Run the dashboard until the user quits. Sets up the terminal, wires
/// the UI/worker bus, and fires the initial interface load the way the
/// page did on load.
pub fn start(client: ApiClient, refresh_secs: u64) -> Result<()> {
    log::info!("[TUI] niccmd starting...");

    let (ui_tx, ui_rx) = flume::unbounded();
    let (core_tx, core_rx) = flume::unbounded();
    let bus = Bus::new(core_rx, ui_tx);
    worker::spawn(client, ui_rx, core_tx);

    // Setup terminal
    let mut stdout = io::stdout();
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(&mut stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(refresh_secs > 0);
    if app.begin_load() {
        bus.ui_tx
            .send(UiToCore::LoadNics)
            .map_err(|err| anyhow!(err))?;
    }

    let res = run_app(&mut terminal, &mut app, &bus, refresh_secs);

    let _ = bus.ui_tx.send(UiToCore::Quit);

    // Restore terminal
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<&mut Stdout>>,
    app: &mut App,
    bus: &Bus,
    refresh_secs: u64,
) -> Result<()> {
    let mut last_auto = Instant::now();

    loop {
        // Apply settled work before drawing so a frame never shows a
        // disabled trigger whose action has already finished.
        while let Ok(message) = bus.core_rx.try_recv() {
            app.apply(message);
        }

        terminal.draw(|f| ui::render_ui(f, app))?;

        if app.auto_refresh
            && refresh_secs > 0
            && last_auto.elapsed() >= Duration::from_secs(refresh_secs)
        {
            last_auto = Instant::now();
            if app.begin_load() {
                bus.ui_tx
                    .send(UiToCore::LoadNics)
                    .map_err(|err| anyhow!(err))?;
            }
        }

        if !crossterm::event::poll(Duration::from_millis(200))? {
            continue;
        }
        let event = crossterm::event::read()?;
        let key = match event {
            crossterm::event::Event::Key(key) => key,
            _ => continue,
        };

        match map_key(key, app.focus) {
            Action::Quit => break,
            Action::Refresh => {
                last_auto = Instant::now();
                if app.begin_load() {
                    bus.ui_tx
                        .send(UiToCore::LoadNics)
                        .map_err(|err| anyhow!(err))?;
                }
            }
            Action::ToggleAuto => app.toggle_auto_refresh(),
            Action::FocusNext => app.focus_next(),
            Action::FocusPrev => app.focus_prev(),
            Action::FieldToggle => app.ping_field_toggle(),
            Action::ScrollUp => app.scroll_up(),
            Action::ScrollDown => app.scroll_down(),
            Action::Input(c) => app.edit_push(c),
            Action::Backspace => app.edit_backspace(),
            Action::Submit => match app.focus {
                Focus::Ping => {
                    if let Some(request) = app.submit_ping() {
                        bus.ui_tx
                            .send(UiToCore::Ping(request))
                            .map_err(|err| anyhow!(err))?;
                    }
                }
                Focus::Discovery => {
                    if let Some(request) = app.submit_discovery() {
                        bus.ui_tx
                            .send(UiToCore::Discover(request))
                            .map_err(|err| anyhow!(err))?;
                    }
                }
                Focus::Nics => {}
            },
            Action::None => {}
        }
    }

    terminal.clear()?;
    Ok(())
}
