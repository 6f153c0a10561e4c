// Rendering tests against ratatui's TestBackend: panel content is
// asserted on the drawn buffer, no live terminal involved.

use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

use niccmd::{
    protocol::types::{DiscoveredDevice, DisplayValue, NetworkInterface},
    tui::{
        app::{App, DiscoveryStatus, PingResult},
        ui,
    },
};

fn draw(app: &App) -> Buffer {
    let backend = TestBackend::new(110, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render_ui(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            match buffer.cell((x, y)) {
                Some(cell) => out.push_str(cell.symbol()),
                None => out.push(' '),
            }
        }
        out.push('\n');
    }
    out
}

fn has_cell_with_fg(buffer: &Buffer, color: Color) -> bool {
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                if cell.style().fg == Some(color) {
                    return true;
                }
            }
        }
    }
    false
}

fn sample_nic(id: u32, name: &str, is_up: bool) -> NetworkInterface {
    NetworkInterface {
        id,
        name: name.to_string(),
        is_up,
        ipv4: "192.168.1.23".to_string(),
        netmask: "255.255.255.0".to_string(),
        ipv6: "fe80::21a".to_string(),
        mac: "aa:bb:cc:00:11:22".to_string(),
        speed: DisplayValue::from("300 Mbps"),
        mtu: DisplayValue::from(1500),
        bytes_sent: DisplayValue::from("4.56 MB"),
        bytes_recv: DisplayValue::from("9.01 GB"),
        packets_sent: 1234,
        packets_recv: 5678,
        errors_in: 1,
        errors_out: 2,
        drops_in: 3,
        drops_out: 4,
    }
}

#[test]
fn test_cards_render_literal_values_and_badges() {
    let mut app = App::new(false);
    app.nics_view = Some(vec![sample_nic(1, "eth0", true), sample_nic(2, "wlan0", false)]);

    let text = buffer_text(&draw(&app));
    for literal in [
        "NIC #1",
        "eth0",
        "NIC #2",
        "wlan0",
        "192.168.1.23",
        "aa:bb:cc:00:11:22",
        "✓ UP",
        "✗ DOWN",
    ] {
        assert!(text.contains(literal), "missing {literal:?} in:\n{text}");
    }
}

#[test]
fn test_rerender_is_idempotent() {
    let mut app = App::new(false);
    app.nics_view = Some(vec![sample_nic(1, "eth0", true)]);

    let first = draw(&app);
    let second = draw(&app);
    assert_eq!(first, second);
}

#[test]
fn test_empty_interface_list_shows_placeholder_and_no_cards() {
    let mut app = App::new(false);
    app.nics_view = Some(vec![]);

    let text = buffer_text(&draw(&app));
    assert!(text.contains("No network interfaces found."));
    assert!(!text.contains("NIC #"));
}

#[test]
fn test_loading_indicator_replaces_cards() {
    let mut app = App::new(false);
    app.nics_view = Some(vec![sample_nic(1, "eth0", true)]);
    app.begin_load();

    let text = buffer_text(&draw(&app));
    assert!(text.contains("Loading network interfaces..."));
    assert!(!text.contains("NIC #1"));
}

#[test]
fn test_ping_success_pane_shows_output_with_success_color() {
    let mut app = App::new(false);
    app.ping_result = Some(PingResult {
        text: "4 packets transmitted, 4 received".to_string(),
        ok: true,
    });

    let buffer = draw(&app);
    let text = buffer_text(&buffer);
    assert!(text.contains("4 packets transmitted, 4 received"));
    // nothing in this frame is failure-colored
    assert!(!has_cell_with_fg(&buffer, Color::Red));
}

#[test]
fn test_ping_failure_pane_is_failure_colored() {
    let mut app = App::new(false);
    app.ping_result = Some(PingResult {
        text: "Error: Host unreachable or ping failed".to_string(),
        ok: false,
    });

    let buffer = draw(&app);
    let text = buffer_text(&buffer);
    assert!(text.contains("Error: Host unreachable"));
    assert!(has_cell_with_fg(&buffer, Color::Red));
}

#[test]
fn test_ping_in_progress_placeholder_and_label() {
    let mut app = App::new(false);
    app.ping_form.host = "8.8.8.8".to_string();
    app.submit_ping().unwrap();

    let text = buffer_text(&draw(&app));
    assert!(text.contains("Executing ping..."));
    assert!(text.contains("[ Pinging... ]"));
}

#[test]
fn test_discovery_results_and_empty_placeholder() {
    let mut app = App::new(false);
    app.discovery_status = Some(DiscoveryStatus {
        text: "Found 2 device(s)".to_string(),
        ok: true,
    });
    app.devices = Some(vec![
        DiscoveredDevice {
            ip: "192.168.1.9".to_string(),
            hostname: "printer.local".to_string(),
        },
        DiscoveredDevice {
            ip: "192.168.1.2".to_string(),
            hostname: "Unknown".to_string(),
        },
    ]);

    let text = buffer_text(&draw(&app));
    assert!(text.contains("Found 2 device(s)"));
    assert!(text.contains("192.168.1.9"));
    assert!(text.contains("printer.local"));

    app.discovery_status = Some(DiscoveryStatus {
        text: "Found 0 device(s)".to_string(),
        ok: true,
    });
    app.devices = Some(vec![]);
    let text = buffer_text(&draw(&app));
    assert!(text.contains("No devices found on the network."));
    assert!(!text.contains("192.168.1.9"));
}

#[test]
fn test_error_banner_is_visible() {
    let mut app = App::new(false);
    app.error = Some("Error connecting to server: connection refused".to_string());

    let text = buffer_text(&draw(&app));
    assert!(text.contains("Error connecting to server: connection refused"));
}

#[test]
fn test_validation_notice_is_inline() {
    let mut app = App::new(false);
    app.focus = niccmd::tui::app::Focus::Ping;
    assert_eq!(app.submit_ping(), None);

    let text = buffer_text(&draw(&app));
    assert!(text.contains("Please enter a host or IP address"));
}
