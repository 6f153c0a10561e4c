//! Pure display fragments: one interface record or one device slice in,
//! styled lines out. No terminal access here, so the card and list
//! content can be asserted in unit tests without a live backend.

use ratatui::{prelude::*, text::Line};
use unicode_width::UnicodeWidthStr;

use crate::protocol::types::{DiscoveredDevice, NetworkInterface};

/// Badge literals; exactly one of the two appears per card.
pub const STATUS_UP: &str = "✓ UP";
pub const STATUS_DOWN: &str = "✗ DOWN";

pub const NO_NICS_PLACEHOLDER: &str = "No network interfaces found.";
pub const NO_DEVICES_PLACEHOLDER: &str = "No devices found on the network.";

// Label column width for detail rows, unicode-aware.
const TARGET_LABEL_WIDTH: usize = 10;

fn detail_row(label: &str, value: String) -> Line<'static> {
    let label = format!("{label}:");
    let padding = TARGET_LABEL_WIDTH.saturating_sub(label.width());
    Line::from(vec![
        Span::styled(
            format!("  {label}{}", " ".repeat(padding)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

/// Render one interface card as a fragment of lines. Every backend field
/// is shown verbatim; `is_up` picks the accent color and the badge text,
/// nothing else changes between the two states.
pub fn render_nic_card(nic: &NetworkInterface) -> Vec<Line<'static>> {
    let accent = if nic.is_up { Color::Green } else { Color::Red };
    let badge = if nic.is_up { STATUS_UP } else { STATUS_DOWN };

    let header = Line::from(vec![
        Span::styled(
            format!("NIC #{}", nic.id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(" {} ", nic.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(badge, Style::default().fg(accent).add_modifier(Modifier::BOLD)),
    ]);

    vec![
        header,
        detail_row("IPv4", nic.ipv4.clone()),
        detail_row("Netmask", nic.netmask.clone()),
        detail_row("IPv6", nic.ipv6.clone()),
        detail_row("MAC", nic.mac.clone()),
        detail_row("Speed", nic.speed.to_string()),
        detail_row("MTU", nic.mtu.to_string()),
        detail_row(
            "Sent",
            format!("{} ({} packets)", nic.bytes_sent, nic.packets_sent),
        ),
        detail_row(
            "Received",
            format!("{} ({} packets)", nic.bytes_recv, nic.packets_recv),
        ),
        detail_row(
            "Errors",
            format!("In: {}, Out: {}", nic.errors_in, nic.errors_out),
        ),
        detail_row(
            "Drops",
            format!("In: {}, Out: {}", nic.drops_in, nic.drops_out),
        ),
    ]
}

/// Render the discovered-device list: ip and hostname stacked per entry,
/// response order preserved, no sorting or dedup.
pub fn render_device_list(devices: &[DiscoveredDevice]) -> Vec<Line<'static>> {
    if devices.is_empty() {
        return vec![Line::from(Span::styled(
            NO_DEVICES_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = Vec::with_capacity(devices.len() * 3);
    for (index, device) in devices.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            device.ip.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            device.hostname.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::types::DisplayValue;

    fn fragment_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sample_nic(is_up: bool) -> NetworkInterface {
        NetworkInterface {
            id: 3,
            name: "wlan0".to_string(),
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
    fn test_card_shows_every_field_verbatim() {
        let text = fragment_text(&render_nic_card(&sample_nic(true)));
        for literal in [
            "NIC #3",
            "wlan0",
            "192.168.1.23",
            "255.255.255.0",
            "fe80::21a",
            "aa:bb:cc:00:11:22",
            "300 Mbps",
            "1500",
            "4.56 MB (1234 packets)",
            "9.01 GB (5678 packets)",
            "In: 1, Out: 2",
            "In: 3, Out: 4",
        ] {
            assert!(text.contains(literal), "card is missing {literal:?}: {text}");
        }
    }

    #[test]
    fn test_badge_literal_tracks_is_up() {
        let up = fragment_text(&render_nic_card(&sample_nic(true)));
        assert!(up.contains(STATUS_UP));
        assert!(!up.contains(STATUS_DOWN));

        let down = fragment_text(&render_nic_card(&sample_nic(false)));
        assert!(down.contains(STATUS_DOWN));
        assert!(!down.contains(STATUS_UP));
    }

    #[test]
    fn test_device_list_keeps_response_order() {
        let devices = vec![
            DiscoveredDevice {
                ip: "192.168.1.9".to_string(),
                hostname: "printer.local".to_string(),
            },
            DiscoveredDevice {
                ip: "192.168.1.2".to_string(),
                hostname: "Unknown".to_string(),
            },
        ];
        let text = fragment_text(&render_device_list(&devices));
        let first = text.find("192.168.1.9").unwrap();
        let second = text.find("192.168.1.2").unwrap();
        assert!(first < second);
        assert!(text.contains("printer.local"));
    }

    #[test]
    fn test_empty_device_list_renders_placeholder() {
        let text = fragment_text(&render_device_list(&[]));
        assert_eq!(text, NO_DEVICES_PLACEHOLDER);
    }
}
