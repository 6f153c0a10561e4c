use chrono::{DateTime, Local};

use crate::{
    core::{bus::CoreToUi, state},
    protocol::{
        client::ApiError,
        types::{DiscoverRequest, DiscoveredDevice, NetworkInterface, PingRequest},
        validate,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nics,
    Ping,
    Discovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingField {
    Host,
    Count,
}

#[derive(Debug, Default)]
pub struct PingForm {
    pub host: String,
    pub count: String,
    /// Inline validation message; shown next to the form, blocks submission.
    pub notice: Option<String>,
}

#[derive(Debug, Default)]
pub struct DiscoveryForm {
    pub prefix: String,
    pub notice: Option<String>,
}

/// Settled ping output plus the success flag that picks the border color.
#[derive(Debug, Clone, PartialEq)]
pub struct PingResult {
    pub text: String,
    pub ok: bool,
}

/// Settled discovery status line ("Found N device(s)" or an error).
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryStatus {
    pub text: String,
    pub ok: bool,
}

/// All mutable view state, owned by the UI thread. Workers never touch
/// this directly; their settle messages are applied through [`App::apply`].
pub struct App {
    pub focus: Focus,
    pub ping_field: PingField,

    /// Display copy of the interface list. `None` means the panel was
    /// cleared (startup or a load in flight that has not succeeded yet);
    /// `Some(vec![])` means a successful load returned no interfaces and
    /// the placeholder is shown.
    pub nics_view: Option<Vec<NetworkInterface>>,
    pub nics_scroll: usize,
    pub loading: bool,
    /// Shared error banner; cleared when the next load starts.
    pub error: Option<String>,
    pub last_refresh: Option<DateTime<Local>>,
    pub auto_refresh: bool,

    pub ping_form: PingForm,
    pub ping_running: bool,
    pub ping_result: Option<PingResult>,

    pub discovery_form: DiscoveryForm,
    pub discover_running: bool,
    pub discovery_status: Option<DiscoveryStatus>,
    /// `None` until a scan succeeds; `Some(vec![])` shows the placeholder.
    pub devices: Option<Vec<DiscoveredDevice>>,
}

impl App {
    pub fn new(auto_refresh: bool) -> Self {
        Self {
            focus: Focus::Nics,
            ping_field: PingField::Host,
            nics_view: None,
            nics_scroll: 0,
            loading: false,
            error: None,
            last_refresh: None,
            auto_refresh,
            ping_form: PingForm::default(),
            ping_running: false,
            ping_result: None,
            discovery_form: DiscoveryForm::default(),
            discover_running: false,
            discovery_status: None,
            devices: None,
        }
    }

    /// Enter the loading state for an interface reload. Returns false when
    /// a load is already in flight (the refresh trigger is disabled then).
    /// Clears the error banner and the interface panel, like the page did.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        self.nics_view = None;
        true
    }

    /// Validate the ping form and enter the in-progress state. Returns the
    /// request to send, or None when validation failed or a ping is
    /// already running; in both of those cases nothing goes on the wire.
    pub fn submit_ping(&mut self) -> Option<PingRequest> {
        if self.ping_running {
            return None;
        }
        let host = match validate::normalize_host(&self.ping_form.host) {
            Ok(host) => host,
            Err(err) => {
                self.ping_form.notice = Some(err.to_string());
                return None;
            }
        };
        let count = validate::parse_ping_count(&self.ping_form.count);

        self.ping_form.notice = None;
        self.ping_running = true;
        self.ping_result = None;
        Some(PingRequest { host, count })
    }

    /// Validate the discovery form and enter the in-progress state.
    pub fn submit_discovery(&mut self) -> Option<DiscoverRequest> {
        if self.discover_running {
            return None;
        }
        let network_prefix = match validate::validate_prefix(&self.discovery_form.prefix) {
            Ok(prefix) => prefix,
            Err(err) => {
                self.discovery_form.notice = Some(err.to_string());
                return None;
            }
        };

        self.discovery_form.notice = None;
        self.discover_running = true;
        self.discovery_status = None;
        self.devices = None;
        Some(DiscoverRequest { network_prefix })
    }

    /// Apply one settle message from the core worker. Each arm restores
    /// the trigger it belongs to, regardless of outcome.
    pub fn apply(&mut self, message: CoreToUi) {
        match message {
            CoreToUi::NicsSettled(Ok(_count)) => {
                self.loading = false;
                self.error = None;
                self.last_refresh = Some(Local::now());
                self.nics_view = Some(state::nics_snapshot());
                self.nics_scroll = 0;
            }
            CoreToUi::NicsSettled(Err(err)) => {
                self.loading = false;
                self.error = Some(match &err {
                    ApiError::Backend { reason, .. } => format!("Failed to load NICs: {reason}"),
                    ApiError::Transport(message) => {
                        format!("Error connecting to server: {message}")
                    }
                });
            }
            CoreToUi::PingSettled(Ok(output)) => {
                self.ping_running = false;
                self.ping_result = Some(PingResult {
                    text: output,
                    ok: true,
                });
            }
            CoreToUi::PingSettled(Err(err)) => {
                self.ping_running = false;
                let text = match err {
                    ApiError::Backend {
                        reason,
                        output: Some(output),
                    } => format!("Error: {reason}\n\n{output}"),
                    other => format!("Error: {other}"),
                };
                self.ping_result = Some(PingResult { text, ok: false });
            }
            CoreToUi::DiscoverSettled(Ok(devices)) => {
                self.discover_running = false;
                self.discovery_status = Some(DiscoveryStatus {
                    text: format!("Found {} device(s)", devices.len()),
                    ok: true,
                });
                self.devices = Some(devices);
            }
            CoreToUi::DiscoverSettled(Err(err)) => {
                self.discover_running = false;
                self.discovery_status = Some(DiscoveryStatus {
                    text: format!("Error: {err}"),
                    ok: false,
                });
            }
        }
    }

    pub fn ping_trigger_label(&self) -> &'static str {
        if self.ping_running {
            "Pinging..."
        } else {
            "Ping"
        }
    }

    pub fn discover_trigger_label(&self) -> &'static str {
        if self.discover_running {
            "Scanning..."
        } else {
            "Discover Devices"
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Nics => Focus::Ping,
            Focus::Ping => Focus::Discovery,
            Focus::Discovery => Focus::Nics,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Nics => Focus::Discovery,
            Focus::Ping => Focus::Nics,
            Focus::Discovery => Focus::Ping,
        };
    }

    pub fn ping_field_toggle(&mut self) {
        self.ping_field = match self.ping_field {
            PingField::Host => PingField::Count,
            PingField::Count => PingField::Host,
        };
    }

    /// Route a typed character into the focused form field.
    pub fn edit_push(&mut self, c: char) {
        match self.focus {
            Focus::Ping => match self.ping_field {
                PingField::Host => self.ping_form.host.push(c),
                PingField::Count => self.ping_form.count.push(c),
            },
            Focus::Discovery => self.discovery_form.prefix.push(c),
            Focus::Nics => {}
        }
    }

    pub fn edit_backspace(&mut self) {
        match self.focus {
            Focus::Ping => {
                match self.ping_field {
                    PingField::Host => self.ping_form.host.pop(),
                    PingField::Count => self.ping_form.count.pop(),
                };
            }
            Focus::Discovery => {
                self.discovery_form.prefix.pop();
            }
            Focus::Nics => {}
        }
    }

    pub fn toggle_auto_refresh(&mut self) {
        self.auto_refresh = !self.auto_refresh;
    }

    pub fn scroll_up(&mut self) {
        self.nics_scroll = self.nics_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.nics_scroll = self.nics_scroll.saturating_add(1);
    }
}
