use flume::{Receiver, Sender};

use crate::protocol::{
    client::ApiError,
    types::{DiscoverRequest, DiscoveredDevice, PingRequest},
};

/// Messages sent from the UI thread to the core worker thread.
#[derive(Debug, Clone, PartialEq)]
pub enum UiToCore {
    /// Reload the interface list (startup, refresh key, auto-refresh).
    LoadNics,
    /// Run a ping with already-validated parameters.
    Ping(PingRequest),
    /// Run a subnet scan with an already-validated prefix.
    Discover(DiscoverRequest),
    /// Graceful shutdown request.
    Quit,
}

/// Settle messages sent from the core worker back to the UI thread.
/// Every started action produces exactly one of these, on every path.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreToUi {
    /// Interface load settled. On success the cache has already been
    /// replaced; the payload is the new generation's size.
    NicsSettled(Result<usize, ApiError>),
    /// Ping settled with the raw output or a failure.
    PingSettled(Result<String, ApiError>),
    /// Discovery settled with the device list or a failure.
    DiscoverSettled(Result<Vec<DiscoveredDevice>, ApiError>),
}

/// Holder passed into the UI loop: receiving side from the core worker
/// plus the sending side towards it.
#[derive(Debug, Clone)]
pub struct Bus {
    pub core_rx: Receiver<CoreToUi>,
    pub ui_tx: Sender<UiToCore>,
}

impl Bus {
    pub fn new(core_rx: Receiver<CoreToUi>, ui_tx: Sender<UiToCore>) -> Self {
        Self { core_rx, ui_tx }
    }
}
