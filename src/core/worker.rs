use std::thread;

use flume::{Receiver, Sender};

use crate::{
    core::{
        bus::{CoreToUi, UiToCore},
        state,
    },
    protocol::client::ApiClient,
};

/// Spawn the core worker thread. Each incoming action runs on its own
/// short-lived thread so independent actions (a ping and a discovery, or
/// either alongside an interface load) may overlap and resolve in any
/// order. Every action sends exactly one settle message; the UI relies on
/// that to re-enable the trigger it disabled.
pub fn spawn(
    client: ApiClient,
    ui_rx: Receiver<UiToCore>,
    core_tx: Sender<CoreToUi>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(message) = ui_rx.recv() {
            match message {
                UiToCore::LoadNics => {
                    let client = client.clone();
                    let tx = core_tx.clone();
                    thread::spawn(move || {
                        let settled = client.fetch_nics().map(|nics| {
                            let count = nics.len();
                            state::replace_nics(nics);
                            count
                        });
                        if let Err(ref err) = settled {
                            log::warn!("interface load failed: {err}");
                        }
                        let _ = tx.send(CoreToUi::NicsSettled(settled));
                    });
                }
                UiToCore::Ping(request) => {
                    let client = client.clone();
                    let tx = core_tx.clone();
                    thread::spawn(move || {
                        let settled = client.ping(&request);
                        if let Err(ref err) = settled {
                            log::warn!("ping {} failed: {err}", request.host);
                        }
                        let _ = tx.send(CoreToUi::PingSettled(settled));
                    });
                }
                UiToCore::Discover(request) => {
                    let client = client.clone();
                    let tx = core_tx.clone();
                    thread::spawn(move || {
                        let settled = client.discover(&request);
                        if let Err(ref err) = settled {
                            log::warn!("discovery on {} failed: {err}", request.network_prefix);
                        }
                        let _ = tx.send(CoreToUi::DiscoverSettled(settled));
                    });
                }
                UiToCore::Quit => break,
            }
        }
        log::info!("core worker stopped");
    })
}
