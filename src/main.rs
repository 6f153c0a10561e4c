use clap::{Arg, Command};

use niccmd::{protocol::client::ApiClient, tui};

fn main() {
    env_logger::init();

    let matches = Command::new("niccmd")
        .about("Terminal dashboard for monitoring network interfaces")
        .arg(
            Arg::new("url")
                .long("url")
                .short('u')
                .default_value("http://127.0.0.1:5000")
                .help("Base URL of the monitoring backend"),
        )
        .arg(
            Arg::new("refresh")
                .long("refresh")
                .short('r')
                .default_value("0")
                .value_parser(clap::value_parser!(u64))
                .help("Auto-refresh interval in seconds (0 disables)"),
        )
        .get_matches();

    let url = matches
        .get_one::<String>("url")
        .expect("has a default value")
        .clone();
    let refresh = *matches
        .get_one::<u64>("refresh")
        .expect("has a default value");

    log::info!("backend at {url}, auto-refresh every {refresh}s");
    let client = ApiClient::new(url);

    if let Err(err) = tui::start(client, refresh) {
        eprintln!("niccmd exited with error: {err:#}");
        std::process::exit(1);
    }
}
