//! padlink diagnostic sender.
//!
//! Headless binary that connects to the configured peer and streams
//! neutral snapshots at a fixed cadence until Ctrl-C. Useful for checking
//! a receiver end-to-end without any input hardware attached: the peer
//! should observe one 32-byte record per interval and a clean close on
//! shutdown.
//!
//! Configuration is read from `padlink.toml` in the working directory (or
//! the path given as the first argument); a missing file means defaults.
//! Log level comes from `RUST_LOG`, falling back to the config file.

use std::path::Path;

use anyhow::Context;
use padlink_client::{LinkConfig, PadLink};
use padlink_core::PadSnapshot;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "padlink.toml".to_string());
    let config = LinkConfig::load(Path::new(&config_path))
        .with_context(|| format!("loading config from {config_path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    info!(
        "padlink sender starting; peer {}:{}",
        config.peer_host, config.peer_port
    );

    let interval = config.send_interval();
    let (host, port) = (config.peer_host.clone(), config.peer_port);
    let link = PadLink::spawn(config);
    let mut status = link.observe_status();

    link.enqueue_connect(host, port);

    // Stream snapshots until Ctrl-C. Sends while the link is down are
    // silent no-ops, so a failed connect simply shows up in the status log
    // line rather than stopping the loop; re-run to retry.
    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                link.enqueue_state(PadSnapshot::neutral());
            }
            changed = status.changed() => {
                if changed.is_ok() {
                    let s = status.borrow().clone();
                    info!(
                        "link status: connected={} connecting={} error={:?}",
                        s.connected, s.connecting, s.last_error
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
        }
    }

    link.enqueue_disconnect();
    // Give the worker a moment to drain the queue and close the socket.
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    info!("padlink sender stopped");
    Ok(())
}
