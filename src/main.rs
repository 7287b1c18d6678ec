//! Subscription relay.
//!
//! ```text
//!     Client ──GET /──▶ ┌────────────────┐ ──GET subUrl (via proxyUrl)──▶ ┌──────────┐
//!                       │   sub-relay    │                                │ upstream │
//!     Client ◀──text─── │ decode+rewrite │ ◀────────base64 body────────── └──────────┘
//!                       └────────────────┘
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use sub_relay::config::CliArgs;
use sub_relay::http::HttpServer;
use sub_relay::lifecycle::Shutdown;
use sub_relay::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let config = args.resolve()?;

    logging::init_logging(&config);

    tracing::info!("sub-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        listen_addr = %config.listen_addr,
        proxy = config.proxy().unwrap_or("direct"),
        legacy_padding = config.legacy_padding,
        timeout_secs = ?config.timeout_secs,
        "Configuration loaded"
    );

    if config.metrics_enabled {
        match config.metrics_address.parse::<std::net::SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listen_addr).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
