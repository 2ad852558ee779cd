/*
[INPUT]:  CLI arguments, environment credentials, OS shutdown signals
[OUTPUT]: Running HTTP gateway with graceful shutdown
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or shutdown handling
*/

use std::net::SocketAddr;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use docusign_adapter::DocusignClient;
use docusign_relay::{AppState, RelayConfig, create_router};

#[derive(Parser, Debug)]
#[command(name = "docusign-relay", version, about = "DocuSign e-signature relay gateway")]
struct Cli {
    #[arg(long = "bind", value_name = "ADDR", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(bind = %args.bind, "starting docusign-relay");

    let config = RelayConfig::from_env().context("load configuration")?;
    info!(
        client_id = %config.credentials.client_id,
        account_id = %config.credentials.account_id,
        "credentials loaded"
    );

    let client = DocusignClient::new().context("build http client")?;
    let state = AppState::new(client, config.credentials);
    let app = create_router(state);

    let shutdown = CancellationToken::new();
    setup_signal_handlers(shutdown.clone());

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("bind {}", args.bind))?;
    info!(addr = %args.bind, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("serve gateway")?;

    info!("gateway shutdown complete");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown_clone.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
