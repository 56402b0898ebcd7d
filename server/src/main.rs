use anyhow::Context;
use clients_server::config::Config;
use clients_server::InMemoryClientRepository;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("clients_server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load().context("invalid CLIENTS_* configuration")?;
    let repository = if config.seed_fixture {
        InMemoryClientRepository::seeded()
    } else {
        InMemoryClientRepository::new()
    };

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, seeded = config.seed_fixture, "listening");

    clients_server::serve(listener, clients_server::app_with(repository)).await?;
    Ok(())
}
