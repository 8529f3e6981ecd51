use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ServerConfig::from_env().context("reading server configuration")?;
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "listening");

    todo_server::run(listener).await.context("serving HTTP")
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}
