use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use svgweb_engine::DirectoryLoader;
use svgweb_server::{router, AppState, ServeArgs, Settings};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "svgweb_server=info,svgweb_engine=info,tower_http=info";

/// Serve customizable SVG images over HTTP
#[derive(Parser, Debug)]
#[command(name = "svgweb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let settings = Settings::resolve(cli.serve, &cwd)?;

    if !settings.svg_dir.is_dir() {
        tracing::warn!(svg_dir = %settings.svg_dir.display(), "SVG directory does not exist");
    }

    let address = settings.address();
    let loader = DirectoryLoader::new(settings.svg_dir);
    tracing::info!(svg_dir = %loader.root().display(), "serving SVG files");
    let app = router(AppState::new(Arc::new(loader)));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("could not bind {}", address))?;

    tracing::info!(address = %address, "starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
