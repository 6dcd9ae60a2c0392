use axum::{response::Redirect, routing::get};
use studio_server::{api_router, config::ServerConfig, email::ResendClient, AppState};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env()?;
    let provider = ResendClient::new(&config.resend)?;
    let state = AppState::new(provider, config.mail.clone(), config.provider_timeout);

    let index_file = config.dist_dir.join("index.html");

    let app = api_router(state)
        .route(
            "/favicon.ico",
            get(|| async { Redirect::temporary("/icon.svg") }),
        )
        .nest_service(
            "/",
            ServeDir::new(config.dist_dir.clone()).append_index_html_on_directories(true),
        )
        .fallback_service(ServeFile::new(index_file))
        .layer(TraceLayer::new_for_http());

    info!(
        recipients = config.mail.to.len(),
        timeout = ?config.provider_timeout,
        dist = %config.dist_dir.display(),
        "contact endpoint ready"
    );
    info!("listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
