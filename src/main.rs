use registration_form::config::HostConfig;
use registration_form::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let host = HostConfig::from_env()?;
    let app = server::app_router()?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", host.port)).await?;

    tracing::info!(port = host.port, "registration form listening");
    axum::serve(listener, app).await?;
    Ok(())
}
