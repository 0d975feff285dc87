use buzzwire::{BuzzwireError, BuzzwireServer};
use tracing_subscriber::EnvFilter;

/// Build a bind address from an environment variable holding a port number.
///
/// Unset or unparseable values fall back to `default_port`, matching how
/// deployment platforms inject `PORT` without a host part.
fn listen_addr(var: &str, default_port: u16) -> String {
    let port = std::env::var(var)
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(default_port);
    format!("0.0.0.0:{port}")
}

#[tokio::main]
async fn main() -> Result<(), BuzzwireError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let server = BuzzwireServer::builder()
        .bind(&listen_addr("PORT", 5000))
        .bind_http(&listen_addr("HTTP_PORT", 5001))
        .build()
        .await?;

    server.run().await
}
