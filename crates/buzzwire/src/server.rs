//! `BuzzwireServer` builder and accept loop.
//!
//! Ties the layers together: the WebSocket transport feeds per-connection
//! session handlers, the HTTP pre-validation surface runs beside them, and
//! both share one [`GameHub`](crate::GameHub).

use std::net::SocketAddr;
use std::sync::Arc;

use buzzwire_transport::{Transport, WebSocketTransport};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::BuzzwireError;
use crate::handler::handle_connection;
use crate::http;
use crate::hub::{GameHub, SharedHub};

/// Builder for configuring and starting a Buzzwire server.
///
/// # Example
///
/// ```rust,ignore
/// use buzzwire::BuzzwireServer;
///
/// let server = BuzzwireServer::builder()
///     .bind("0.0.0.0:5000")
///     .bind_http("0.0.0.0:5001")
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct BuzzwireServerBuilder {
    ws_addr: String,
    http_addr: String,
}

impl BuzzwireServerBuilder {
    pub fn new() -> Self {
        Self {
            ws_addr: "127.0.0.1:5000".to_string(),
            http_addr: "127.0.0.1:5001".to_string(),
        }
    }

    /// Address for the real-time WebSocket listener.
    pub fn bind(mut self, addr: &str) -> Self {
        self.ws_addr = addr.to_string();
        self
    }

    /// Address for the HTTP pre-validation listener.
    pub fn bind_http(mut self, addr: &str) -> Self {
        self.http_addr = addr.to_string();
        self
    }

    /// Binds both listeners and assembles the server.
    pub async fn build(self) -> Result<BuzzwireServer, BuzzwireError> {
        let transport = WebSocketTransport::bind(&self.ws_addr).await?;
        let http_listener = TcpListener::bind(&self.http_addr).await?;
        tracing::info!(addr = %self.http_addr, "http surface listening");

        Ok(BuzzwireServer {
            transport,
            http_listener,
            hub: Arc::new(Mutex::new(GameHub::new())),
        })
    }
}

impl Default for BuzzwireServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Buzzwire server. Call [`run()`](Self::run) to start serving.
pub struct BuzzwireServer {
    transport: WebSocketTransport,
    http_listener: TcpListener,
    hub: SharedHub,
}

impl BuzzwireServer {
    pub fn builder() -> BuzzwireServerBuilder {
        BuzzwireServerBuilder::new()
    }

    /// Local address of the real-time listener.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.transport.local_addr()
    }

    /// Local address of the HTTP pre-validation listener.
    pub fn http_addr(&self) -> std::io::Result<SocketAddr> {
        self.http_listener.local_addr()
    }

    /// Serves both surfaces until the process is terminated.
    ///
    /// The HTTP router runs in its own task; the accept loop spawns a
    /// session handler per connection. A failed accept is logged and the
    /// loop carries on.
    pub async fn run(mut self) -> Result<(), BuzzwireError> {
        let router = http::router(Arc::clone(&self.hub));
        let http_listener = self.http_listener;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(http_listener, router).await {
                tracing::error!(error = %e, "http surface stopped");
            }
        });

        tracing::info!("buzzwire server running");

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let hub = Arc::clone(&self.hub);
                    tokio::spawn(handle_connection(conn, hub));
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
