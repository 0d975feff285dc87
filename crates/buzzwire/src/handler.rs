//! Per-connection session: outbound writer, decode loop, disconnect cleanup.
//!
//! Each accepted connection gets its own Tokio task running this handler.
//! Inbound frames are decoded and handed to the hub under its lock.
//! Outbound events arrive on an unbounded queue that the hub's broadcasts
//! feed; a separate writer task drains it onto the socket so a slow peer
//! never stalls the hub.

use std::sync::Arc;

use buzzwire_protocol::{ClientEvent, Codec, JsonCodec, ServerEvent};
use buzzwire_transport::{Connection, ConnectionId, WebSocketConnection};
use tokio::sync::mpsc;

use crate::hub::SharedHub;

/// Drop guard that runs disconnect cleanup when the session task exits,
/// panics included. `Drop` is synchronous, so the cleanup that needs the
/// hub lock runs in a spawned task.
struct DisconnectGuard {
    conn_id: ConnectionId,
    hub: SharedHub,
}

impl Drop for DisconnectGuard {
    fn drop(&mut self) {
        let conn_id = self.conn_id;
        let hub = Arc::clone(&self.hub);
        tokio::spawn(async move {
            hub.lock().await.disconnect(conn_id);
        });
    }
}

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection(conn: WebSocketConnection, hub: SharedHub) {
    let conn_id = conn.id();
    tracing::debug!(%conn_id, "session started");

    let conn = Arc::new(conn);
    let (sender, mut outbound) = mpsc::unbounded_channel::<ServerEvent>();

    // Writer half. Ends once every sender clone is gone: the local one
    // when this handler returns, the gateway's when disconnect cleanup
    // unsubscribes the connection. Ends early if the peer stops reading.
    {
        let conn = Arc::clone(&conn);
        tokio::spawn(async move {
            while let Some(event) = outbound.recv().await {
                let bytes = match JsonCodec.encode(&event) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to encode outbound event");
                        continue;
                    }
                };
                if conn.send(&bytes).await.is_err() {
                    break;
                }
            }
        });
    }

    let _guard = DisconnectGuard {
        conn_id,
        hub: Arc::clone(&hub),
    };

    loop {
        let data = match conn.recv().await {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::debug!(%conn_id, "connection closed");
                break;
            }
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "recv error");
                break;
            }
        };

        // A frame that fails to decode is dropped. One client's garbage
        // must not end its session, let alone anyone else's.
        let event: ClientEvent = match JsonCodec.decode(&data) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(%conn_id, error = %e, "ignoring undecodable frame");
                continue;
            }
        };

        hub.lock().await.handle_event(conn_id, &sender, event);
    }

    tracing::debug!(%conn_id, "session ended");
    // _guard drops here and disconnect cleanup fires.
}
