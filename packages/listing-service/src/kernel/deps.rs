//! Server dependencies shared by every request handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::kernel::NatsPublisher;

/// Long-lived connections constructed once at startup and handed to the
/// listing actions by reference.
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: SqlitePool,
    pub nats: Arc<dyn NatsPublisher>,
}

impl ServerDeps {
    pub fn new(db_pool: SqlitePool, nats: Arc<dyn NatsPublisher>) -> Self {
        Self { db_pool, nats }
    }

    /// Release connections once the server has stopped accepting requests.
    ///
    /// Queued NATS messages are flushed first; a failed flush is logged and
    /// the database is closed regardless.
    pub async fn shutdown(&self) {
        if let Err(e) = self.nats.flush().await {
            tracing::warn!(error = %e, "Failed to flush pending NATS messages");
        }

        self.db_pool.close().await;
        tracing::info!("Database connection closed");
    }
}
