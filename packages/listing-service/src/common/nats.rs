//! Common NATS publishing utilities.
//!
//! Domain events implement [`IntoNatsPayload`] to declare the subject and
//! JSON body they are published with. [`publish_event`] serialises and hands
//! them to whichever [`NatsPublisher`] the server was built with.

use anyhow::{Context, Result};
use bytes::Bytes;

use crate::kernel::NatsPublisher;

/// Trait for domain events that can be published to NATS.
///
/// # Example
///
/// ```ignore
/// impl IntoNatsPayload for MyEvent {
///     fn subject(&self) -> &'static str {
///         "my_domain.created"
///     }
///
///     fn into_payload(&self) -> serde_json::Value {
///         serde_json::json!({ "id": self.id })
///     }
/// }
/// ```
pub trait IntoNatsPayload: Send + Sync {
    /// Full NATS subject the event is published on.
    fn subject(&self) -> &'static str;

    /// Convert the event to its JSON wire payload.
    fn into_payload(&self) -> serde_json::Value;
}

/// Serialise `event` and publish it on its subject.
pub async fn publish_event<E: IntoNatsPayload>(nats: &dyn NatsPublisher, event: &E) -> Result<()> {
    let payload = serde_json::to_vec(&event.into_payload())
        .context("Failed to serialise NATS payload")?;

    nats.publish(event.subject().to_string(), Bytes::from(payload))
        .await
        .with_context(|| format!("Failed to publish to {}", event.subject()))
}
