use tracing::info;

use super::{MessageQueue, SendReceipt, TransportEnvelope};
use crate::core::config::HookConfig;
use crate::errors::HookError;

/// Wraps serialized notifications for transport and publishes them.
///
/// The default destination comes from [`HookConfig::queue_url`]; callers may
/// override it per message.
pub struct QueueSender<Q> {
    queue: Q,
    default_destination: String,
}

impl<Q: MessageQueue> QueueSender<Q> {
    pub fn new(queue: Q, config: &HookConfig) -> Self {
        Self {
            queue,
            default_destination: config.queue_url.clone(),
        }
    }

    pub fn default_destination(&self) -> &str {
        &self.default_destination
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// # Errors
    ///
    /// Returns an error if the transport envelope cannot be serialized or the queue
    /// rejects the message. Queue failures are not retried.
    pub async fn send(
        &self,
        message: &str,
        destination: Option<&str>,
    ) -> Result<SendReceipt, HookError> {
        let queue_url = destination
            .filter(|d| !d.is_empty())
            .unwrap_or(self.default_destination.as_str());
        let body = TransportEnvelope::wrap(message).to_json()?;

        let receipt = self.queue.send_message(queue_url, body).await?;
        info!(
            queue_url,
            message_id = receipt.message_id.as_deref().unwrap_or(""),
            "Published inference notification"
        );
        Ok(receipt)
    }
}
