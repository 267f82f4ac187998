//! Queue publishing: the transport wrapper, the sender and the SQS client behind it.

pub mod sender;
pub mod sqs;
pub mod transport;

use async_trait::async_trait;

use crate::errors::HookError;

pub use sender::QueueSender;
pub use sqs::SqsQueue;
pub use transport::TransportEnvelope;

/// Acknowledgment returned by the queue service for one accepted message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReceipt {
    pub message_id: Option<String>,
    pub md5_of_message_body: Option<String>,
    pub sequence_number: Option<String>,
}

#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Publishes `body` to `queue_url` with a single call.
    async fn send_message(&self, queue_url: &str, body: String) -> Result<SendReceipt, HookError>;
}
